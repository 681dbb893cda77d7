// Example: merging the ambient environment into a declarative snapshot.
use scrollkit::{
    Alignment, Axes, Environment, IndicatorStyle, OffsetBehavior, Platform, ViewportConfiguration,
};

fn main() {
    let config = ViewportConfiguration::default()
        .with_axes(Axes::HORIZONTAL)
        .with_offset_behavior(
            OffsetBehavior::MAINTAIN_ON_CONTENT_SIZE_CHANGE
                | OffsetBehavior::MAINTAIN_ON_KEYBOARD_FRAME_CHANGE,
        );

    let env = Environment::new(Platform::Ios)
        .with_initial_content_alignment(Some(Alignment::TRAILING))
        .with_indicator_style(Some(IndicatorStyle::Hidden {
            horizontal: true,
            vertical: false,
        }));

    let resolved = config.resolved(&env);
    println!("offset_behavior={:?}", resolved.offset_behavior);
    println!("alignment={:?}", resolved.initial_content_alignment);
    println!(
        "indicators: horizontal={} vertical={}",
        resolved.shows_horizontal_indicator, resolved.shows_vertical_indicator
    );

    let tv = config.resolved(&Environment::new(Platform::TvOs).with_scroll_enabled(false));
    println!("tvos: scroll_enabled={}", tv.is_scroll_enabled);
}
