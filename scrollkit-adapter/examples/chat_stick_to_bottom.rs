use scrollkit::{
    Alignment, Environment, OffsetBehavior, Point, Size, Viewport, ViewportConfiguration,
};
use scrollkit_adapter::{Easing, ScrollHost, SimulatedViewport};

fn main() {
    // Example: a chat transcript that follows new messages while the reader is at the bottom.
    //
    // An adapter would:
    // - call update() with each new snapshot
    // - wrap every layout pass that changes content size in mutate_content()
    // - call tick(now_ms) in a frame loop and report offsets back with on_user_scroll()
    let viewport = SimulatedViewport::new(Size::new(320.0, 480.0), Size::new(320.0, 1000.0))
        .with_animation(200, Easing::EaseInOutCubic);
    let mut host = ScrollHost::new(viewport, Environment::default());

    host.update(
        ViewportConfiguration::default()
            .with_initial_content_alignment(Some(Alignment::BOTTOM))
            .with_offset_behavior(OffsetBehavior::SMART_ALIGN_ON_CONTENT_SIZE_CHANGE),
    );
    println!("start: offset={:?}", host.viewport().content_offset());

    let mut now_ms = 0u64;
    for message in 1..=3 {
        let height = host.viewport().content_size().height + 90.0;
        host.mutate_content(true, |v| v.set_content_size(Size::new(320.0, height)));

        while let Some(off) = host.viewport_mut().tick(now_ms) {
            host.on_user_scroll(off);
            now_ms += 16;
        }
        println!(
            "message {message}: content={} offset={:?}",
            height,
            host.viewport().content_offset()
        );
    }

    // Scrolled up into history: arrivals no longer move the viewport.
    host.viewport_mut().drag_to(Point::new(0.0, 120.0));
    host.viewport_mut().end_drag();
    host.mutate_content(true, |v| v.set_content_size(Size::new(320.0, 2000.0)));
    println!("reading history: offset={:?}", host.viewport().content_offset());
}
