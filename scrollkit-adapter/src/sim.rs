use scrollkit::{
    Color, ContentInsetAdjustment, DecelerationRate, EdgeInsets, IndicatorScheme,
    KeyboardDismissMode, Point, Size, TouchCountBounds, Viewport,
};

use crate::{Easing, Tween};

/// Generates a getter/setter pair over a plain field; setters count as writes.
macro_rules! property {
    ($get:ident, $set:ident, $field:ident, $ty:ty) => {
        fn $get(&self) -> $ty {
            self.$field
        }

        fn $set(&mut self, value: $ty) {
            self.write_count += 1;
            self.$field = value;
        }
    };
}

/// An in-memory [`Viewport`] for hosts without a platform scroll view, and for tests.
///
/// Animated offset writes start a [`Tween`]; adapters advance it by calling
/// [`SimulatedViewport::tick`] each frame. While a tween runs (or the user drags),
/// `is_scrolling()` reports `true`.
#[derive(Clone, Debug)]
pub struct SimulatedViewport {
    offset: Point,
    content_size: Size,
    bounds_size: Size,
    content_inset: EdgeInsets,
    zoom_scale: f64,
    minimum_zoom_scale: f64,
    maximum_zoom_scale: f64,
    bounces_zoom: bool,
    bounces: bool,
    always_bounce_vertical: bool,
    always_bounce_horizontal: bool,
    directional_lock: bool,
    paging: bool,
    scroll_enabled: bool,
    scrolls_to_top: bool,
    shows_vertical_indicator: bool,
    shows_horizontal_indicator: bool,
    vertical_indicator_insets: EdgeInsets,
    horizontal_indicator_insets: EdgeInsets,
    indicator_scheme: IndicatorScheme,
    deceleration_rate: DecelerationRate,
    pan_touches: TouchCountBounds,
    content_inset_adjustment: ContentInsetAdjustment,
    keyboard_dismiss_mode: KeyboardDismissMode,

    refresh_attached: bool,
    refresh_tint: Option<Color>,
    refresh_height: f64,
    refresh_animating: bool,

    now_ms: u64,
    animation_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
    dragging: bool,

    write_count: usize,
}

impl SimulatedViewport {
    pub fn new(bounds_size: Size, content_size: Size) -> Self {
        Self {
            offset: Point::ZERO,
            content_size,
            bounds_size,
            content_inset: EdgeInsets::ZERO,
            zoom_scale: 1.0,
            minimum_zoom_scale: 1.0,
            maximum_zoom_scale: 1.0,
            bounces_zoom: false,
            bounces: true,
            always_bounce_vertical: false,
            always_bounce_horizontal: false,
            directional_lock: false,
            paging: false,
            scroll_enabled: true,
            scrolls_to_top: true,
            shows_vertical_indicator: true,
            shows_horizontal_indicator: true,
            vertical_indicator_insets: EdgeInsets::ZERO,
            horizontal_indicator_insets: EdgeInsets::ZERO,
            indicator_scheme: IndicatorScheme::Default,
            deceleration_rate: DecelerationRate::Normal,
            pan_touches: TouchCountBounds::default(),
            content_inset_adjustment: ContentInsetAdjustment::Automatic,
            keyboard_dismiss_mode: KeyboardDismissMode::None,
            refresh_attached: false,
            refresh_tint: None,
            refresh_height: 60.0,
            refresh_animating: false,
            now_ms: 0,
            animation_ms: 250,
            easing: Easing::SmoothStep,
            tween: None,
            dragging: false,
            write_count: 0,
        }
    }

    /// Sets the duration of animated offset writes. `0` makes every write immediate.
    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.animation_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn with_refresh_control_height(mut self, height: f64) -> Self {
        self.refresh_height = height;
        self
    }

    /// Number of property and offset writes received so far.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The offset an in-flight animation is heading to, or the current offset.
    pub fn target_offset(&self) -> Point {
        self.tween.map_or(self.offset, |t| t.to)
    }

    pub fn is_refresh_control_attached(&self) -> bool {
        self.refresh_attached
    }

    pub fn is_refresh_control_animating(&self) -> bool {
        self.refresh_animating
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    pub fn set_bounds_size(&mut self, size: Size) {
        self.bounds_size = size;
    }

    /// A user drag moved the content. Cancels any animation.
    pub fn drag_to(&mut self, offset: Point) {
        self.tween = None;
        self.dragging = true;
        self.offset = offset;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Advances the clock.
    ///
    /// Returns the new offset while an animation runs, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<Point> {
        self.now_ms = now_ms;
        let tween = self.tween?;
        self.offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.offset)
    }

    /// Runs animations to completion.
    pub fn finish_animations(&mut self) {
        if let Some(tween) = self.tween.take() {
            self.offset = tween.to;
            self.now_ms = self.now_ms.max(tween.start_ms.saturating_add(tween.duration_ms));
        }
    }
}

impl Viewport for SimulatedViewport {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point, animated: bool) {
        self.write_count += 1;
        if animated && self.animation_ms > 0 {
            match &mut self.tween {
                Some(tween) => tween.retarget(self.now_ms, offset, self.animation_ms),
                None => {
                    self.tween = Some(Tween::new(
                        self.offset,
                        offset,
                        self.now_ms,
                        self.animation_ms,
                        self.easing,
                    ))
                }
            }
        } else {
            self.tween = None;
            self.offset = offset;
        }
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn bounds_size(&self) -> Size {
        self.bounds_size
    }

    fn is_scrolling(&self) -> bool {
        self.tween.is_some() || self.dragging
    }

    fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    fn set_zoom_scale(&mut self, scale: f64) {
        self.write_count += 1;
        self.zoom_scale = scale.max(self.minimum_zoom_scale).min(self.maximum_zoom_scale);
    }

    property!(content_inset, set_content_inset, content_inset, EdgeInsets);
    property!(
        minimum_zoom_scale,
        set_minimum_zoom_scale,
        minimum_zoom_scale,
        f64
    );
    property!(
        maximum_zoom_scale,
        set_maximum_zoom_scale,
        maximum_zoom_scale,
        f64
    );
    property!(bounces_zoom, set_bounces_zoom, bounces_zoom, bool);
    property!(bounces, set_bounces, bounces, bool);
    property!(
        always_bounce_vertical,
        set_always_bounce_vertical,
        always_bounce_vertical,
        bool
    );
    property!(
        always_bounce_horizontal,
        set_always_bounce_horizontal,
        always_bounce_horizontal,
        bool
    );
    property!(
        is_directional_lock_enabled,
        set_directional_lock_enabled,
        directional_lock,
        bool
    );
    property!(is_paging_enabled, set_paging_enabled, paging, bool);
    property!(is_scroll_enabled, set_scroll_enabled, scroll_enabled, bool);
    property!(scrolls_to_top, set_scrolls_to_top, scrolls_to_top, bool);
    property!(
        shows_vertical_indicator,
        set_shows_vertical_indicator,
        shows_vertical_indicator,
        bool
    );
    property!(
        shows_horizontal_indicator,
        set_shows_horizontal_indicator,
        shows_horizontal_indicator,
        bool
    );
    property!(
        vertical_indicator_insets,
        set_vertical_indicator_insets,
        vertical_indicator_insets,
        EdgeInsets
    );
    property!(
        horizontal_indicator_insets,
        set_horizontal_indicator_insets,
        horizontal_indicator_insets,
        EdgeInsets
    );
    property!(
        indicator_scheme,
        set_indicator_scheme,
        indicator_scheme,
        IndicatorScheme
    );
    property!(
        deceleration_rate,
        set_deceleration_rate,
        deceleration_rate,
        DecelerationRate
    );
    property!(pan_touches, set_pan_touches, pan_touches, TouchCountBounds);
    property!(
        content_inset_adjustment,
        set_content_inset_adjustment,
        content_inset_adjustment,
        ContentInsetAdjustment
    );
    property!(
        keyboard_dismiss_mode,
        set_keyboard_dismiss_mode,
        keyboard_dismiss_mode,
        KeyboardDismissMode
    );
    property!(
        refresh_control_tint,
        set_refresh_control_tint,
        refresh_tint,
        Option<Color>
    );

    fn attach_refresh_control(&mut self) {
        self.write_count += 1;
        self.refresh_attached = true;
    }

    fn detach_refresh_control(&mut self) {
        self.write_count += 1;
        self.refresh_attached = false;
        self.refresh_animating = false;
    }

    fn refresh_control_height(&self) -> f64 {
        self.refresh_height
    }

    fn set_refresh_control_animating(&mut self, animating: bool) {
        self.write_count += 1;
        self.refresh_animating = animating;
    }
}
