use alloc::sync::Arc;

use crate::{
    Alignment, Axes, Color, EdgeInsets, OffsetBehavior, Point, Size, TouchCountBounds,
    VerticalAlignment,
};

/// A callback fired when the user scrolls the container.
pub type OnOffsetChangeCallback = Arc<dyn Fn(ContentOffset) + Send + Sync>;

/// A callback fired with the current zoom scale.
pub type OnZoomCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// A callback without arguments (refresh requested, drag ended).
pub type ActionCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentInsetAdjustment {
    #[default]
    Automatic,
    ScrollableAxes,
    Never,
    Always,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardDismissMode {
    #[default]
    None,
    OnDrag,
    Interactive,
}

/// Color scheme of the scroll indicators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorScheme {
    #[default]
    Default,
    Black,
    White,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecelerationRate {
    #[default]
    Normal,
    Fast,
}

/// Per-axis insets of the scroll indicators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorInsets {
    pub horizontal: EdgeInsets,
    pub vertical: EdgeInsets,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomScale {
    pub minimum: f64,
    pub maximum: f64,
}

impl ZoomScale {
    pub fn new(minimum: f64, maximum: f64) -> Self {
        if minimum > maximum {
            swarn!(minimum, maximum, "ZoomScale: minimum exceeds maximum");
            debug_assert!(
                minimum <= maximum,
                "ZoomScale: minimum exceeds maximum (min={minimum}, max={maximum})"
            );
            return Self {
                minimum: maximum,
                maximum: minimum,
            };
        }
        Self { minimum, maximum }
    }

    pub fn allows_zoom(&self) -> bool {
        self.minimum < self.maximum
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self {
            minimum: 1.0,
            maximum: 1.0,
        }
    }
}

/// A read/write binding to a content offset owned by the caller.
#[derive(Clone)]
pub struct OffsetBinding {
    get: Arc<dyn Fn() -> Point + Send + Sync>,
    set: Arc<dyn Fn(Point) + Send + Sync>,
}

impl OffsetBinding {
    pub fn new(
        get: impl Fn() -> Point + Send + Sync + 'static,
        set: impl Fn(Point) + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// A binding that always reads `value` and ignores writes.
    pub fn constant(value: Point) -> Self {
        Self::new(move || value, |_| {})
    }

    pub fn get(&self) -> Point {
        (self.get)()
    }

    pub fn set(&self, value: Point) {
        (self.set)(value)
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.get, &other.get) && Arc::ptr_eq(&self.set, &other.set)
    }
}

impl core::fmt::Debug for OffsetBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("OffsetBinding").field(&self.get()).finish()
    }
}

/// The pull-to-refresh capability of a scroll container.
///
/// A configuration carries this only when the caller asked for refresh support, either by
/// supplying a refresh action or by driving the refreshing state.
#[derive(Clone, Default)]
pub struct RefreshConfig {
    pub on_refresh: Option<ActionCallback>,
    /// Externally driven refreshing state. `None` leaves the control alone.
    pub is_refreshing: Option<bool>,
    pub tint: Option<Color>,
}

impl RefreshConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_refresh(mut self, on_refresh: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_refresh = Some(Arc::new(on_refresh));
        self
    }

    pub fn with_is_refreshing(mut self, is_refreshing: bool) -> Self {
        self.is_refreshing = Some(is_refreshing);
        self
    }

    pub fn with_tint(mut self, tint: Option<Color>) -> Self {
        self.tint = tint;
        self
    }
}

impl PartialEq for RefreshConfig {
    fn eq(&self, other: &Self) -> bool {
        opt_arc_eq(&self.on_refresh, &other.on_refresh)
            && self.is_refreshing == other.is_refreshing
            && self.tint == other.tint
    }
}

impl core::fmt::Debug for RefreshConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefreshConfig")
            .field("on_refresh", &self.on_refresh.as_ref().map(|_| ".."))
            .field("is_refreshing", &self.is_refreshing)
            .field("tint", &self.tint)
            .finish()
    }
}

/// The offset reported to `on_offset_change`, together with the geometry it was measured
/// against.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentOffset {
    pub offset: Point,
    pub content_size: Size,
    pub container_size: Size,
}

impl ContentOffset {
    /// The offset as a fraction of the scrollable extent on each axis.
    ///
    /// An axis that cannot scroll reports `0.0`.
    pub fn relative(&self) -> Point {
        let extent_x = self.content_size.width - self.container_size.width;
        let extent_y = self.content_size.height - self.container_size.height;
        Point::new(
            if extent_x > 0.0 {
                self.offset.x / extent_x
            } else {
                0.0
            },
            if extent_y > 0.0 {
                self.offset.y / extent_y
            } else {
                0.0
            },
        )
    }
}

/// The desired properties of a scroll container for one reconciliation pass.
///
/// This type is cheap to clone: callbacks are stored in `Arc`s, so a declarative layer can build
/// a fresh snapshot per update and hand it to [`crate::ScrollContainer::apply`].
pub struct ViewportConfiguration {
    pub axes: Axes,
    pub shows_vertical_indicator: bool,
    pub shows_horizontal_indicator: bool,
    pub indicator_insets: IndicatorInsets,
    pub indicator_scheme: IndicatorScheme,
    pub deceleration_rate: DecelerationRate,

    /// Explicit vertical bounce. `None` derives bounce from the axes.
    pub always_bounce_vertical: Option<bool>,
    /// Explicit horizontal bounce. `None` derives bounce from the axes.
    pub always_bounce_horizontal: Option<bool>,

    pub is_directional_lock_enabled: bool,
    pub is_paging_enabled: bool,
    pub is_scroll_enabled: bool,
    pub scrolls_to_top: bool,

    pub content_inset: EdgeInsets,
    /// `None` is applied as [`ContentInsetAdjustment::Automatic`].
    pub content_inset_adjustment: Option<ContentInsetAdjustment>,

    pub zoom_scale: ZoomScale,
    pub bounces_zoom: bool,
    pub initial_zoom_scale: f64,

    pub pan_touches: TouchCountBounds,
    pub keyboard_dismiss_mode: KeyboardDismissMode,

    pub content_offset: Option<OffsetBinding>,
    pub initial_content_alignment: Option<Alignment>,
    pub offset_behavior: OffsetBehavior,

    pub refresh: Option<RefreshConfig>,

    pub on_offset_change: Option<OnOffsetChangeCallback>,
    pub on_drag_end: Option<ActionCallback>,
    pub on_zoom: Option<OnZoomCallback>,
    pub on_zoom_end: Option<OnZoomCallback>,
}

impl Default for ViewportConfiguration {
    fn default() -> Self {
        Self {
            axes: Axes::VERTICAL,
            shows_vertical_indicator: true,
            shows_horizontal_indicator: true,
            indicator_insets: IndicatorInsets::default(),
            indicator_scheme: IndicatorScheme::Default,
            deceleration_rate: DecelerationRate::Normal,
            always_bounce_vertical: None,
            always_bounce_horizontal: None,
            is_directional_lock_enabled: false,
            is_paging_enabled: false,
            is_scroll_enabled: true,
            scrolls_to_top: true,
            content_inset: EdgeInsets::ZERO,
            content_inset_adjustment: None,
            zoom_scale: ZoomScale::default(),
            bounces_zoom: false,
            initial_zoom_scale: 1.0,
            pan_touches: TouchCountBounds::default(),
            keyboard_dismiss_mode: KeyboardDismissMode::None,
            content_offset: None,
            initial_content_alignment: None,
            offset_behavior: OffsetBehavior::empty(),
            refresh: None,
            on_offset_change: None,
            on_drag_end: None,
            on_zoom: None,
            on_zoom_end: None,
        }
    }
}

impl Clone for ViewportConfiguration {
    fn clone(&self) -> Self {
        Self {
            axes: self.axes,
            shows_vertical_indicator: self.shows_vertical_indicator,
            shows_horizontal_indicator: self.shows_horizontal_indicator,
            indicator_insets: self.indicator_insets,
            indicator_scheme: self.indicator_scheme,
            deceleration_rate: self.deceleration_rate,
            always_bounce_vertical: self.always_bounce_vertical,
            always_bounce_horizontal: self.always_bounce_horizontal,
            is_directional_lock_enabled: self.is_directional_lock_enabled,
            is_paging_enabled: self.is_paging_enabled,
            is_scroll_enabled: self.is_scroll_enabled,
            scrolls_to_top: self.scrolls_to_top,
            content_inset: self.content_inset,
            content_inset_adjustment: self.content_inset_adjustment,
            zoom_scale: self.zoom_scale,
            bounces_zoom: self.bounces_zoom,
            initial_zoom_scale: self.initial_zoom_scale,
            pan_touches: self.pan_touches,
            keyboard_dismiss_mode: self.keyboard_dismiss_mode,
            content_offset: self.content_offset.clone(),
            initial_content_alignment: self.initial_content_alignment,
            offset_behavior: self.offset_behavior,
            refresh: self.refresh.clone(),
            on_offset_change: self.on_offset_change.clone(),
            on_drag_end: self.on_drag_end.clone(),
            on_zoom: self.on_zoom.clone(),
            on_zoom_end: self.on_zoom_end.clone(),
        }
    }
}

impl ViewportConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_indicators(mut self, horizontal: bool, vertical: bool) -> Self {
        self.shows_horizontal_indicator = horizontal;
        self.shows_vertical_indicator = vertical;
        self
    }

    pub fn with_indicator_insets(mut self, insets: IndicatorInsets) -> Self {
        self.indicator_insets = insets;
        self
    }

    pub fn with_indicator_scheme(mut self, scheme: IndicatorScheme) -> Self {
        self.indicator_scheme = scheme;
        self
    }

    pub fn with_deceleration_rate(mut self, rate: DecelerationRate) -> Self {
        self.deceleration_rate = rate;
        self
    }

    pub fn with_always_bounce(mut self, horizontal: Option<bool>, vertical: Option<bool>) -> Self {
        self.always_bounce_horizontal = horizontal;
        self.always_bounce_vertical = vertical;
        self
    }

    pub fn with_directional_lock(mut self, enabled: bool) -> Self {
        self.is_directional_lock_enabled = enabled;
        self
    }

    pub fn with_paging(mut self, enabled: bool) -> Self {
        self.is_paging_enabled = enabled;
        self
    }

    pub fn with_scroll_enabled(mut self, enabled: bool) -> Self {
        self.is_scroll_enabled = enabled;
        self
    }

    pub fn with_scrolls_to_top(mut self, enabled: bool) -> Self {
        self.scrolls_to_top = enabled;
        self
    }

    pub fn with_content_inset(mut self, inset: EdgeInsets) -> Self {
        self.content_inset = inset;
        self
    }

    pub fn with_content_inset_adjustment(
        mut self,
        adjustment: Option<ContentInsetAdjustment>,
    ) -> Self {
        self.content_inset_adjustment = adjustment;
        self
    }

    pub fn with_zoom_scale(mut self, minimum: f64, maximum: f64) -> Self {
        self.zoom_scale = ZoomScale::new(minimum, maximum);
        self
    }

    pub fn with_bounces_zoom(mut self, bounces: bool) -> Self {
        self.bounces_zoom = bounces;
        self
    }

    pub fn with_initial_zoom_scale(mut self, scale: f64) -> Self {
        self.initial_zoom_scale = scale;
        self
    }

    pub fn with_pan_touches(mut self, min: usize, max: usize) -> Self {
        self.pan_touches = TouchCountBounds::new(min, max);
        self
    }

    pub fn with_keyboard_dismiss_mode(mut self, mode: KeyboardDismissMode) -> Self {
        self.keyboard_dismiss_mode = mode;
        self
    }

    pub fn with_content_offset(mut self, binding: Option<OffsetBinding>) -> Self {
        self.content_offset = binding;
        self
    }

    pub fn with_initial_content_alignment(mut self, alignment: Option<Alignment>) -> Self {
        self.initial_content_alignment = alignment;
        self
    }

    pub fn with_offset_behavior(mut self, behavior: OffsetBehavior) -> Self {
        self.offset_behavior = behavior;
        self
    }

    pub fn with_refresh(mut self, refresh: Option<RefreshConfig>) -> Self {
        self.refresh = refresh;
        self
    }

    /// Shorthand for a refresh capability driven by a refresh action only.
    pub fn with_on_refresh(self, on_refresh: impl Fn() + Send + Sync + 'static) -> Self {
        let refresh = self.refresh.clone().unwrap_or_default();
        self.with_refresh(Some(refresh.with_on_refresh(on_refresh)))
    }

    /// Shorthand for a refresh capability driven by an external refreshing flag.
    pub fn with_is_refreshing(self, is_refreshing: bool) -> Self {
        let refresh = self.refresh.clone().unwrap_or_default();
        self.with_refresh(Some(refresh.with_is_refreshing(is_refreshing)))
    }

    pub fn with_on_offset_change(
        mut self,
        f: Option<impl Fn(ContentOffset) + Send + Sync + 'static>,
    ) -> Self {
        self.on_offset_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_drag_end(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_drag_end = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_zoom(mut self, f: Option<impl Fn(f64) + Send + Sync + 'static>) -> Self {
        self.on_zoom = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_zoom_end(mut self, f: Option<impl Fn(f64) + Send + Sync + 'static>) -> Self {
        self.on_zoom_end = f.map(|f| Arc::new(f) as _);
        self
    }

    /// Whether the snapshot asks for the content to start out anchored to the bottom edge.
    pub fn is_bottom_aligned(&self) -> bool {
        self.initial_content_alignment
            .is_some_and(|a| a.vertical == VerticalAlignment::Bottom)
    }
}

impl PartialEq for ViewportConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.axes == other.axes
            && self.shows_vertical_indicator == other.shows_vertical_indicator
            && self.shows_horizontal_indicator == other.shows_horizontal_indicator
            && self.indicator_insets == other.indicator_insets
            && self.indicator_scheme == other.indicator_scheme
            && self.deceleration_rate == other.deceleration_rate
            && self.always_bounce_vertical == other.always_bounce_vertical
            && self.always_bounce_horizontal == other.always_bounce_horizontal
            && self.is_directional_lock_enabled == other.is_directional_lock_enabled
            && self.is_paging_enabled == other.is_paging_enabled
            && self.is_scroll_enabled == other.is_scroll_enabled
            && self.scrolls_to_top == other.scrolls_to_top
            && self.content_inset == other.content_inset
            && self.content_inset_adjustment == other.content_inset_adjustment
            && self.zoom_scale == other.zoom_scale
            && self.bounces_zoom == other.bounces_zoom
            && self.initial_zoom_scale == other.initial_zoom_scale
            && self.pan_touches == other.pan_touches
            && self.keyboard_dismiss_mode == other.keyboard_dismiss_mode
            && match (&self.content_offset, &other.content_offset) {
                (Some(a), Some(b)) => a.ptr_eq(b),
                (None, None) => true,
                _ => false,
            }
            && self.initial_content_alignment == other.initial_content_alignment
            && self.offset_behavior == other.offset_behavior
            && self.refresh == other.refresh
            && opt_arc_eq(&self.on_offset_change, &other.on_offset_change)
            && opt_arc_eq(&self.on_drag_end, &other.on_drag_end)
            && opt_arc_eq(&self.on_zoom, &other.on_zoom)
            && opt_arc_eq(&self.on_zoom_end, &other.on_zoom_end)
    }
}

impl core::fmt::Debug for ViewportConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportConfiguration")
            .field("axes", &self.axes)
            .field("shows_vertical_indicator", &self.shows_vertical_indicator)
            .field(
                "shows_horizontal_indicator",
                &self.shows_horizontal_indicator,
            )
            .field("indicator_insets", &self.indicator_insets)
            .field("indicator_scheme", &self.indicator_scheme)
            .field("always_bounce_vertical", &self.always_bounce_vertical)
            .field("always_bounce_horizontal", &self.always_bounce_horizontal)
            .field(
                "is_directional_lock_enabled",
                &self.is_directional_lock_enabled,
            )
            .field("is_paging_enabled", &self.is_paging_enabled)
            .field("is_scroll_enabled", &self.is_scroll_enabled)
            .field("content_inset", &self.content_inset)
            .field("content_inset_adjustment", &self.content_inset_adjustment)
            .field("zoom_scale", &self.zoom_scale)
            .field("pan_touches", &self.pan_touches)
            .field("keyboard_dismiss_mode", &self.keyboard_dismiss_mode)
            .field("content_offset", &self.content_offset)
            .field("initial_content_alignment", &self.initial_content_alignment)
            .field("offset_behavior", &self.offset_behavior)
            .field("refresh", &self.refresh)
            .finish_non_exhaustive()
    }
}

fn opt_arc_eq<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
