use crate::{
    Color, ContentInsetAdjustment, DecelerationRate, EdgeInsets, IndicatorScheme,
    KeyboardDismissMode, Point, Size, TouchCountBounds, VerticalAlignment,
};

/// Offsets within this distance of an edge count as resting on it.
const EDGE_TOLERANCE: f64 = 0.5;

/// A live scrollable surface owned by the host UI framework.
///
/// Implementations wrap a platform scroll view (or a simulation of one). Setters are expected to
/// take effect immediately; `set_content_offset(_, true)` may start an animation that the host
/// finishes on its own schedule.
pub trait Viewport {
    fn content_offset(&self) -> Point;
    fn set_content_offset(&mut self, offset: Point, animated: bool);

    fn content_size(&self) -> Size;
    /// The visible size of the container.
    fn bounds_size(&self) -> Size;

    fn content_inset(&self) -> EdgeInsets;
    fn set_content_inset(&mut self, inset: EdgeInsets);

    /// Whether an offset animation or user drag is in flight.
    fn is_scrolling(&self) -> bool;

    fn zoom_scale(&self) -> f64;
    fn set_zoom_scale(&mut self, scale: f64);
    fn minimum_zoom_scale(&self) -> f64;
    fn set_minimum_zoom_scale(&mut self, scale: f64);
    fn maximum_zoom_scale(&self) -> f64;
    fn set_maximum_zoom_scale(&mut self, scale: f64);
    fn bounces_zoom(&self) -> bool;
    fn set_bounces_zoom(&mut self, bounces: bool);

    fn bounces(&self) -> bool;
    fn set_bounces(&mut self, bounces: bool);
    fn always_bounce_vertical(&self) -> bool;
    fn set_always_bounce_vertical(&mut self, bounce: bool);
    fn always_bounce_horizontal(&self) -> bool;
    fn set_always_bounce_horizontal(&mut self, bounce: bool);

    fn is_directional_lock_enabled(&self) -> bool;
    fn set_directional_lock_enabled(&mut self, enabled: bool);
    fn is_paging_enabled(&self) -> bool;
    fn set_paging_enabled(&mut self, enabled: bool);
    fn is_scroll_enabled(&self) -> bool;
    fn set_scroll_enabled(&mut self, enabled: bool);
    fn scrolls_to_top(&self) -> bool;
    fn set_scrolls_to_top(&mut self, enabled: bool);

    fn shows_vertical_indicator(&self) -> bool;
    fn set_shows_vertical_indicator(&mut self, shows: bool);
    fn shows_horizontal_indicator(&self) -> bool;
    fn set_shows_horizontal_indicator(&mut self, shows: bool);
    fn vertical_indicator_insets(&self) -> EdgeInsets;
    fn set_vertical_indicator_insets(&mut self, insets: EdgeInsets);
    fn horizontal_indicator_insets(&self) -> EdgeInsets;
    fn set_horizontal_indicator_insets(&mut self, insets: EdgeInsets);
    fn indicator_scheme(&self) -> IndicatorScheme;
    fn set_indicator_scheme(&mut self, scheme: IndicatorScheme);

    fn deceleration_rate(&self) -> DecelerationRate;
    fn set_deceleration_rate(&mut self, rate: DecelerationRate);
    fn pan_touches(&self) -> TouchCountBounds;
    fn set_pan_touches(&mut self, touches: TouchCountBounds);

    fn content_inset_adjustment(&self) -> ContentInsetAdjustment;
    fn set_content_inset_adjustment(&mut self, adjustment: ContentInsetAdjustment);
    fn keyboard_dismiss_mode(&self) -> KeyboardDismissMode;
    fn set_keyboard_dismiss_mode(&mut self, mode: KeyboardDismissMode);

    /// Installs the pull-to-refresh affordance at the top edge.
    fn attach_refresh_control(&mut self);
    fn detach_refresh_control(&mut self);
    fn refresh_control_tint(&self) -> Option<Color>;
    fn set_refresh_control_tint(&mut self, tint: Option<Color>);
    /// Height of the refresh affordance when revealed.
    fn refresh_control_height(&self) -> f64;
    /// Starts or stops the affordance's activity animation.
    fn set_refresh_control_animating(&mut self, animating: bool);

    /// The smallest offset reachable without rubber-banding.
    fn min_content_offset(&self) -> Point {
        let inset = self.content_inset();
        Point::new(-inset.leading, -inset.top)
    }

    /// The largest offset reachable without rubber-banding.
    ///
    /// Never smaller than [`Viewport::min_content_offset`].
    fn max_content_offset(&self) -> Point {
        let min = self.min_content_offset();
        let inset = self.content_inset();
        let content = self.content_size();
        let bounds = self.bounds_size();
        Point::new(
            (content.width - bounds.width + inset.trailing).max(min.x),
            (content.height - bounds.height + inset.bottom).max(min.y),
        )
    }

    /// Where the vertical offset currently rests within the scrollable range.
    ///
    /// Content that fits inside the bounds reports [`VerticalAlignment::Top`].
    fn current_vertical_alignment(&self) -> VerticalAlignment {
        let min = self.min_content_offset().y;
        let max = self.max_content_offset().y;
        let y = self.content_offset().y;
        if max - min <= EDGE_TOLERANCE || y <= min + EDGE_TOLERANCE {
            VerticalAlignment::Top
        } else if y >= max - EDGE_TOLERANCE {
            VerticalAlignment::Bottom
        } else {
            VerticalAlignment::Center
        }
    }

    /// Moves the vertical offset to rest on the given edge (or the middle of the range).
    fn set_content_alignment(&mut self, alignment: VerticalAlignment, animated: bool) {
        let min = self.min_content_offset().y;
        let max = self.max_content_offset().y;
        let y = match alignment {
            VerticalAlignment::Top => min,
            VerticalAlignment::Center => min + (max - min) / 2.0,
            VerticalAlignment::Bottom => max,
        };
        let current = self.content_offset();
        if current.y != y {
            self.set_content_offset(Point::new(current.x, y), animated);
        }
    }
}
