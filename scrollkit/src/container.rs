use crate::preserve::{ResizeTrigger, with_preserved_offset, with_preserved_offset_across_resize};
use crate::{
    Axis, ContentInsetAdjustment, OffsetBehavior, Platform, RefreshConfig, RefreshControl,
    ViewportConfiguration, Viewport,
};

/// Writes `$value` through `$set` only when `$get` reports something different, and counts the
/// write.
macro_rules! assign_if_ne {
    ($writes:ident, $v:expr, $get:ident, $set:ident, $value:expr) => {{
        let value = $value;
        if $v.$get() != value {
            strace!(property = stringify!($get), "ScrollContainer::apply: write");
            $v.$set(value);
            $writes += 1;
        }
    }};
}

/// A live viewport together with the state the reconciler keeps for it.
///
/// The container owns the host's viewport exclusively between updates. Every declarative update
/// calls [`ScrollContainer::apply`]; content changes run through
/// [`ScrollContainer::with_preserved_offset`].
#[derive(Debug)]
pub struct ScrollContainer<V> {
    viewport: V,
    platform: Platform,
    refresh: Option<RefreshControl>,
    last_applied: Option<ViewportConfiguration>,
}

impl<V: Viewport> ScrollContainer<V> {
    pub fn new(viewport: V, platform: Platform) -> Self {
        Self {
            viewport,
            platform,
            refresh: None,
            last_applied: None,
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Releases the viewport, removing the refresh affordance if one was attached.
    pub fn into_viewport(mut self) -> V {
        if self.refresh.take().is_some() {
            self.viewport.detach_refresh_control();
        }
        self.viewport
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The refresh control, once a snapshot has asked for one.
    pub fn refresh_control(&self) -> Option<&RefreshControl> {
        self.refresh.as_ref()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.as_ref().is_some_and(RefreshControl::is_refreshing)
    }

    /// The snapshot passed to the most recent [`ScrollContainer::apply`].
    pub fn last_applied(&self) -> Option<&ViewportConfiguration> {
        self.last_applied.as_ref()
    }

    /// The offset behavior of the last applied snapshot (empty before the first one).
    pub fn offset_behavior(&self) -> OffsetBehavior {
        self.last_applied
            .as_ref()
            .map_or(OffsetBehavior::empty(), |c| c.offset_behavior)
    }

    /// Applies `config` to the viewport, writing only properties whose value differs.
    ///
    /// Returns the number of writes performed. Applying the same snapshot twice performs no
    /// writes the second time.
    pub fn apply(&mut self, config: &ViewportConfiguration) -> usize {
        let platform = self.platform;
        let v = &mut self.viewport;
        let mut writes = 0usize;

        let directional_lock = if config.axes.is_only(Axis::Horizontal) {
            true
        } else {
            config.is_directional_lock_enabled
        };
        assign_if_ne!(
            writes,
            v,
            is_directional_lock_enabled,
            set_directional_lock_enabled,
            directional_lock
        );

        if let Some(bounce) = config.always_bounce_vertical {
            assign_if_ne!(
                writes,
                v,
                always_bounce_vertical,
                set_always_bounce_vertical,
                bounce
            );
        }
        if let Some(bounce) = config.always_bounce_horizontal {
            assign_if_ne!(
                writes,
                v,
                always_bounce_horizontal,
                set_always_bounce_horizontal,
                bounce
            );
        }
        match (config.always_bounce_horizontal, config.always_bounce_vertical) {
            (Some(true), _) | (_, Some(true)) => {
                assign_if_ne!(writes, v, bounces, set_bounces, true)
            }
            (Some(false), Some(false)) => assign_if_ne!(writes, v, bounces, set_bounces, false),
            _ => {}
        }

        assign_if_ne!(
            writes,
            v,
            is_scroll_enabled,
            set_scroll_enabled,
            config.is_scroll_enabled
        );
        assign_if_ne!(
            writes,
            v,
            shows_vertical_indicator,
            set_shows_vertical_indicator,
            config.shows_vertical_indicator
        );
        assign_if_ne!(
            writes,
            v,
            shows_horizontal_indicator,
            set_shows_horizontal_indicator,
            config.shows_horizontal_indicator
        );
        assign_if_ne!(
            writes,
            v,
            horizontal_indicator_insets,
            set_horizontal_indicator_insets,
            config.indicator_insets.horizontal
        );
        assign_if_ne!(
            writes,
            v,
            vertical_indicator_insets,
            set_vertical_indicator_insets,
            config.indicator_insets.vertical
        );
        assign_if_ne!(
            writes,
            v,
            deceleration_rate,
            set_deceleration_rate,
            config.deceleration_rate
        );
        assign_if_ne!(
            writes,
            v,
            content_inset,
            set_content_inset,
            config.content_inset
        );
        assign_if_ne!(
            writes,
            v,
            indicator_scheme,
            set_indicator_scheme,
            config.indicator_scheme
        );
        assign_if_ne!(
            writes,
            v,
            bounces_zoom,
            set_bounces_zoom,
            config.bounces_zoom
        );
        assign_if_ne!(
            writes,
            v,
            scrolls_to_top,
            set_scrolls_to_top,
            config.scrolls_to_top
        );
        assign_if_ne!(
            writes,
            v,
            minimum_zoom_scale,
            set_minimum_zoom_scale,
            config.zoom_scale.minimum
        );
        assign_if_ne!(
            writes,
            v,
            maximum_zoom_scale,
            set_maximum_zoom_scale,
            config.zoom_scale.maximum
        );
        assign_if_ne!(writes, v, pan_touches, set_pan_touches, config.pan_touches);

        if platform.supports_inset_adjustment() {
            assign_if_ne!(
                writes,
                v,
                content_inset_adjustment,
                set_content_inset_adjustment,
                config
                    .content_inset_adjustment
                    .unwrap_or(ContentInsetAdjustment::Automatic)
            );
            assign_if_ne!(
                writes,
                v,
                keyboard_dismiss_mode,
                set_keyboard_dismiss_mode,
                config.keyboard_dismiss_mode
            );
        }

        if platform.supports_paging() {
            assign_if_ne!(
                writes,
                v,
                is_paging_enabled,
                set_paging_enabled,
                config.is_paging_enabled
            );
        }

        if let Some(binding) = &config.content_offset {
            let target = binding.get();
            if v.content_offset().ceil() != target.ceil() {
                strace!(x = target.x, y = target.y, "ScrollContainer::apply: offset binding");
                v.set_content_offset(target, true);
                writes += 1;
            }
        }

        if let Some(refresh) = &config.refresh {
            if platform.supports_refresh_control() {
                writes += self.apply_refresh(refresh, config);
            } else {
                swarn!(platform = ?platform, "refresh control is unavailable on this platform");
            }
        }

        sdebug!(writes, "ScrollContainer::apply");
        self.last_applied = Some(config.clone());
        writes
    }

    fn apply_refresh(&mut self, refresh: &RefreshConfig, config: &ViewportConfiguration) -> usize {
        let Self {
            viewport: v,
            refresh: slot,
            ..
        } = self;
        let mut writes = 0usize;

        let newly_attached = slot.is_none();
        let control = slot.get_or_insert_with(|| RefreshControl::new(refresh.on_refresh.clone()));
        if newly_attached {
            sdebug!("ScrollContainer: attaching refresh control");
            // An explicit vertical bounce was already written and wins over the pull affordance.
            if config.always_bounce_vertical.is_none() {
                assign_if_ne!(
                    writes,
                    v,
                    always_bounce_vertical,
                    set_always_bounce_vertical,
                    true
                );
            }
            v.attach_refresh_control();
            writes += 1;
        } else {
            control.set_on_refresh(refresh.on_refresh.clone());
        }

        assign_if_ne!(
            writes,
            v,
            refresh_control_tint,
            set_refresh_control_tint,
            refresh.tint
        );

        let Some(want) = refresh.is_refreshing else {
            return writes;
        };
        if control.is_refreshing() == want {
            return writes;
        }

        if want {
            // Content-size maintenance already keeps the offset continuous; nudging here too
            // would compensate twice.
            if !config
                .offset_behavior
                .contains(OffsetBehavior::MAINTAIN_ON_CONTENT_SIZE_CHANGE)
            {
                let adjust_content_offset = !config.is_bottom_aligned();
                writes += control.begin_refreshing_without_user_input(v, adjust_content_offset);
            }
        } else {
            writes += control.end_refreshing(v);
        }
        writes
    }

    /// Runs a content mutation with the given offset behavior.
    ///
    /// See [`crate::with_preserved_offset`].
    pub fn with_preserved_offset<R>(
        &mut self,
        behavior: OffsetBehavior,
        animated: bool,
        mutate: impl FnOnce(&mut V) -> R,
    ) -> R {
        with_preserved_offset(&mut self.viewport, behavior, animated, mutate)
    }

    /// Runs a bounds or keyboard-frame change with the given offset behavior.
    ///
    /// See [`crate::with_preserved_offset_across_resize`].
    pub fn with_preserved_offset_across_resize<R>(
        &mut self,
        behavior: OffsetBehavior,
        trigger: ResizeTrigger,
        animated: bool,
        mutate: impl FnOnce(&mut V) -> R,
    ) -> R {
        with_preserved_offset_across_resize(&mut self.viewport, behavior, trigger, animated, mutate)
    }

    /// Forwards the user's pull gesture to the refresh control.
    ///
    /// Returns `true` when a new refresh started.
    pub fn handle_user_pull(&mut self) -> bool {
        match &mut self.refresh {
            Some(control) => control.handle_user_pull(&mut self.viewport),
            None => false,
        }
    }

    /// Ends the current refresh, e.g. when the affordance finishes its own animation.
    pub fn end_refreshing(&mut self) -> bool {
        match &mut self.refresh {
            Some(control) => control.end_refreshing(&mut self.viewport) > 0,
            None => false,
        }
    }
}
