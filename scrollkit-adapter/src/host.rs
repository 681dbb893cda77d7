use scrollkit::{
    ContentOffset, Environment, OffsetBehavior, Point, ResizeTrigger, ScrollContainer, Viewport,
    ViewportConfiguration,
};

/// A framework-neutral driver for one scroll container.
///
/// This type does not hold any UI objects beyond the viewport it is given. Adapters drive it by
/// calling:
/// - `update` with each new declarative configuration, and `set_environment` when ambient
///   settings change
/// - `mutate_content` / `resize` around anything that changes content size or bounds
/// - `on_user_scroll`, `on_drag_end`, `on_zoom`, `on_zoom_end`, `on_user_pull`,
///   `on_refresh_finished` when the platform reports events
#[derive(Debug)]
pub struct ScrollHost<V> {
    container: ScrollContainer<V>,
    environment: Environment,
    declared: ViewportConfiguration,
    resolved: ViewportConfiguration,
    initialized: bool,
}

impl<V: Viewport> ScrollHost<V> {
    pub fn new(viewport: V, environment: Environment) -> Self {
        Self {
            container: ScrollContainer::new(viewport, environment.platform),
            environment,
            declared: ViewportConfiguration::default(),
            resolved: ViewportConfiguration::default(),
            initialized: false,
        }
    }

    pub fn container(&self) -> &ScrollContainer<V> {
        &self.container
    }

    pub fn viewport(&self) -> &V {
        self.container.viewport()
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        self.container.viewport_mut()
    }

    pub fn into_viewport(self) -> V {
        self.container.into_viewport()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The configuration as last applied, with the environment merged in.
    pub fn configuration(&self) -> &ViewportConfiguration {
        &self.resolved
    }

    pub fn is_refreshing(&self) -> bool {
        self.container.is_refreshing()
    }

    /// Applies a new declarative configuration. Returns the number of viewport writes.
    ///
    /// The first update also applies the initial zoom scale and the initial content alignment.
    pub fn update(&mut self, config: ViewportConfiguration) -> usize {
        self.declared = config;
        self.reconcile()
    }

    /// Replaces the ambient environment and re-applies the current configuration.
    ///
    /// The platform is fixed when the host is created; a different platform here only affects
    /// snapshot assembly.
    pub fn set_environment(&mut self, environment: Environment) -> usize {
        if environment.platform != self.container.platform() {
            awarn!(
                from = ?self.container.platform(),
                to = ?environment.platform,
                "ScrollHost: platform changed after creation"
            );
        }
        self.environment = environment;
        self.reconcile()
    }

    fn reconcile(&mut self) -> usize {
        self.resolved = self.declared.resolved(&self.environment);
        let mut writes = self.container.apply(&self.resolved);

        if !self.initialized {
            self.initialized = true;
            let v = self.container.viewport_mut();
            if v.zoom_scale() != self.resolved.initial_zoom_scale {
                v.set_zoom_scale(self.resolved.initial_zoom_scale);
                writes += 1;
            }
            if let Some(alignment) = self.resolved.initial_content_alignment {
                let before = v.content_offset();
                v.set_content_alignment(alignment.vertical, false);
                if v.content_offset() != before {
                    writes += 1;
                }
            }
        }

        adebug!(writes, "ScrollHost::reconcile");
        writes
    }

    fn behavior(&self) -> OffsetBehavior {
        self.resolved.offset_behavior
    }

    /// Runs a content change under the configured offset behavior.
    pub fn mutate_content<R>(&mut self, animated: bool, mutate: impl FnOnce(&mut V) -> R) -> R {
        let behavior = self.behavior();
        self.container.with_preserved_offset(behavior, animated, mutate)
    }

    /// Runs a bounds or keyboard-frame change under the configured offset behavior.
    pub fn resize<R>(
        &mut self,
        trigger: ResizeTrigger,
        animated: bool,
        mutate: impl FnOnce(&mut V) -> R,
    ) -> R {
        let behavior = self.behavior();
        self.container
            .with_preserved_offset_across_resize(behavior, trigger, animated, mutate)
    }

    /// The platform reports a new offset (user drag, deceleration, or an animation frame).
    ///
    /// Writes the offset back into the content-offset binding, so the next `update` sees no
    /// difference, and reports it through `on_offset_change`.
    pub fn on_user_scroll(&mut self, offset: Point) {
        if let Some(binding) = &self.resolved.content_offset {
            if binding.get().ceil() != offset.ceil() {
                binding.set(offset);
            }
        }

        if let Some(on_offset_change) = &self.resolved.on_offset_change {
            let v = self.container.viewport();
            on_offset_change(ContentOffset {
                offset,
                content_size: v.content_size(),
                container_size: v.bounds_size(),
            });
        }
    }

    pub fn on_drag_end(&mut self) {
        if let Some(on_drag_end) = &self.resolved.on_drag_end {
            on_drag_end();
        }
    }

    pub fn on_zoom(&mut self, scale: f64) {
        if let Some(on_zoom) = &self.resolved.on_zoom {
            on_zoom(scale);
        }
    }

    pub fn on_zoom_end(&mut self, scale: f64) {
        if let Some(on_zoom_end) = &self.resolved.on_zoom_end {
            on_zoom_end(scale);
        }
    }

    /// The user pulled past the refresh threshold. Returns `true` when a refresh started.
    pub fn on_user_pull(&mut self) -> bool {
        self.container.handle_user_pull()
    }

    /// The refresh affordance finished on its own.
    pub fn on_refresh_finished(&mut self) -> bool {
        self.container.end_refreshing()
    }
}
