use crate::{ActionCallback, EdgeInsets, Point, Viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefreshPhase {
    #[default]
    Idle,
    Refreshing {
        /// `true` when the user's pull gesture started the refresh.
        user_initiated: bool,
    },
}

/// Pull-to-refresh state of one scroll container.
///
/// The control tells user-driven refreshes apart from programmatic ones: only a programmatic
/// refresh moves the offset to reveal the affordance, so only a programmatic refresh restores
/// the offset when it ends.
#[derive(Clone)]
pub struct RefreshControl {
    phase: RefreshPhase,
    on_refresh: Option<ActionCallback>,
    last_content_inset: Option<EdgeInsets>,
    last_content_offset: Option<Point>,
}

impl RefreshControl {
    pub fn new(on_refresh: Option<ActionCallback>) -> Self {
        Self {
            phase: RefreshPhase::Idle,
            on_refresh,
            last_content_inset: None,
            last_content_offset: None,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self.phase, RefreshPhase::Refreshing { .. })
    }

    pub fn is_refreshing_without_user_interaction(&self) -> bool {
        self.phase
            == RefreshPhase::Refreshing {
                user_initiated: false,
            }
    }

    pub fn last_content_inset(&self) -> Option<EdgeInsets> {
        self.last_content_inset
    }

    pub fn last_content_offset(&self) -> Option<Point> {
        self.last_content_offset
    }

    pub fn set_on_refresh(&mut self, on_refresh: Option<ActionCallback>) {
        self.on_refresh = on_refresh;
    }

    fn begin_refreshing<V: Viewport + ?Sized>(&mut self, viewport: &mut V, user_initiated: bool) {
        self.last_content_inset = Some(viewport.content_inset());
        self.last_content_offset = Some(viewport.content_offset());
        self.phase = RefreshPhase::Refreshing { user_initiated };
        viewport.set_refresh_control_animating(true);
    }

    /// Handles the user's pull gesture crossing the refresh threshold.
    ///
    /// Invokes the refresh action once per cycle. Returns `false` when a refresh is already in
    /// flight, in which case the gesture is ignored.
    pub fn handle_user_pull<V: Viewport + ?Sized>(&mut self, viewport: &mut V) -> bool {
        if self.is_refreshing() {
            strace!(phase = ?self.phase, "RefreshControl: pull ignored while refreshing");
            return false;
        }

        sdebug!("RefreshControl: user-initiated refresh");
        self.begin_refreshing(viewport, true);
        if let Some(on_refresh) = &self.on_refresh {
            on_refresh();
        }
        true
    }

    /// Starts a refresh driven by external state rather than a gesture.
    ///
    /// With `adjust_content_offset`, the offset moves up by the affordance height so the
    /// affordance becomes visible, and the prior offset is restored on
    /// [`RefreshControl::end_refreshing`]. Without it, nothing is restored.
    ///
    /// The refresh action is not invoked: the caller already knows it is refreshing.
    ///
    /// Returns the number of viewport writes; `0` when a refresh is already in flight.
    pub fn begin_refreshing_without_user_input<V: Viewport + ?Sized>(
        &mut self,
        viewport: &mut V,
        adjust_content_offset: bool,
    ) -> usize {
        if self.is_refreshing() {
            return 0;
        }

        sdebug!(adjust_content_offset, "RefreshControl: programmatic refresh");
        self.begin_refreshing(viewport, false);
        let mut writes = 1;

        if adjust_content_offset {
            let height = viewport.refresh_control_height();
            let current = viewport.content_offset();
            let target = Point::new(current.x, current.y - height);
            if target != current {
                viewport.set_content_offset(target, true);
                writes += 1;
            }
        } else {
            self.last_content_offset = None;
        }
        writes
    }

    /// Ends the current refresh, from either the caller or the affordance finishing.
    ///
    /// Returns the number of viewport writes; `0` when idle.
    pub fn end_refreshing<V: Viewport + ?Sized>(&mut self, viewport: &mut V) -> usize {
        let RefreshPhase::Refreshing { user_initiated } = self.phase else {
            return 0;
        };

        sdebug!(user_initiated, "RefreshControl: end refreshing");
        viewport.set_refresh_control_animating(false);
        let mut writes = 1;

        if let Some(inset) = self.last_content_inset.take() {
            if viewport.content_inset() != inset {
                viewport.set_content_inset(inset);
                writes += 1;
            }
        }

        let last_offset = self.last_content_offset.take();
        if !user_initiated {
            if let Some(offset) = last_offset {
                if viewport.content_offset() != offset {
                    viewport.set_content_offset(offset, true);
                    writes += 1;
                }
            }
        }

        self.phase = RefreshPhase::Idle;
        writes
    }
}

impl core::fmt::Debug for RefreshControl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefreshControl")
            .field("phase", &self.phase)
            .field("last_content_inset", &self.last_content_inset)
            .field("last_content_offset", &self.last_content_offset)
            .finish_non_exhaustive()
    }
}
