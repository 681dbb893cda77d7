use crate::{
    Alignment, ContentInsetAdjustment, IndicatorInsets, IndicatorScheme, KeyboardDismissMode,
    ViewportConfiguration,
};

/// The platform a scroll container runs on. Some viewport properties only exist on some
/// platforms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    #[default]
    Ios,
    MacCatalyst,
    TvOs,
}

impl Platform {
    /// Content-inset adjustment and keyboard dismissal are configurable.
    pub fn supports_inset_adjustment(self) -> bool {
        matches!(self, Self::Ios | Self::MacCatalyst)
    }

    pub fn supports_paging(self) -> bool {
        matches!(self, Self::Ios | Self::MacCatalyst)
    }

    pub fn supports_refresh_control(self) -> bool {
        !matches!(self, Self::TvOs)
    }
}

/// An ambient scroll indicator style.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorStyle {
    /// Hides the indicator on each axis flagged `true`.
    Hidden { horizontal: bool, vertical: bool },
    Inset(IndicatorInsets),
    Scheme(IndicatorScheme),
}

/// Ambient settings that reach a scroll container from its surroundings.
///
/// Built once per update by the caller and passed explicitly to
/// [`ViewportConfiguration::update_from`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    pub platform: Platform,
    pub initial_content_alignment: Option<Alignment>,
    /// `false` disables scrolling for every container below this environment.
    pub is_scroll_enabled: bool,
    pub content_inset_adjustment: Option<ContentInsetAdjustment>,
    pub keyboard_dismiss_mode: KeyboardDismissMode,
    pub indicator_style: Option<IndicatorStyle>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            initial_content_alignment: None,
            is_scroll_enabled: true,
            content_inset_adjustment: None,
            keyboard_dismiss_mode: KeyboardDismissMode::None,
            indicator_style: None,
        }
    }
}

impl Environment {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    pub fn with_initial_content_alignment(mut self, alignment: Option<Alignment>) -> Self {
        self.initial_content_alignment = alignment;
        self
    }

    pub fn with_scroll_enabled(mut self, enabled: bool) -> Self {
        self.is_scroll_enabled = enabled;
        self
    }

    pub fn with_content_inset_adjustment(
        mut self,
        adjustment: Option<ContentInsetAdjustment>,
    ) -> Self {
        self.content_inset_adjustment = adjustment;
        self
    }

    pub fn with_keyboard_dismiss_mode(mut self, mode: KeyboardDismissMode) -> Self {
        self.keyboard_dismiss_mode = mode;
        self
    }

    pub fn with_indicator_style(mut self, style: Option<IndicatorStyle>) -> Self {
        self.indicator_style = style;
        self
    }
}

impl ViewportConfiguration {
    /// Merges ambient settings into this snapshot.
    ///
    /// Absent environment values leave fields untouched. A disabled environment turns scrolling
    /// off but never turns it back on.
    pub fn update_from(&mut self, env: &Environment) {
        if let Some(alignment) = env.initial_content_alignment {
            self.initial_content_alignment = Some(alignment);
        }

        if !env.is_scroll_enabled {
            self.is_scroll_enabled = false;
        }

        if env.platform.supports_inset_adjustment() {
            self.content_inset_adjustment = env.content_inset_adjustment;
            self.keyboard_dismiss_mode = env.keyboard_dismiss_mode;
        }

        match env.indicator_style {
            Some(IndicatorStyle::Hidden {
                horizontal,
                vertical,
            }) => {
                self.shows_horizontal_indicator = !horizontal;
                self.shows_vertical_indicator = !vertical;
            }
            Some(IndicatorStyle::Inset(insets)) => {
                self.indicator_insets = insets;
            }
            Some(IndicatorStyle::Scheme(scheme)) => {
                self.indicator_scheme = scheme;
            }
            None => {}
        }
    }

    /// Clones this snapshot and applies [`Self::update_from`].
    pub fn resolved(&self, env: &Environment) -> Self {
        let mut next = self.clone();
        next.update_from(env);
        next
    }
}
