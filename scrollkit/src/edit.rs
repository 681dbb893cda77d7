use alloc::string::String;
use alloc::sync::Arc;

/// A callback fired with the committed text when an edit ends.
pub type OnCommitCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// How a static label can be turned into an editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activation {
    pub on_double_tap: bool,
}

impl Activation {
    pub const NONE: Self = Self {
        on_double_tap: false,
    };
    pub const DOUBLE_TAP: Self = Self {
        on_double_tap: true,
    };
}

impl Default for Activation {
    fn default() -> Self {
        Self::DOUBLE_TAP
    }
}

/// A list/table edit mode that can drive editing from outside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditMode {
    #[default]
    Inactive,
    Active,
    /// Entered temporarily by the host (e.g. swipe actions). Never edits.
    Transient,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditPhase {
    #[default]
    Display,
    Editing {
        /// The text being edited; committed back when editing ends.
        scratch: String,
    },
}

/// A text label that can switch into an in-place editor.
///
/// Entering edit mode copies the committed text into a scratch buffer. Leaving it writes the
/// scratch buffer back and calls `on_commit` exactly once.
#[derive(Clone)]
pub struct EditableText {
    text: String,
    placeholder: Option<String>,
    activation: Activation,
    respect_edit_mode: bool,
    edit_mode: EditMode,
    line_limit: Option<usize>,
    phase: EditPhase,
    on_commit: Option<OnCommitCallback>,
}

impl EditableText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: None,
            activation: Activation::default(),
            respect_edit_mode: false,
            edit_mode: EditMode::Inactive,
            line_limit: Some(1),
            phase: EditPhase::Display,
            on_commit: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Lets an external [`EditMode`] drive editing.
    pub fn with_respect_edit_mode(mut self, respect: bool) -> Self {
        self.respect_edit_mode = respect;
        self
    }

    /// `Some(1)` edits in a single-line field, anything else in a multi-line view.
    pub fn with_line_limit(mut self, line_limit: Option<usize>) -> Self {
        self.line_limit = line_limit;
        self
    }

    pub fn with_on_commit(mut self, on_commit: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_commit = Some(Arc::new(on_commit));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the committed text, e.g. when the caller's binding changes.
    ///
    /// An edit in progress keeps its scratch buffer.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, EditPhase::Editing { .. })
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn uses_single_line_field(&self) -> bool {
        self.line_limit == Some(1)
    }

    /// The text to show while not editing: the placeholder for empty text, if any.
    pub fn display_text(&self) -> &str {
        match &self.placeholder {
            Some(placeholder) if self.text.is_empty() => placeholder,
            _ => &self.text,
        }
    }

    /// The scratch buffer, while editing.
    pub fn scratch(&self) -> Option<&str> {
        match &self.phase {
            EditPhase::Editing { scratch } => Some(scratch),
            EditPhase::Display => None,
        }
    }

    pub fn scratch_mut(&mut self) -> Option<&mut String> {
        match &mut self.phase {
            EditPhase::Editing { scratch } => Some(scratch),
            EditPhase::Display => None,
        }
    }

    /// Replaces the scratch buffer. Ignored while not editing.
    pub fn edit(&mut self, value: &str) {
        if let Some(scratch) = self.scratch_mut() {
            scratch.clear();
            scratch.push_str(value);
        }
    }

    /// Handles a double tap on the static label.
    pub fn double_tap(&mut self) -> bool {
        if !self.activation.on_double_tap || self.is_editing() {
            return false;
        }
        if self.respect_edit_mode && self.edit_mode != EditMode::Inactive {
            return false;
        }
        self.begin_editing()
    }

    /// Mirrors an external `is_editing` binding.
    pub fn set_editing(&mut self, editing: bool) -> bool {
        if editing {
            self.begin_editing()
        } else {
            self.end_editing()
        }
    }

    /// Mirrors an external edit mode. Ignored unless edit mode is respected.
    pub fn set_edit_mode(&mut self, mode: EditMode) -> bool {
        if !self.respect_edit_mode || self.edit_mode == mode {
            return false;
        }
        self.edit_mode = mode;
        match mode {
            EditMode::Active => self.begin_editing(),
            EditMode::Inactive => self.end_editing(),
            EditMode::Transient => false,
        }
    }

    /// Editing ends when the editor loses focus.
    pub fn focus_changed(&mut self, focused: bool) -> bool {
        if focused { false } else { self.end_editing() }
    }

    /// The window's active state changed; a focused editor commits.
    pub fn control_active_state_changed(&mut self, focused: bool) -> bool {
        if focused { self.end_editing() } else { false }
    }

    /// The platform's exit command (e.g. Escape).
    pub fn exit_command(&mut self) -> bool {
        self.end_editing()
    }

    /// The editor's return/submit action.
    pub fn submit(&mut self) -> bool {
        self.end_editing()
    }

    fn begin_editing(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        if self.respect_edit_mode {
            self.edit_mode = EditMode::Active;
        }
        sdebug!("EditableText: begin editing");
        self.phase = EditPhase::Editing {
            scratch: self.text.clone(),
        };
        true
    }

    fn end_editing(&mut self) -> bool {
        let EditPhase::Editing { scratch } = core::mem::take(&mut self.phase) else {
            return false;
        };
        if self.respect_edit_mode {
            self.edit_mode = EditMode::Inactive;
        }
        sdebug!("EditableText: commit");
        self.text = scratch;
        if let Some(on_commit) = &self.on_commit {
            on_commit(&self.text);
        }
        true
    }
}

impl core::fmt::Debug for EditableText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EditableText")
            .field("text", &self.text)
            .field("placeholder", &self.placeholder)
            .field("activation", &self.activation)
            .field("respect_edit_mode", &self.respect_edit_mode)
            .field("edit_mode", &self.edit_mode)
            .field("line_limit", &self.line_limit)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
