//! Inline label editing.
//!
//! A label is either shown as text or edited through a text input. The state
//! is explicit so any UI layer can render it with [`EditableLabel::view`]
//! instead of keeping the truth in widgets.
//!
//! ```text
//!   Display --Activate--> Editing
//!   Editing --Input(s)--> Editing          (draft = s, rejection cleared)
//!   Editing --Blur|Enter--> Display        (trimmed draft non-empty, label pinned)
//!   Editing --Blur|Enter--> Editing        (trimmed draft empty, rejected)
//! ```
//!
//! Everything else is ignored. There is no cancel path: once editing starts
//! the only way out is a non-empty commit.
use serde::Serialize;
use tracing::debug;

/// Message attached to the input when an empty label is committed.
pub const EMPTY_LABEL_MESSAGE: &str = "This field cannot be empty";

/// Default text for an unpinned label at `position`.
pub fn default_label(position: usize) -> String {
    format!("Header {position}")
}

/// UI events a label reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEvent {
    /// Click or keyboard activation on the displayed label.
    Activate,
    /// The input's content changed.
    Input(String),
    /// The input lost focus.
    Blur,
    /// Enter was pressed inside the input.
    Enter,
}

/// What the UI layer has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEffect {
    /// Nothing changed.
    Ignored,
    /// Show the input, focus it and select its whole content.
    FocusAndSelectAll,
    /// The draft was updated.
    DraftChanged,
    /// Commit refused; keep the input, show the message and refocus it.
    Rejected,
    /// Label stored and pinned; show it as text again.
    Committed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelState {
    Display,
    Editing {
        draft: String,
        error: Option<&'static str>,
    },
}

/// Render projection of a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LabelView<'a> {
    Text { text: &'a str },
    Input {
        value: &'a str,
        error: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableLabel {
    text: String,
    pinned: bool,
    state: LabelState,
}

impl EditableLabel {
    pub fn new(position: usize) -> Self {
        Self {
            text: default_label(position),
            pinned: false,
            state: LabelState::Display,
        }
    }

    /// Committed label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True once the user has committed a label.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn state(&self) -> &LabelState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, LabelState::Editing { .. })
    }

    /// Header used for validation and submission: the live draft while
    /// editing, the committed text otherwise.
    pub fn effective_text(&self) -> &str {
        match &self.state {
            LabelState::Editing { draft, .. } => draft,
            LabelState::Display => &self.text,
        }
    }

    pub fn view(&self) -> LabelView<'_> {
        match &self.state {
            LabelState::Display => LabelView::Text { text: &self.text },
            LabelState::Editing { draft, error } => LabelView::Input {
                value: draft,
                error: *error,
            },
        }
    }

    pub fn handle(&mut self, event: LabelEvent) -> LabelEffect {
        let LabelState::Editing { draft, error } = &mut self.state else {
            if event != LabelEvent::Activate {
                return LabelEffect::Ignored;
            }
            self.state = LabelState::Editing {
                draft: self.text.clone(),
                error: None,
            };
            return LabelEffect::FocusAndSelectAll;
        };

        match event {
            LabelEvent::Input(text) => {
                *draft = text;
                *error = None;
                LabelEffect::DraftChanged
            }
            LabelEvent::Blur | LabelEvent::Enter => {
                let committed = draft.trim().to_string();
                if committed.is_empty() {
                    *error = Some(EMPTY_LABEL_MESSAGE);
                    return LabelEffect::Rejected;
                }
                debug!(label = %committed, "label committed");
                self.text = committed;
                self.pinned = true;
                self.state = LabelState::Display;
                LabelEffect::Committed
            }
            LabelEvent::Activate => LabelEffect::Ignored,
        }
    }

    /// Follow a position change. Only an unpinned label still showing the
    /// default text of `previous` is rewritten. An open draft the user has
    /// not touched moves along with it.
    pub(crate) fn reposition(&mut self, previous: usize, position: usize) {
        if self.pinned || self.text != default_label(previous) {
            return;
        }
        self.text = default_label(position);
        if let LabelState::Editing { draft, .. } = &mut self.state {
            if *draft == default_label(previous) {
                *draft = self.text.clone();
            }
        }
    }
}
