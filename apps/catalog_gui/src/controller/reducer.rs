//! Pure view-model transitions driven by queued UI events.

use catalog::EditorState;

use crate::controller::events::{UiError, UiEvent};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub editor: EditorState,
    pub alert: Option<UiError>,
}

impl ViewModel {
    pub fn new(editor: EditorState) -> Self {
        Self {
            editor,
            alert: None,
        }
    }

    pub fn alert_open(&self) -> bool {
        self.alert.is_some()
    }
}

pub fn reduce(model: &ViewModel, event: UiEvent) -> ViewModel {
    match event {
        UiEvent::DismissAlert => ViewModel {
            editor: model.editor.clone(),
            alert: None,
        },
        UiEvent::Editor(editor_event) => {
            // An open alert blocks the form; nothing behind it may change.
            if model.alert_open() {
                tracing::debug!(
                    event = editor_event.name(),
                    "dropping editor event while alert is open"
                );
                return model.clone();
            }

            match model.editor.apply(editor_event) {
                Ok(editor) => ViewModel {
                    editor,
                    alert: None,
                },
                Err(err) => {
                    tracing::info!(error = %err, "submit rejected");
                    ViewModel {
                        editor: model.editor.clone(),
                        alert: Some(UiError::from(err)),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
