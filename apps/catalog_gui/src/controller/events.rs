//! UI events and error modeling for the catalog editor controller.

use catalog::{EditorEvent, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Editor(EditorEvent),
    DismissAlert,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Editor(event) => event.name(),
            UiEvent::DismissAlert => "dismiss_alert",
        }
    }
}

impl From<EditorEvent> for UiEvent {
    fn from(value: EditorEvent) -> Self {
        UiEvent::Editor(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    Submit,
    EventQueue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("required")
            || message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("must be")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for UiError {
    fn from(value: ValidationError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Submit,
            message: value.to_string(),
        }
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
