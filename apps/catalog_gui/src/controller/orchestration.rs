//! Queueing helpers from widget interactions to the UI event queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut Option<UiError>) {
    let event_name = event.name();

    match ui_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *status = Some(UiError::from_message(
                UiErrorContext::EventQueue,
                "UI event queue is full; please retry",
            ));
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = Some(UiError::from_message(
                UiErrorContext::EventQueue,
                "UI event queue disconnected; restart the editor",
            ));
        }
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
