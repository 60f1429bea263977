//! Consumer callbacks for decoded events.
//!
//! A stream run reports everything it produces through a [`StreamHandler`]:
//! completed events, failures, and completion itself. Callbacks run
//! synchronously on the driver's task, in arrival order.

use crate::sse::SseEvent;
use crate::stream::SseStreamError;

/// Callbacks invoked during a stream run.
///
/// `on_message` is required; the others default to no-ops. The driver calls
/// these inline between chunk pulls, so they should not block for long.
pub trait StreamHandler: Send {
    /// Called once per completed event that carries a data payload and is
    /// not the end-of-stream sentinel.
    fn on_message(&mut self, event: SseEvent);

    /// Called for per-line failures, after which the run continues, and for
    /// source or decode failures, after which the run ends.
    fn on_error(&mut self, _error: SseStreamError) {}

    /// Called exactly once when the run ends, on every exit path.
    fn on_done(&mut self) {}
}

/// Handler that accumulates everything it sees.
///
/// Useful in tests and for consumers that want the whole stream
/// materialized before acting on it.
#[derive(Debug, Default)]
pub struct CollectingHandler {
    /// Events in arrival order
    pub messages: Vec<SseEvent>,
    /// Errors in arrival order, fatal and non-fatal alike
    pub errors: Vec<SseStreamError>,
    /// Set once the run has ended
    pub done: bool,
}

impl CollectingHandler {
    /// Create an empty handler.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StreamHandler for CollectingHandler {
    fn on_message(&mut self, event: SseEvent) {
        self.messages.push(event);
    }

    fn on_error(&mut self, error: SseStreamError) {
        self.errors.push(error);
    }

    fn on_done(&mut self) {
        self.done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sse::EventData;

    fn text_event(text: &str) -> SseEvent {
        SseEvent {
            id: None,
            event: None,
            data: EventData::Text(text.to_string()),
        }
    }

    #[test]
    fn test_collecting_handler_accumulates() {
        let mut handler = CollectingHandler::new();

        handler.on_message(text_event("a"));
        handler.on_message(text_event("b"));
        handler.on_done();

        assert_eq!(handler.messages.len(), 2);
        assert_eq!(handler.messages[0].data.as_text(), Some("a"));
        assert_eq!(handler.messages[1].data.as_text(), Some("b"));
        assert!(handler.errors.is_empty());
        assert!(handler.done);
    }

    #[test]
    fn test_default_callbacks_are_no_ops() {
        struct OnlyMessages {
            count: usize,
        }

        impl StreamHandler for OnlyMessages {
            fn on_message(&mut self, _event: SseEvent) {
                self.count += 1;
            }
        }

        let mut handler = OnlyMessages { count: 0 };
        handler.on_message(text_event("x"));
        handler.on_error(SseStreamError::Source(
            crate::traits::SourceError::new("ignored"),
        ));
        handler.on_done();

        assert_eq!(handler.count, 1);
    }
}
