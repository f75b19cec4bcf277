use crate::error::{MobitorError, Result};
use crate::notify::{Message, Notifier, Transport};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Transport that records every message it is given.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    sent: Arc<Mutex<Vec<Message>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn notifier(&self) -> Notifier {
        Notifier::new(Box::new(self.clone()), "alerts", "mobitor bot")
    }

    pub(crate) fn messages(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn texts(&self) -> Vec<String> {
        self.messages().into_iter().map(|m| m.text).collect()
    }
}

impl Transport for RecordingTransport {
    fn post(&self, message: &Message) -> Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Transport that rejects every message, counting attempts.
#[derive(Clone)]
pub(crate) struct FailingTransport {
    reason: String,
    attempts: Arc<AtomicUsize>,
}

impl FailingTransport {
    pub(crate) fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Transport for FailingTransport {
    fn post(&self, _message: &Message) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(MobitorError::Delivery(self.reason.clone()))
    }
}
