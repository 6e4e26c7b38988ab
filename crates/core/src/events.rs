//! Event System
//!
//! Provides a pub/sub event bus the session uses to report what happened
//! to whichever host surface is listening.

use parking_lot::RwLock;
use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::debug;

/// Events emitted by the editor session
#[derive(Debug, Clone)]
pub enum Event {
    /// Configuration changed
    ConfigChanged,
    /// Document opened
    DocumentOpened(std::path::PathBuf),
    /// Document saved
    DocumentSaved(std::path::PathBuf),
    /// Buffer text replaced wholesale
    DocumentReplaced { chars: usize, lines: usize },
    /// Highlight spans recomputed from the current buffer
    HighlightsRecomputed { spans: usize },
    /// A find request completed
    SearchFinished { found: bool },
    /// Log message
    Log { level: LogLevel, message: String },
    /// Application shutdown
    Shutdown,
}

/// Log levels for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Subscriber handle for receiving events
#[derive(Clone)]
pub struct EventSubscription {
    receiver: Receiver<Event>,
}

impl EventSubscription {
    /// Receive the next event (blocking)
    pub fn recv(&self) -> Result<Event, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking)
    pub fn try_recv(&self) -> Result<Event, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain all currently queued events without blocking
    pub fn try_iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.receiver.try_iter()
    }
}

/// Event bus for publish/subscribe pattern
pub struct EventBus {
    subscribers: RwLock<Vec<Sender<Event>>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> EventSubscription {
        let (sender, receiver) = unbounded();
        self.subscribers.write().push(sender);
        EventSubscription { receiver }
    }

    /// Emit an event to all subscribers
    pub fn emit(&self, event: Event) -> usize {
        let subscribers = self.subscribers.read();
        let mut delivered = 0;

        for sender in subscribers.iter() {
            if sender.send(event.clone()).is_ok() {
                delivered += 1;
            }
        }

        debug!("Event {:?} delivered to {} subscribers", event, delivered);
        delivered
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
