//! Event sinks: where notifications go.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use super::event::GameEvent;

/// Receives every notification the engine emits.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// A sink shared with an observer that reads it later.
impl<S: EventSink + ?Sized> EventSink for Rc<RefCell<S>> {
    fn emit(&mut self, event: GameEvent) {
        self.borrow_mut().emit(event);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Forwards events to `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: GameEvent) {
        match event.player() {
            Some(player) => tracing::info!(player = player.number(), "{event}"),
            None => tracing::info!("{event}"),
        }
    }
}

/// Records events in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of recorded events matching a predicate.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    /// Check whether any recorded event matches.
    #[must_use]
    pub fn any(&self, predicate: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }

    /// Drain the log.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Prints one line per event to a writer, e.g. a terminal.
///
/// Write failures are logged and otherwise ignored; notifications never
/// affect play.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for WriterSink<W> {
    fn emit(&mut self, event: GameEvent) {
        if let Err(err) = writeln!(self.out, "{event}") {
            tracing::warn!(%err, "failed to print notification");
        }
    }
}

/// Sends each event to two sinks.
#[derive(Debug, Default)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A: EventSink, B: EventSink> Tee<A, B> {
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: EventSink, B: EventSink> EventSink for Tee<A, B> {
    fn emit(&mut self, event: GameEvent) {
        self.first.emit(event.clone());
        self.second.emit(event);
    }
}
