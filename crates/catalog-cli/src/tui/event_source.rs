use std::collections::VecDeque;
use std::io;

use async_trait::async_trait;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt as _;

/// Abstraction over the input event source used by the TUI.
#[async_trait]
pub trait InputEventSource: Send {
    /// Waits for the next input event. `None` means the source is exhausted.
    ///
    /// # Errors
    /// Returns an error if reading the event fails.
    async fn next_event(&mut self) -> io::Result<Option<Event>>;
}

/// Default event source backed by crossterm's async event stream.
#[derive(Default)]
pub struct CrosstermEventSource {
    stream: EventStream,
}

impl CrosstermEventSource {
    /// Creates a source reading from the terminal.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InputEventSource for CrosstermEventSource {
    async fn next_event(&mut self) -> io::Result<Option<Event>> {
        self.stream.next().await.transpose()
    }
}

/// Replays a fixed sequence of key presses, then reports exhaustion.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    /// Creates a source that yields `keys` in order.
    pub fn new(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            events: keys
                .into_iter()
                .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                .collect(),
        }
    }

    /// Yields each character of `text` as a key press.
    pub fn typed(text: &str) -> Self {
        Self::new(text.chars().map(KeyCode::Char))
    }
}

#[async_trait]
impl InputEventSource for ScriptedEvents {
    async fn next_event(&mut self) -> io::Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}
