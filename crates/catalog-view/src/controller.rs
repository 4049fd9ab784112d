//! Fetch lifecycle shared by every data screen.
//!
//! A [`Controller`] owns one [`Resource`] and resolves each trigger into exactly
//! one terminal state. Loads run as spawned tasks and report back through a
//! channel tagged with the trigger generation that started them; the owner
//! applies completions on its own task, so the state has a single writer.
//! A completion whose generation is no longer current is dropped on arrival.

use core::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use catalog_core::Result;
use tokio::spawn;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Fetches the data a screen needs for one trigger.
#[async_trait]
pub trait Loader: Send + Sync + 'static {
    /// Identity that parameterizes the fetch (a record id, or `()`).
    type Key: Clone + Debug + Send + Sync + 'static;
    /// Decoded result held in screen state.
    type Output: Send + 'static;

    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Performs every request the trigger requires.
    ///
    /// # Errors
    /// Returns an error if any required request fails.
    async fn load(&self, key: &Self::Key) -> Result<Self::Output>;
}

/// Lifecycle phase of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Never triggered
    Idle,
    /// A trigger is in flight
    Loading,
    /// The latest trigger succeeded
    Success,
    /// The latest trigger failed
    Failure,
}

/// State record a screen renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource<T> {
    data: Option<T>,
    is_loading: bool,
    error: Option<String>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

impl<T> Resource<T> {
    /// Data from the most recent successful trigger. While loading this may be
    /// the previous trigger's data, about to be replaced.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Whether a trigger is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Failure message of the latest trigger.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failure
        } else if self.data.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.is_loading = false;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.data = None;
        self.is_loading = false;
        self.error = Some(message);
    }
}

/// Result of one load, tagged with the generation that started it.
#[derive(Debug)]
pub struct Completion<T> {
    generation: u64,
    result: Result<T>,
}

impl<T> Completion<T> {
    /// Generation of the trigger that produced this completion.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Drives a [`Loader`] and keeps the screen's [`Resource`].
pub struct Controller<L: Loader> {
    loader: Arc<L>,
    key: Option<L::Key>,
    generation: u64,
    state: Resource<L::Output>,
    sender: UnboundedSender<Completion<L::Output>>,
    receiver: UnboundedReceiver<Completion<L::Output>>,
}

impl<L: Loader> Controller<L> {
    /// Creates an idle controller.
    pub fn new(loader: L) -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            loader: Arc::new(loader),
            key: None,
            generation: 0,
            state: Resource::default(),
            sender,
            receiver,
        }
    }

    /// Creates a controller and starts loading `key` immediately.
    ///
    /// Must be called within a tokio runtime.
    pub fn mount(loader: L, key: L::Key) -> Self {
        let mut controller = Self::new(loader);
        controller.trigger(key);
        controller
    }

    /// Current state.
    pub fn state(&self) -> &Resource<L::Output> {
        &self.state
    }

    /// Key of the latest trigger.
    pub fn key(&self) -> Option<&L::Key> {
        self.key.as_ref()
    }

    /// Generation of the latest trigger; 0 before the first.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a new fetch cycle for `key`, superseding any in flight.
    ///
    /// Must be called within a tokio runtime.
    pub fn trigger(&mut self, key: L::Key) {
        self.generation += 1;
        let generation = self.generation;
        tracing::debug!(
            "{name}: trigger #{generation} for {key:?}",
            name = self.loader.name()
        );

        self.key = Some(key.clone());
        self.state.begin();

        let loader = Arc::clone(&self.loader);
        let sender = self.sender.clone();
        spawn(async move {
            let result = loader.load(&key).await;
            if sender.send(Completion { generation, result }).is_err() {
                tracing::debug!(
                    "{name}: screen closed before trigger #{generation} resolved",
                    name = loader.name()
                );
            }
        });
    }

    /// Re-runs the latest trigger with the same key. Returns `false` if nothing
    /// was ever triggered.
    pub fn retry(&mut self) -> bool {
        let Some(key) = self.key.clone() else {
            return false;
        };
        tracing::debug!("{name}: retry", name = self.loader.name());
        self.trigger(key);
        true
    }

    /// Commits a completion if it belongs to the latest trigger. Returns whether
    /// the state changed.
    pub fn apply(&mut self, completion: Completion<L::Output>) -> bool {
        if completion.generation != self.generation {
            tracing::debug!(
                "{name}: discarding stale result of trigger #{stale} (current #{current})",
                name = self.loader.name(),
                stale = completion.generation,
                current = self.generation
            );
            return false;
        }

        match completion.result {
            Ok(data) => self.state.succeed(data),
            Err(error) => {
                tracing::warn!("{name}: {error}", name = self.loader.name());
                self.state.fail(error.to_string());
            }
        }
        true
    }

    /// Waits for the next completion from any trigger.
    pub async fn next_completion(&mut self) -> Option<Completion<L::Output>> {
        self.receiver.recv().await
    }

    /// Waits for the next completion and applies it. Returns whether the state
    /// changed; stale completions return `false`.
    pub async fn pump(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(completion) => self.apply(completion),
            None => false,
        }
    }

    /// Pumps until the latest trigger has resolved.
    pub async fn settle(&mut self) {
        while self.state.is_loading() {
            self.pump().await;
        }
    }
}
