//! UI-boundary notifications
//!
//! Repositories announce state changes through an [`EventBus`] instead of
//! talking to presentation code. Listeners are plain callbacks; the payload
//! is at most a capsule id.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Named signals crossing the repository/presentation boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The library listing is stale and should re-render
    LibraryChanged,
    /// A capsule was requested for editing
    EditCapsule(String),
    /// A capsule was requested for learning mode
    LearnCapsule(String),
    /// Startup is complete
    AppReady,
}

type Listener = Box<dyn Fn(&AppEvent) + Send + Sync>;

/// Observer-style event bus shared between repositories and listeners
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }

    pub fn emit(&self, event: AppEvent) {
        for listener in self.listeners.lock().unwrap().iter() {
            listener(&event);
        }
    }
}

/// Handle for the periodic library refresh ticker
pub struct RefreshTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTicker {
    /// Emit `LibraryChanged` on `bus` every `interval` until stopped.
    ///
    /// Fire-and-forget and idempotent: re-rendering an unchanged listing is a
    /// no-op for listeners.
    pub fn start(bus: EventBus, interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(interval);
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }
                bus.emit(AppEvent::LibraryChanged);
            }
        });
        Self { stop, handle: Some(handle) }
    }

    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
