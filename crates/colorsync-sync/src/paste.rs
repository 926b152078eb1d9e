//! The page-wide paste handler.
//!
//! The host forwards every paste to [`PasteSlot::dispatch`]. At most one
//! subscriber exists at a time; it is registered at startup and released
//! when its [`PasteSubscription`] is dropped.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::SyncError;

type Sender = mpsc::UnboundedSender<String>;

#[derive(Clone, Default)]
pub struct PasteSlot {
    active: Arc<Mutex<Option<Sender>>>,
}

impl PasteSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the paste handler. Fails if one is already registered.
    pub fn subscribe(&self) -> Result<PasteSubscription, SyncError> {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if active.is_some() {
            return Err(SyncError::PasteHandlerActive);
        }
        let (tx, rx) = mpsc::unbounded_channel();
        *active = Some(tx);
        info!("paste handler registered");
        Ok(PasteSubscription {
            slot: self.active.clone(),
            rx,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active.lock().map(|a| a.is_some()).unwrap_or(false)
    }

    /// Hand pasted text to the subscriber.
    ///
    /// Returns `true` when a subscriber took it, meaning the host should
    /// suppress its default paste behavior.
    pub fn dispatch(&self, text: &str) -> bool {
        let Ok(active) = self.active.lock() else {
            return false;
        };
        match active.as_ref() {
            Some(tx) => tx.send(text.to_owned()).is_ok(),
            None => {
                debug!("paste with no handler registered");
                false
            }
        }
    }
}

/// The registered handler's end of the slot.
pub struct PasteSubscription {
    slot: Arc<Mutex<Option<Sender>>>,
    rx: mpsc::UnboundedReceiver<String>,
}

impl PasteSubscription {
    /// Next pasted text. Pending until a paste is dispatched.
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}

impl Drop for PasteSubscription {
    fn drop(&mut self) {
        if let Ok(mut active) = self.slot.lock() {
            *active = None;
        }
        info!("paste handler released");
    }
}
