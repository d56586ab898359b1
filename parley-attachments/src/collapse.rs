//! Observable collapse state for heavy media.
//!
//! The collapsed flag is watched, not sampled: the view keeps a subscription
//! alive for the lifetime of the mount and re-triggers thumbnail rendering
//! on collapsed-to-visible transitions.

use parley_api::{AttachmentRecord, ViewSettings};
use tokio::sync::watch;

/// Derive the default collapsed state for a record.
///
/// Precedence: explicit per-message flag, then the user's media default,
/// then visible.
pub fn default_collapsed(record: &AttachmentRecord, settings: &ViewSettings) -> bool {
    record
        .collapsed
        .or(settings.collapse_media_by_default)
        .unwrap_or(false)
}

/// Reactive boolean holding one attachment's collapse state.
#[derive(Debug)]
pub struct CollapseController {
    tx: watch::Sender<bool>,
}

impl CollapseController {
    pub fn new(record: &AttachmentRecord, settings: &ViewSettings) -> Self {
        let (tx, _rx) = watch::channel(default_collapsed(record, settings));
        Self { tx }
    }

    /// Current state.
    pub fn get(&self) -> bool {
        *self.tx.borrow()
    }

    /// Flip the state, notifying subscribers only on actual change.
    pub fn set(&self, collapsed: bool) {
        self.tx.send_if_modified(|current| {
            if *current == collapsed {
                false
            } else {
                *current = collapsed;
                true
            }
        });
    }

    pub fn toggle(&self) {
        self.set(!self.get());
    }

    /// Subscribe for transition notifications.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}
