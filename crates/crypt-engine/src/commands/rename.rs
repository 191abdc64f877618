//! Rename pump.
//!
//! Drains pending file-system rename notifications and reconciles stored
//! snippets with each of them, in delivery order.

use std::collections::VecDeque;

use crypt_core::{RenameEvent, RenameEventSource, SnippetStore};

use crate::context::CryptContext;
use crate::Result;

/// Reconcile every pending rename
///
/// Returns the total number of snippets moved. A failing event does not stop
/// the pump: the remaining events are still applied and the first error is
/// returned at the end.
///
/// ## Errors
///
/// - `InvalidInput`: an event carried an empty path
/// - `Persistence`: a store write failed
pub fn pump_renames<S, R>(ctx: &mut CryptContext<S>, source: &mut R) -> Result<usize>
where
    S: SnippetStore,
    R: RenameEventSource + ?Sized,
{
    let events = source.drain();
    tracing::debug!(count = events.len(), "pumping rename events");

    let mut total = 0;
    let mut first_error = None;
    for event in events {
        match ctx.reconcile_rename(&event.old_path, &event.new_path) {
            Ok(changed) => total += changed,
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(total),
    }
}

/// In-process rename queue
///
/// Adapters push notifications as the host delivers them; the engine drains
/// them via [`pump_renames`].
#[derive(Debug, Clone, Default)]
pub struct QueuedRenameSource {
    pending: VecDeque<RenameEvent>,
}

impl QueuedRenameSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, old_path: impl Into<String>, new_path: impl Into<String>) {
        self.pending.push_back(RenameEvent::new(old_path, new_path));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl RenameEventSource for QueuedRenameSource {
    fn drain(&mut self) -> Vec<RenameEvent> {
        self.pending.drain(..).collect()
    }
}
