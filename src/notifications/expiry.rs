// SPDX-License-Identifier: MPL-2.0
//! Opt-in auto-dismiss for shown toasts.
//!
//! Showing a toast never removes anything. Callers that want toasts to go
//! away register them here and call [`Expiry::sweep`] periodically.

use super::category::Category;
use crate::document::{DocumentTree, NodeId};
use crate::error::Result;
use std::time::{Duration, Instant};

/// How long each category stays on screen. `None` means manual dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    pub success: Option<Duration>,
    pub info: Option<Duration>,
    pub warning: Option<Duration>,
    pub error: Option<Duration>,
    pub other: Option<Duration>,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            success: Some(Duration::from_secs(3)),
            info: Some(Duration::from_secs(3)),
            warning: Some(Duration::from_secs(5)),
            error: None, // Manual dismiss required
            other: Some(Duration::from_secs(3)),
        }
    }
}

impl DismissPolicy {
    #[must_use]
    pub fn duration_for(&self, category: &Category) -> Option<Duration> {
        match category {
            Category::Success => self.success,
            Category::Info => self.info,
            Category::Warning => self.warning,
            Category::Error => self.error,
            Category::Other(_) => self.other,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tracked {
    node: NodeId,
    deadline: Instant,
}

/// Tracks toast deadlines and removes expired toasts from the document.
#[derive(Debug, Clone, Default)]
pub struct Expiry {
    policy: DismissPolicy,
    tracked: Vec<Tracked>,
}

impl Expiry {
    #[must_use]
    pub fn new(policy: DismissPolicy) -> Self {
        Self {
            policy,
            tracked: Vec::new(),
        }
    }

    /// Registers a shown toast. Categories without a duration are ignored.
    ///
    /// Returns whether the toast is now tracked.
    pub fn track(&mut self, node: NodeId, category: &Category, now: Instant) -> bool {
        let Some(duration) = self.policy.duration_for(category) else {
            return false;
        };
        self.tracked.retain(|t| t.node != node);
        self.tracked.push(Tracked {
            node,
            deadline: now + duration,
        });
        true
    }

    /// Number of toasts still waiting for their deadline.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tracked.len()
    }

    /// Removes every tracked toast whose deadline has passed.
    ///
    /// Returns the removed nodes in tracking order. Toasts already detached
    /// by someone else are forgotten without error. If the document refuses
    /// a removal, the remaining expired toasts are still removed, the refused
    /// ones stay tracked for the next sweep, and the first error is returned.
    pub fn sweep<D>(&mut self, doc: &mut D, now: Instant) -> Result<Vec<NodeId>>
    where
        D: DocumentTree + ?Sized,
    {
        let (expired, mut alive): (Vec<Tracked>, Vec<Tracked>) =
            self.tracked.iter().partition(|t| t.deadline <= now);

        let mut removed = Vec::with_capacity(expired.len());
        let mut first_error = None;
        for entry in expired {
            let Some(parent) = doc.parent(entry.node) else {
                continue;
            };
            match doc.remove_child(parent, entry.node) {
                Ok(()) => removed.push(entry.node),
                Err(err) => {
                    log::warn!("failed to dismiss toast {}: {err}", entry.node);
                    alive.push(entry);
                    first_error.get_or_insert(err);
                }
            }
        }
        self.tracked = alive;

        if !removed.is_empty() {
            log::debug!("auto-dismissed {} toast(s)", removed.len());
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(removed),
        }
    }

    /// Removes one toast immediately, tracked or not.
    ///
    /// Returns `true` if the toast was attached and has been removed.
    pub fn dismiss<D>(&mut self, doc: &mut D, node: NodeId) -> Result<bool>
    where
        D: DocumentTree + ?Sized,
    {
        self.tracked.retain(|t| t.node != node);
        match doc.parent(node) {
            Some(parent) => {
                doc.remove_child(parent, node)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
