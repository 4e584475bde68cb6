//! # Selection State
//!
//! The customer's currently chosen services and the pure transition that
//! applies a Select/Deselect action to them.
//!
//! ## Transition Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    apply(action, rules)                                 │
//! │                                                                         │
//! │  Select(s)                          Deselect(s)                         │
//! │  ─────────                          ───────────                         │
//! │  already selected? ──► unchanged    remove s                            │
//! │  prerequisites      ──► unchanged        │                              │
//! │    unmet? (no-op,                        ▼                              │
//! │    never an error)                  cascade: drop every survivor whose  │
//! │       │                             prerequisites are no longer met,    │
//! │       ▼                             pass after pass, until a full pass  │
//! │  append s at the end                removes nothing (fixed point)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller owns the state: every operation takes `&self` and returns a
//! new `Selection`. Nothing here mutates caller-supplied data in place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rules::PrerequisiteRules;
use crate::types::{SelectionAction, ServiceType};

// =============================================================================
// Selection
// =============================================================================

/// An ordered, duplicate-free set of selected services.
///
/// ## Invariants
/// - No duplicates: `apply` keeps Select idempotent, and construction from a
///   caller-supplied list drops repeated services
/// - Order is first-selection order; Deselect preserves the relative order
///   of the survivors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Selection(Vec<ServiceType>);

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Selection(Vec::new())
    }

    /// Checks whether a service is selected.
    #[inline]
    pub fn contains(&self, service: ServiceType) -> bool {
        self.0.contains(&service)
    }

    /// The selected services in selection order.
    #[inline]
    pub fn services(&self) -> &[ServiceType] {
        &self.0
    }

    /// Number of selected services.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether nothing is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the selected services in selection order.
    pub fn iter(&self) -> impl Iterator<Item = ServiceType> + '_ {
        self.0.iter().copied()
    }

    /// Applies a customer action and returns the resulting selection.
    ///
    /// ## Behavior
    /// - `Select`: idempotent; silently rejected when prerequisites are
    ///   unmet (the UI queries selectability before offering the action, so
    ///   an invalid Select is stale state, not an error); otherwise the
    ///   service is appended at the end.
    /// - `Deselect`: the service is removed, then dependents whose
    ///   prerequisites are no longer satisfied are cascade-removed until the
    ///   set is stable. Terminates because the set only shrinks.
    pub fn apply(&self, action: SelectionAction, rules: &PrerequisiteRules) -> Selection {
        match action {
            SelectionAction::Select(service) => {
                if self.contains(service) || !rules.is_satisfied(service, self.services()) {
                    return self.clone();
                }

                let mut selected = self.0.clone();
                selected.push(service);
                Selection(selected)
            }
            SelectionAction::Deselect(service) => {
                let mut remaining: Vec<ServiceType> =
                    self.iter().filter(|s| *s != service).collect();

                // Explicit fixed-point loop over an owned buffer. Survivors
                // are re-checked in sequence order; a removal takes effect
                // immediately, so later candidates in the same pass see it.
                loop {
                    let mut removed_any = false;
                    let mut index = 0;
                    while index < remaining.len() {
                        if rules.is_satisfied(remaining[index], &remaining) {
                            index += 1;
                        } else {
                            remaining.remove(index);
                            removed_any = true;
                        }
                    }
                    if !removed_any {
                        break;
                    }
                }

                Selection(remaining)
            }
        }
    }
}

/// Builds a selection from a caller-supplied list, dropping duplicates while
/// preserving first occurrence order.
impl From<Vec<ServiceType>> for Selection {
    fn from(services: Vec<ServiceType>) -> Self {
        let mut selected = Vec::with_capacity(services.len());
        for service in services {
            if !selected.contains(&service) {
                selected.push(service);
            }
        }
        Selection(selected)
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = ServiceType;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ServiceType>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
