//! # Prerequisite Rules
//!
//! Which services must already be in the selection before another may be
//! added. The relation is **any-of**: a service with several listed
//! prerequisites needs only one of them present.
//!
//! ```text
//! BlurayPackage  requires  VideoRecording
//! TwoDayEvent    requires  Photography OR VideoRecording
//! everything else          no prerequisites
//! ```
//!
//! Rules are consulted twice: by the selection updater (reject invalid
//! Selects, cascade after Deselects) and by the price calculator (an
//! unsatisfied service prices at zero).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ServiceType;

// =============================================================================
// Prerequisite Rules
// =============================================================================

/// Mapping from a service to the services that can satisfy its prerequisite.
///
/// Absence of a key means "no prerequisites" (always selectable). Read-only
/// after construction; injectable the same way the price catalog is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct PrerequisiteRules(BTreeMap<ServiceType, Vec<ServiceType>>);

impl PrerequisiteRules {
    /// Creates an empty rule table (every service selectable).
    pub fn new() -> Self {
        PrerequisiteRules(BTreeMap::new())
    }

    /// Adds a rule, replacing any previous one for the service.
    pub fn insert(&mut self, service: ServiceType, prerequisites: Vec<ServiceType>) {
        self.0.insert(service, prerequisites);
    }

    /// The shipped rule table.
    pub fn standard() -> Self {
        use ServiceType::*;

        let mut rules = PrerequisiteRules::new();
        rules.insert(BlurayPackage, vec![VideoRecording]);
        rules.insert(TwoDayEvent, vec![Photography, VideoRecording]);
        rules
    }

    /// The prerequisite list for a service (empty when unconstrained).
    pub fn prerequisites(&self, service: ServiceType) -> &[ServiceType] {
        self.0.get(&service).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checks whether `candidate` may be part of `selected`.
    ///
    /// ## Rules
    /// - No rule, or an empty prerequisite list → `true`
    /// - Otherwise `true` iff at least one listed prerequisite is present
    ///   (any-of, not all-of)
    ///
    /// Pure and total: an unknown candidate simply has no rule.
    ///
    /// ## Example
    /// ```rust
    /// use shutter_core::rules::PrerequisiteRules;
    /// use shutter_core::types::ServiceType;
    ///
    /// let rules = PrerequisiteRules::standard();
    /// assert!(rules.is_satisfied(ServiceType::TwoDayEvent, &[ServiceType::Photography]));
    /// assert!(!rules.is_satisfied(ServiceType::BlurayPackage, &[ServiceType::Photography]));
    /// ```
    pub fn is_satisfied(&self, candidate: ServiceType, selected: &[ServiceType]) -> bool {
        let prerequisites = self.prerequisites(candidate);
        if prerequisites.is_empty() {
            return true;
        }

        prerequisites
            .iter()
            .any(|prerequisite| selected.contains(prerequisite))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ServiceType::*;

    #[test]
    fn test_no_rule_means_always_selectable() {
        let rules = PrerequisiteRules::standard();
        for selection in [&[][..], &[Photography][..], &[BlurayPackage][..]] {
            assert!(rules.is_satisfied(Photography, selection));
            assert!(rules.is_satisfied(VideoRecording, selection));
            assert!(rules.is_satisfied(WeddingSession, selection));
        }
    }

    #[test]
    fn test_single_prerequisite() {
        let rules = PrerequisiteRules::standard();
        assert!(rules.is_satisfied(BlurayPackage, &[VideoRecording]));
        assert!(rules.is_satisfied(BlurayPackage, &[Photography, VideoRecording]));
        assert!(!rules.is_satisfied(BlurayPackage, &[]));
        assert!(!rules.is_satisfied(BlurayPackage, &[Photography, WeddingSession]));
    }

    #[test]
    fn test_any_of_needs_only_one() {
        let rules = PrerequisiteRules::standard();
        assert!(rules.is_satisfied(TwoDayEvent, &[Photography]));
        assert!(rules.is_satisfied(TwoDayEvent, &[VideoRecording]));
        assert!(rules.is_satisfied(TwoDayEvent, &[Photography, VideoRecording]));
        assert!(!rules.is_satisfied(TwoDayEvent, &[WeddingSession]));
        assert!(!rules.is_satisfied(TwoDayEvent, &[]));
    }

    #[test]
    fn test_empty_prerequisite_list_is_unconstrained() {
        let mut rules = PrerequisiteRules::new();
        rules.insert(BlurayPackage, vec![]);
        assert!(rules.is_satisfied(BlurayPackage, &[]));
    }

    #[test]
    fn test_rules_are_injectable_from_json() {
        let json = r#"{ "BlurayPackage": ["VideoRecording"], "TwoDayEvent": ["Photography"] }"#;
        let rules: PrerequisiteRules = serde_json::from_str(json).unwrap();

        assert_eq!(rules.prerequisites(BlurayPackage), &[VideoRecording]);
        assert!(!rules.is_satisfied(TwoDayEvent, &[VideoRecording]));
        assert!(rules.is_satisfied(TwoDayEvent, &[Photography]));
    }
}
