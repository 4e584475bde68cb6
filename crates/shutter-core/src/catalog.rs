//! # Price Catalog
//!
//! The static price list: what each service costs in each year, and which
//! co-selected services unlock an override price.
//!
//! ## Lookup Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    entry(service, year)                                 │
//! │                                                                         │
//! │  catalog[service][year] exists? ──────────► return it                   │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  catalog[service][DefaultTier] exists? ───► return it                   │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  CoreError::PriceEntryMissing  (broken static table, never a silent 0) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is read-only after construction. The shipped table lives in
//! [`PriceCatalog::standard`]; tests and callers may inject an alternate
//! table, typically deserialized from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ServiceType, ServiceYear};

// =============================================================================
// Price Entry
// =============================================================================

/// The cost of one service in one price list tier.
///
/// ## Discounts
/// `discounts` maps a co-selected service to the override price that applies
/// when that service is in the selection. A `Money::zero()` override is a
/// free add-on. Overrides never raise a price: resolution takes the minimum
/// of the base price and every applicable override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceEntry {
    /// Price before any discounts.
    pub price: Money,

    /// Override prices keyed by the co-selected service that triggers them.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub discounts: BTreeMap<ServiceType, Money>,
}

impl PriceEntry {
    /// Creates an entry with no discounts.
    pub fn new(price: Money) -> Self {
        PriceEntry {
            price,
            discounts: BTreeMap::new(),
        }
    }

    /// Adds a discount override triggered by `service` (builder style).
    pub fn with_discount(mut self, service: ServiceType, price: Money) -> Self {
        self.discounts.insert(service, price);
        self
    }

    /// The override price unlocked by `service`, if any.
    #[inline]
    pub fn discount_for(&self, service: ServiceType) -> Option<Money> {
        self.discounts.get(&service).copied()
    }
}

// =============================================================================
// Price Catalog
// =============================================================================

/// Mapping from service to price list tiers.
///
/// Not every service has an entry for every year: services with a stable
/// price carry only a [`ServiceYear::DefaultTier`] entry, and lookup falls
/// back to it. A service missing both tiers is a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct PriceCatalog(BTreeMap<ServiceType, BTreeMap<ServiceYear, PriceEntry>>);

impl PriceCatalog {
    /// Creates an empty catalog. Mostly useful in tests.
    pub fn new() -> Self {
        PriceCatalog(BTreeMap::new())
    }

    /// Inserts an entry for a service/tier pair, replacing any previous one.
    pub fn insert(&mut self, service: ServiceType, year: ServiceYear, entry: PriceEntry) {
        self.0.entry(service).or_default().insert(year, entry);
    }

    /// The shipped price list.
    ///
    /// ## Table
    /// ```text
    /// Service          2020          2021          2022          default
    /// ─────────────    ──────────    ──────────    ──────────    ──────────
    /// Photography      1700          1800          1900          -
    /// VideoRecording   1700 (P:500)  1800 (P:500)  1900 (P:600)  -
    /// WeddingSession   -             -             600 (P:0,     600 (P:300,
    ///                                                  V:300)        V:300)
    /// BlurayPackage    -             -             -             300
    /// TwoDayEvent      -             -             -             400
    ///
    /// (P:n) = override price n when Photography is co-selected
    /// (V:n) = override price n when VideoRecording is co-selected
    /// ```
    pub fn standard() -> Self {
        use ServiceType::*;
        use ServiceYear::*;

        let mut catalog = PriceCatalog::new();

        catalog.insert(Photography, Y2020, PriceEntry::new(Money::from_major(1700)));
        catalog.insert(Photography, Y2021, PriceEntry::new(Money::from_major(1800)));
        catalog.insert(Photography, Y2022, PriceEntry::new(Money::from_major(1900)));

        catalog.insert(
            VideoRecording,
            Y2020,
            PriceEntry::new(Money::from_major(1700))
                .with_discount(Photography, Money::from_major(500)),
        );
        catalog.insert(
            VideoRecording,
            Y2021,
            PriceEntry::new(Money::from_major(1800))
                .with_discount(Photography, Money::from_major(500)),
        );
        catalog.insert(
            VideoRecording,
            Y2022,
            PriceEntry::new(Money::from_major(1900))
                .with_discount(Photography, Money::from_major(600)),
        );

        catalog.insert(
            WeddingSession,
            Y2022,
            PriceEntry::new(Money::from_major(600))
                .with_discount(Photography, Money::zero())
                .with_discount(VideoRecording, Money::from_major(300)),
        );
        catalog.insert(
            WeddingSession,
            DefaultTier,
            PriceEntry::new(Money::from_major(600))
                .with_discount(Photography, Money::from_major(300))
                .with_discount(VideoRecording, Money::from_major(300)),
        );

        catalog.insert(
            BlurayPackage,
            DefaultTier,
            PriceEntry::new(Money::from_major(300)),
        );
        catalog.insert(
            TwoDayEvent,
            DefaultTier,
            PriceEntry::new(Money::from_major(400)),
        );

        catalog
    }

    /// Resolves the entry for a service in a year, falling back to the
    /// default tier.
    ///
    /// ## Errors
    /// [`CoreError::PriceEntryMissing`] when neither a year-specific nor a
    /// default-tier entry exists. This never happens for the shipped
    /// catalog; for an injected one it means the table is broken, which must
    /// surface rather than price as zero.
    pub fn entry(&self, service: ServiceType, year: ServiceYear) -> CoreResult<&PriceEntry> {
        let tiers = self
            .0
            .get(&service)
            .ok_or(CoreError::PriceEntryMissing { service, year })?;

        tiers
            .get(&year)
            .or_else(|| tiers.get(&ServiceYear::DefaultTier))
            .ok_or(CoreError::PriceEntryMissing { service, year })
    }

    /// Iterates every (service, tier, entry) triple in the catalog.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceType, ServiceYear, &PriceEntry)> {
        self.0.iter().flat_map(|(service, tiers)| {
            tiers.iter().map(move |(year, entry)| (*service, *year, entry))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_specific_entry_wins() {
        let catalog = PriceCatalog::standard();
        let entry = catalog
            .entry(ServiceType::Photography, ServiceYear::Y2022)
            .unwrap();
        assert_eq!(entry.price, Money::from_major(1900));
        assert!(entry.discounts.is_empty());
    }

    #[test]
    fn test_falls_back_to_default_tier() {
        let catalog = PriceCatalog::standard();

        // BlurayPackage has no 2021 entry, only the default tier
        let entry = catalog
            .entry(ServiceType::BlurayPackage, ServiceYear::Y2021)
            .unwrap();
        assert_eq!(entry.price, Money::from_major(300));

        // WeddingSession has a 2022 entry AND a default tier; 2020 must hit
        // the default tier with its own discount table
        let entry = catalog
            .entry(ServiceType::WeddingSession, ServiceYear::Y2020)
            .unwrap();
        assert_eq!(entry.price, Money::from_major(600));
        assert_eq!(
            entry.discount_for(ServiceType::Photography),
            Some(Money::from_major(300))
        );
    }

    #[test]
    fn test_missing_both_tiers_is_an_error() {
        // Photography carries only year-specific entries, so a catalog with
        // them stripped has a hole
        let mut catalog = PriceCatalog::new();
        catalog.insert(
            ServiceType::BlurayPackage,
            ServiceYear::DefaultTier,
            PriceEntry::new(Money::from_major(300)),
        );

        let err = catalog
            .entry(ServiceType::Photography, ServiceYear::Y2022)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::PriceEntryMissing {
                service: ServiceType::Photography,
                year: ServiceYear::Y2022,
            }
        ));
    }

    #[test]
    fn test_catalog_is_injectable_from_json() {
        let json = r#"{
            "Photography": { "2022": { "price": 190000 } },
            "VideoRecording": {
                "2022": { "price": 190000, "discounts": { "Photography": 60000 } }
            },
            "BlurayPackage": { "0": { "price": 30000 } }
        }"#;

        let catalog: PriceCatalog = serde_json::from_str(json).unwrap();

        let entry = catalog
            .entry(ServiceType::VideoRecording, ServiceYear::Y2022)
            .unwrap();
        assert_eq!(entry.price, Money::from_major(1900));
        assert_eq!(
            entry.discount_for(ServiceType::Photography),
            Some(Money::from_major(600))
        );

        // Fallback works for injected tables too
        let entry = catalog
            .entry(ServiceType::BlurayPackage, ServiceYear::Y2020)
            .unwrap();
        assert_eq!(entry.price, Money::from_major(300));
    }

    #[test]
    fn test_standard_catalog_serde_round_trip() {
        let catalog = PriceCatalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: PriceCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_iter_covers_every_entry() {
        let catalog = PriceCatalog::standard();
        let count = catalog.iter().count();
        // 3 Photography + 3 VideoRecording + 2 WeddingSession + 1 + 1
        assert_eq!(count, 10);
    }
}
