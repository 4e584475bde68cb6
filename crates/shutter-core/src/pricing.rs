//! # Pricing Engine
//!
//! Resolves what a selection costs: base price per service from the price
//! catalog (with default-tier fallback), best applicable discount from the
//! co-selected services, and aggregated totals.
//!
//! ## Pricing One Service
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │            price_for_service(service, selection, year)                  │
//! │                                                                         │
//! │  prerequisites unmet? ──► { base: 0, final: 0 }  (contributes nothing) │
//! │       │ ok                                                              │
//! │       ▼                                                                 │
//! │  entry = catalog lookup (year tier, else default tier, else error)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  base  = entry.price                                                    │
//! │  final = min(base, entry.discounts[s] for every OTHER s in selection)  │
//! │                                                                         │
//! │  Discounts never raise a price; a service never discounts itself.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::PriceCatalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::rules::PrerequisiteRules;
use crate::selection::Selection;
use crate::types::{PriceSummary, SelectionAction, ServiceType, ServiceYear};

// =============================================================================
// Quote Line
// =============================================================================

/// One service's row in an itemized quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteLine {
    /// The service being priced.
    pub service: ServiceType,
    /// Price before discounts.
    pub base_price: Money,
    /// Price after the best applicable discount.
    pub final_price: Money,
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// The pricing facade: a price catalog and a prerequisite rule table bound
/// together behind the full operation surface.
///
/// Both tables are read-only for the engine's lifetime, so a shared engine
/// is safe to use from any number of threads; all per-customer state lives
/// in the `Selection` values the caller threads through.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: PriceCatalog,
    rules: PrerequisiteRules,
}

impl PricingEngine {
    /// Creates an engine over injected tables (tests substitute alternate
    /// catalogs this way).
    pub fn new(catalog: PriceCatalog, rules: PrerequisiteRules) -> Self {
        PricingEngine { catalog, rules }
    }

    /// The engine over the shipped price list and rule table.
    pub fn standard() -> Self {
        PricingEngine::new(PriceCatalog::standard(), PrerequisiteRules::standard())
    }

    /// The bound price catalog.
    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// The bound prerequisite rules.
    pub fn rules(&self) -> &PrerequisiteRules {
        &self.rules
    }

    /// Checks whether a service may be added to the selection.
    ///
    /// UIs call this to decide which services to offer; `update` re-checks
    /// it anyway, so a stale answer can never corrupt the selection.
    pub fn is_selectable(&self, service: ServiceType, selection: &Selection) -> bool {
        self.rules.is_satisfied(service, selection.services())
    }

    /// Applies a Select/Deselect action and returns the new selection.
    ///
    /// See [`Selection::apply`] for the transition semantics.
    pub fn update(&self, selection: &Selection, action: SelectionAction) -> Selection {
        selection.apply(action, &self.rules)
    }

    /// Prices a single service within a selection for a year.
    ///
    /// ## Behavior
    /// - Prerequisites unmet → `Ok(PriceSummary::zero())`: the service
    ///   contributes nothing to the quote.
    /// - Otherwise the base price comes from the catalog (with default-tier
    ///   fallback) and the final price is the minimum of the base price and
    ///   every discount override triggered by an *other* selected service.
    ///
    /// ## Errors
    /// Propagates [`crate::error::CoreError::PriceEntryMissing`] from the
    /// catalog lookup.
    pub fn price_for_service(
        &self,
        service: ServiceType,
        selection: &Selection,
        year: ServiceYear,
    ) -> CoreResult<PriceSummary> {
        if !self.is_selectable(service, selection) {
            return Ok(PriceSummary::zero());
        }

        let entry = self.catalog.entry(service, year)?;
        let base_price = entry.price;

        let mut final_price = base_price;
        for other in selection.iter() {
            if other == service {
                continue;
            }
            if let Some(discounted) = entry.discount_for(other) {
                if discounted < final_price {
                    final_price = discounted;
                }
            }
        }

        Ok(PriceSummary {
            base_price,
            final_price,
        })
    }

    /// Prices the whole selection for a year: independent sums of base and
    /// final prices over every member.
    ///
    /// ## Zero Totals
    /// A summed final price of zero is reported as-is, even when the summed
    /// base price is nonzero. That combination only arises when every line
    /// was individually discounted to zero by co-selected services, which
    /// is a legitimately free quote; re-inflating it to the base total
    /// would overcharge.
    pub fn price_for_selection(
        &self,
        selection: &Selection,
        year: ServiceYear,
    ) -> CoreResult<PriceSummary> {
        let mut total = PriceSummary::zero();
        for service in selection.iter() {
            let line = self.price_for_service(service, selection, year)?;
            total.base_price += line.base_price;
            total.final_price += line.final_price;
        }
        Ok(total)
    }

    /// Itemizes the selection: one [`QuoteLine`] per service, in selection
    /// order. Services whose prerequisites are unmet appear as zero lines,
    /// matching [`PricingEngine::price_for_service`].
    pub fn itemize(&self, selection: &Selection, year: ServiceYear) -> CoreResult<Vec<QuoteLine>> {
        let mut lines = Vec::with_capacity(selection.len());
        for service in selection.iter() {
            let summary = self.price_for_service(service, selection, year)?;
            lines.push(QuoteLine {
                service,
                base_price: summary.base_price,
                final_price: summary.final_price,
            });
        }
        Ok(lines)
    }

    /// Convenience entry point for callers that only want totals.
    pub fn quote(&self, selection: &Selection, year: ServiceYear) -> CoreResult<PriceSummary> {
        self.price_for_selection(selection, year)
    }
}

impl Default for PricingEngine {
    /// The standard engine.
    fn default() -> Self {
        PricingEngine::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceEntry;
    use ServiceType::*;
    use ServiceYear::*;

    fn engine() -> PricingEngine {
        PricingEngine::standard()
    }

    #[test]
    fn test_photography_with_video_in_2022() {
        // Photography 1900; VideoRecording 1900 discounted to 600 by the
        // co-selected Photography; totals 3800 base / 2500 final
        let selection = Selection::from(vec![Photography, VideoRecording]);

        let photography = engine()
            .price_for_service(Photography, &selection, Y2022)
            .unwrap();
        assert_eq!(photography.base_price, Money::from_major(1900));
        assert_eq!(photography.final_price, Money::from_major(1900));

        let video = engine()
            .price_for_service(VideoRecording, &selection, Y2022)
            .unwrap();
        assert_eq!(video.base_price, Money::from_major(1900));
        assert_eq!(video.final_price, Money::from_major(600));

        let total = engine().price_for_selection(&selection, Y2022).unwrap();
        assert_eq!(total.base_price, Money::from_major(3800));
        assert_eq!(total.final_price, Money::from_major(2500));
    }

    #[test]
    fn test_discounts_track_the_year() {
        let selection = Selection::from(vec![Photography, VideoRecording]);

        let total = engine().price_for_selection(&selection, Y2020).unwrap();
        assert_eq!(total.base_price, Money::from_major(3400));
        assert_eq!(total.final_price, Money::from_major(2200)); // 1700 + 500

        let total = engine().price_for_selection(&selection, Y2021).unwrap();
        assert_eq!(total.base_price, Money::from_major(3600));
        assert_eq!(total.final_price, Money::from_major(2300)); // 1800 + 500
    }

    #[test]
    fn test_wedding_session_alone_gets_no_discount() {
        let selection = Selection::from(vec![WeddingSession]);
        let summary = engine()
            .price_for_service(WeddingSession, &selection, Y2022)
            .unwrap();
        assert_eq!(summary.base_price, Money::from_major(600));
        assert_eq!(summary.final_price, Money::from_major(600));
    }

    #[test]
    fn test_wedding_session_is_free_with_photography_in_2022() {
        let selection = Selection::from(vec![Photography, WeddingSession]);
        let session = engine()
            .price_for_service(WeddingSession, &selection, Y2022)
            .unwrap();
        assert_eq!(session.final_price, Money::zero());

        // The 2022 tier is special; the default tier discounts to 300
        let session = engine()
            .price_for_service(WeddingSession, &selection, Y2020)
            .unwrap();
        assert_eq!(session.final_price, Money::from_major(300));
    }

    #[test]
    fn test_best_discount_wins() {
        // WeddingSession 2022 has Photography→0 and VideoRecording→300;
        // with both selected the minimum applies
        let selection = Selection::from(vec![Photography, VideoRecording, WeddingSession]);
        let session = engine()
            .price_for_service(WeddingSession, &selection, Y2022)
            .unwrap();
        assert_eq!(session.base_price, Money::from_major(600));
        assert_eq!(session.final_price, Money::zero());
    }

    #[test]
    fn test_unsatisfied_service_prices_at_zero() {
        // BlurayPackage without VideoRecording contributes nothing
        let selection = Selection::from(vec![Photography, BlurayPackage]);
        let bluray = engine()
            .price_for_service(BlurayPackage, &selection, Y2022)
            .unwrap();
        assert!(bluray.is_zero());

        let total = engine().price_for_selection(&selection, Y2022).unwrap();
        assert_eq!(total.base_price, Money::from_major(1900));
        assert_eq!(total.final_price, Money::from_major(1900));
    }

    #[test]
    fn test_final_price_never_exceeds_base_price() {
        let engine = engine();
        let selection = Selection::from(vec![
            Photography,
            VideoRecording,
            BlurayPackage,
            TwoDayEvent,
            WeddingSession,
        ]);

        // Photography and VideoRecording carry no default tier, so only the
        // concrete years price every service
        for year in [Y2020, Y2021, Y2022] {
            for service in ServiceType::ALL {
                let summary = engine
                    .price_for_service(service, &selection, year)
                    .unwrap();
                assert!(
                    summary.final_price <= summary.base_price,
                    "{service} in {year}: final {} > base {}",
                    summary.final_price,
                    summary.base_price
                );
            }
        }
    }

    #[test]
    fn test_zero_summary_exactly_when_not_selectable() {
        let engine = engine();
        let selection = Selection::from(vec![Photography]);

        for service in ServiceType::ALL {
            let summary = engine
                .price_for_service(service, &selection, Y2022)
                .unwrap();
            if engine.is_selectable(service, &selection) {
                assert!(!summary.is_zero(), "{service} should carry a price");
            } else {
                assert!(summary.is_zero(), "{service} should price at zero");
            }
        }
    }

    #[test]
    fn test_fully_discounted_selection_is_free() {
        // A catalog where two services zero each other out: the total final
        // price is legitimately 0 and is NOT re-inflated to base
        let mut catalog = PriceCatalog::new();
        catalog.insert(
            Photography,
            DefaultTier,
            PriceEntry::new(Money::from_major(100)).with_discount(VideoRecording, Money::zero()),
        );
        catalog.insert(
            VideoRecording,
            DefaultTier,
            PriceEntry::new(Money::from_major(100)).with_discount(Photography, Money::zero()),
        );
        let engine = PricingEngine::new(catalog, PrerequisiteRules::new());

        let selection = Selection::from(vec![Photography, VideoRecording]);
        let total = engine.price_for_selection(&selection, Y2022).unwrap();
        assert_eq!(total.base_price, Money::from_major(200));
        assert_eq!(total.final_price, Money::zero());
    }

    #[test]
    fn test_empty_selection_totals_zero() {
        let total = engine()
            .price_for_selection(&Selection::new(), Y2022)
            .unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_missing_catalog_entry_surfaces_as_error() {
        // An injected catalog with a hole: TwoDayEvent has no tier at all
        let mut catalog = PriceCatalog::new();
        catalog.insert(
            Photography,
            Y2022,
            PriceEntry::new(Money::from_major(1900)),
        );
        let engine = PricingEngine::new(catalog, PrerequisiteRules::standard());

        let selection = Selection::from(vec![Photography, TwoDayEvent]);
        assert!(engine.price_for_selection(&selection, Y2022).is_err());
    }

    #[test]
    fn test_itemize_reports_lines_in_selection_order() {
        let selection = Selection::from(vec![VideoRecording, Photography, WeddingSession]);
        let lines = engine().itemize(&selection, Y2022).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].service, VideoRecording);
        assert_eq!(lines[0].final_price, Money::from_major(600));
        assert_eq!(lines[1].service, Photography);
        assert_eq!(lines[1].final_price, Money::from_major(1900));
        assert_eq!(lines[2].service, WeddingSession);
        assert_eq!(lines[2].final_price, Money::zero());

        // Lines sum to the selection totals
        let total = engine().price_for_selection(&selection, Y2022).unwrap();
        let base: Money = lines.iter().fold(Money::zero(), |acc, l| acc + l.base_price);
        let fin: Money = lines.iter().fold(Money::zero(), |acc, l| acc + l.final_price);
        assert_eq!(base, total.base_price);
        assert_eq!(fin, total.final_price);
    }

    #[test]
    fn test_quote_matches_price_for_selection() {
        let selection = Selection::from(vec![Photography, VideoRecording]);
        let quoted = engine().quote(&selection, Y2022).unwrap();
        let priced = engine().price_for_selection(&selection, Y2022).unwrap();
        assert_eq!(quoted, priced);
    }

    #[test]
    fn test_update_then_price_round_trip() {
        // The caller loop: thread the selection through update, then price it
        let engine = engine();
        let mut selection = Selection::new();
        for action in [
            SelectionAction::Select(Photography),
            SelectionAction::Select(VideoRecording),
            SelectionAction::Select(BlurayPackage),
        ] {
            selection = engine.update(&selection, action);
        }
        assert_eq!(
            selection.services(),
            &[Photography, VideoRecording, BlurayPackage]
        );

        let total = engine.price_for_selection(&selection, Y2022).unwrap();
        assert_eq!(total.base_price, Money::from_major(4100)); // 1900+1900+300
        assert_eq!(total.final_price, Money::from_major(2800)); // 1900+600+300

        selection = engine.update(&selection, SelectionAction::Deselect(VideoRecording));
        assert_eq!(selection.services(), &[Photography]);
    }
}
