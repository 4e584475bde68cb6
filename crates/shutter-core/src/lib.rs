//! # shutter-core: Pure Business Logic for Shutter Pricing
//!
//! This crate is the **heart** of Shutter Pricing. It computes what a
//! customer's selected set of photography/videography services costs, and
//! enforces which selections are valid, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shutter Pricing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (TypeScript)                        │   │
//! │  │    Offer UI ──► Selection UI ──► Quote UI                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ holds the Selection, threads it back   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shutter-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   rules   │  │ selection │  │  pricing  │  │   │
//! │  │   │ PriceList │  │ Prereqs   │  │ Select/   │  │ Discounts │  │   │
//! │  │   │ + tiers   │  │ any-of    │  │ Deselect  │  │ + totals  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ServiceType, ServiceYear, PriceSummary, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`catalog`] - The year-tiered price list with default-tier fallback
//! - [`rules`] - Prerequisite relationships between services
//! - [`selection`] - The selection set and its pure state transition
//! - [`pricing`] - Discount resolution and quote totals
//! - [`validation`] - Sanity checks for injected configuration
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input =
//!    same output. The caller owns all state and threads it through.
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here.
//! 3. **Integer Money**: All monetary values are integer cents, never floats.
//! 4. **Closed Sets**: Services and years are closed enums; unknown values
//!    are rejected at the boundary and unrepresentable inside.
//! 5. **Explicit Errors**: A broken price table surfaces as a typed error,
//!    never a silent zero. Invalid selection actions are silent no-ops by
//!    contract, not errors.
//!
//! ## Example Usage
//!
//! ```rust
//! use shutter_core::{Money, PricingEngine, Selection, SelectionAction, ServiceType, ServiceYear};
//!
//! let engine = PricingEngine::standard();
//!
//! // The caller owns the selection and threads it through every call
//! let mut selection = Selection::new();
//! selection = engine.update(&selection, SelectionAction::Select(ServiceType::Photography));
//! selection = engine.update(&selection, SelectionAction::Select(ServiceType::VideoRecording));
//!
//! // Photography 1900 + VideoRecording discounted 1900 -> 600
//! let total = engine.price_for_selection(&selection, ServiceYear::Y2022).unwrap();
//! assert_eq!(total.base_price, Money::from_major(3800));
//! assert_eq!(total.final_price, Money::from_major(2500));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod rules;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shutter_core::Money` instead of
// `use shutter_core::money::Money`

pub use catalog::{PriceCatalog, PriceEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{PricingEngine, QuoteLine};
pub use rules::PrerequisiteRules;
pub use selection::Selection;
pub use types::{PriceSummary, SelectionAction, ServiceType, ServiceYear};
