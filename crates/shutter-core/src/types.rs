//! # Domain Types
//!
//! Core domain types used throughout Shutter Pricing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ServiceType    │   │  ServiceYear    │   │  PriceSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Photography    │   │  Y2020          │   │  base_price     │       │
//! │  │  VideoRecording │   │  Y2021          │   │  final_price    │       │
//! │  │  BlurayPackage  │   │  Y2022          │   └─────────────────┘       │
//! │  │  TwoDayEvent    │   │  DefaultTier    │                             │
//! │  │  WeddingSession │   └─────────────────┘   ┌─────────────────┐       │
//! │  └─────────────────┘                         │ SelectionAction │       │
//! │                                              │  ─────────────  │       │
//! │  Both enums are CLOSED sets: values outside  │  Select(s)      │       │
//! │  them are rejected at the boundary and are   │  Deselect(s)    │       │
//! │  unrepresentable inside the core.            └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Vocabulary
//! Serde names match what the frontend already speaks: services serialize as
//! `"Photography"`, `"VideoRecording"`, ...; years serialize as `"2020"`,
//! `"2021"`, `"2022"` and the year-independent tier as `"0"`. All of these
//! are valid JSON object keys, so injected price lists read naturally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Service Type
// =============================================================================

/// A service the studio offers.
///
/// Fixed, closed set. Adding a service means adding a variant here plus its
/// price list and prerequisite entries, all of which the compiler will walk
/// you through via exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServiceType {
    /// Wedding-day photography.
    Photography,
    /// Wedding-day video recording.
    VideoRecording,
    /// Blu-ray copy of the recording. Requires a recording to exist.
    BlurayPackage,
    /// Coverage extended to a second day. Requires a crew already booked.
    TwoDayEvent,
    /// Separate engagement/wedding photo session.
    WeddingSession,
}

impl ServiceType {
    /// Every service, in display order.
    ///
    /// Useful for UIs that render the full offer and for exhaustive tests.
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Photography,
        ServiceType::VideoRecording,
        ServiceType::BlurayPackage,
        ServiceType::TwoDayEvent,
        ServiceType::WeddingSession,
    ];

    /// Returns the wire name of the service (same string serde uses).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Photography => "Photography",
            ServiceType::VideoRecording => "VideoRecording",
            ServiceType::BlurayPackage => "BlurayPackage",
            ServiceType::TwoDayEvent => "TwoDayEvent",
            ServiceType::WeddingSession => "WeddingSession",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boundary parsing for service names arriving as strings.
///
/// ## Example
/// ```rust
/// use shutter_core::types::ServiceType;
///
/// let service: ServiceType = "Photography".parse().unwrap();
/// assert_eq!(service, ServiceType::Photography);
/// assert!("Drone".parse::<ServiceType>().is_err());
/// ```
impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Photography" => Ok(ServiceType::Photography),
            "VideoRecording" => Ok(ServiceType::VideoRecording),
            "BlurayPackage" => Ok(ServiceType::BlurayPackage),
            "TwoDayEvent" => Ok(ServiceType::TwoDayEvent),
            "WeddingSession" => Ok(ServiceType::WeddingSession),
            other => Err(ValidationError::UnknownService {
                name: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Service Year
// =============================================================================

/// A price list tier.
///
/// ## The Default Tier
/// Not every service is re-priced every season. Services with a stable price
/// carry a single year-independent entry, the `DefaultTier`, which lookup
/// falls back to when no year-specific entry exists. It is a real variant of
/// the closed set (not a magic number), so fallback handling is exhaustive
/// and compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServiceYear {
    /// 2020 price list.
    #[serde(rename = "2020")]
    Y2020,
    /// 2021 price list.
    #[serde(rename = "2021")]
    Y2021,
    /// 2022 price list.
    #[serde(rename = "2022")]
    Y2022,
    /// Year-independent fallback tier (serialized as `"0"`).
    #[serde(rename = "0")]
    DefaultTier,
}

impl ServiceYear {
    /// Every tier, concrete years first, fallback last.
    pub const ALL: [ServiceYear; 4] = [
        ServiceYear::Y2020,
        ServiceYear::Y2021,
        ServiceYear::Y2022,
        ServiceYear::DefaultTier,
    ];

    /// Returns the numeric form (`0` for the default tier).
    pub const fn as_u16(&self) -> u16 {
        match self {
            ServiceYear::Y2020 => 2020,
            ServiceYear::Y2021 => 2021,
            ServiceYear::Y2022 => 2022,
            ServiceYear::DefaultTier => 0,
        }
    }
}

impl fmt::Display for ServiceYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceYear::DefaultTier => f.write_str("default"),
            year => write!(f, "{}", year.as_u16()),
        }
    }
}

/// Boundary parsing for years arriving as numbers.
///
/// ## Example
/// ```rust
/// use shutter_core::types::ServiceYear;
///
/// assert_eq!(ServiceYear::try_from(2022).unwrap(), ServiceYear::Y2022);
/// assert_eq!(ServiceYear::try_from(0).unwrap(), ServiceYear::DefaultTier);
/// assert!(ServiceYear::try_from(2019).is_err());
/// ```
impl TryFrom<u16> for ServiceYear {
    type Error = ValidationError;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        match year {
            2020 => Ok(ServiceYear::Y2020),
            2021 => Ok(ServiceYear::Y2021),
            2022 => Ok(ServiceYear::Y2022),
            0 => Ok(ServiceYear::DefaultTier),
            other => Err(ValidationError::UnknownYear { year: other }),
        }
    }
}

// =============================================================================
// Price Summary
// =============================================================================

/// The priced result for one service or a whole selection.
///
/// ## Invariant
/// `final_price <= base_price`: discounts only ever lower a price. The
/// pricing engine maintains this per service, and sums preserve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceSummary {
    /// Price before any discounts.
    pub base_price: Money,
    /// Price after the best applicable discount.
    pub final_price: Money,
}

impl PriceSummary {
    /// A zero summary.
    ///
    /// Returned for services whose prerequisites are not satisfied: they
    /// contribute nothing to a quote.
    #[inline]
    pub const fn zero() -> Self {
        PriceSummary {
            base_price: Money::zero(),
            final_price: Money::zero(),
        }
    }

    /// Checks whether both prices are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.base_price.is_zero() && self.final_price.is_zero()
    }
}

// =============================================================================
// Selection Action
// =============================================================================

/// A customer action against the current selection.
///
/// Serialized in the shape the frontend sends:
/// `{"type": "Select", "service": "Photography"}`.
///
/// The set of actions is closed; there is no catch-all branch to keep in
/// sync because an unknown action kind cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "service")]
#[ts(export)]
pub enum SelectionAction {
    /// Add a service to the selection (validated against prerequisites).
    Select(ServiceType),
    /// Remove a service and cascade-remove dependents.
    Deselect(ServiceType),
}

impl SelectionAction {
    /// The service the action targets.
    #[inline]
    pub const fn service(&self) -> ServiceType {
        match self {
            SelectionAction::Select(service) | SelectionAction::Deselect(service) => *service,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
