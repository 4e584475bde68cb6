//! # Error Types
//!
//! Domain-specific error types for shutter-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError         - Broken static configuration (price list holes)    │
//! │  ValidationError   - Bad boundary input / injected-config sanity       │
//! │                                                                         │
//! │  NOT errors by contract:                                               │
//! │  ├── Selecting a service whose prerequisites are unmet → silent no-op  │
//! │  └── Selecting an already-selected service             → silent no-op  │
//! │      (the UI queries is_selectable before offering the action)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (service, year)
//! 3. Errors are enum variants, never String
//! 4. Nothing here is transient: no retries, no partial failure

use thiserror::Error;

use crate::types::{ServiceType, ServiceYear};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These indicate a broken static table rather than bad caller input, which
/// is why lookup signals them explicitly instead of defaulting to zero.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The price list has neither a year-specific nor a default-tier entry
    /// for the service.
    ///
    /// ## When This Occurs
    /// - Never for the shipped standard catalog
    /// - An injected catalog omits a service or its fallback tier
    #[error("no price entry for {service} in {year} and no default tier")]
    PriceEntryMissing {
        service: ServiceType,
        year: ServiceYear,
    },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Boundary input and configuration validation errors.
///
/// Raised before core logic runs; inside the core the closed enums make
/// out-of-set values unrepresentable.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Service name outside the closed set.
    #[error("unknown service type: {name}")]
    UnknownService { name: String },

    /// Year outside the closed set (valid: 2020-2022, 0 for default tier).
    #[error("unknown service year: {year}")]
    UnknownYear { year: u16 },

    /// An injected price list carries a negative price.
    #[error("negative price for {service} in {year}")]
    NegativePrice {
        service: ServiceType,
        year: ServiceYear,
    },

    /// An injected price list lists a service as its own discount trigger.
    #[error("{service} lists itself as a discount trigger in {year}")]
    SelfDiscount {
        service: ServiceType,
        year: ServiceYear,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
