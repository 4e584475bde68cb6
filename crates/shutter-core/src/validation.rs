//! # Validation Module
//!
//! Sanity checks for injected configuration.
//!
//! The shipped tables are correct by construction; these checks exist for
//! callers that deserialize alternate price lists (§ catalog injection) and
//! want a broken table rejected up front rather than discovered mid-quote.
//!
//! ## Usage
//! ```rust
//! use shutter_core::catalog::PriceCatalog;
//! use shutter_core::validation::validate_catalog;
//!
//! let catalog = PriceCatalog::standard();
//! validate_catalog(&catalog).unwrap();
//! ```

use crate::catalog::PriceCatalog;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a price catalog.
///
/// ## Rules
/// - Every base price and discount override is non-negative (zero is
///   allowed: a free add-on is a 0-price override)
/// - No entry lists its own service as a discount trigger (a service never
///   discounts against itself, so such an entry would be dead weight)
///
/// A discount override higher than the base price is NOT rejected: the
/// minimum rule makes it harmless, it is merely meaningless.
pub fn validate_catalog(catalog: &PriceCatalog) -> ValidationResult<()> {
    for (service, year, entry) in catalog.iter() {
        if entry.price.is_negative() {
            return Err(ValidationError::NegativePrice { service, year });
        }

        for (&trigger, &price) in &entry.discounts {
            if price.is_negative() {
                return Err(ValidationError::NegativePrice { service, year });
            }
            if trigger == service {
                return Err(ValidationError::SelfDiscount { service, year });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
