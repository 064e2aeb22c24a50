//! Form binders.
//!
//! A form holds a draft record mirroring its inputs. Most edits assign
//! the field verbatim; the special-cased fields run a dependent-field
//! rule instead, updating several draft fields at once. Submitting an
//! edit updates the existing record, submitting a new draft appends one;
//! either way the form resets to its default draft afterwards.

mod lease;
mod maintenance;

pub use lease::{lease_term_end, LeaseDraft, LeaseForm};
pub use maintenance::{MaintenanceDraft, MaintenanceForm};

/// Parse a numeric form field, defaulting to 0 when the text does not
/// parse as a number.
pub fn parse_amount(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}
