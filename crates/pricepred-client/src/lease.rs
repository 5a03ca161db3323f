//! Remaining-lease normalization
//!
//! The backend requires the remaining lease as a formatted
//! `"<years> years <months> months"` string and rejects semantically
//! meaningless zero-duration leases, so a form with both components missing
//! or zero is floored to [`DEFAULT_REMAINING_LEASE`].

/// Fallback when both lease components are missing or zero
///
/// The formatter never produces `"0 years 0 months"`.
pub const DEFAULT_REMAINING_LEASE: &str = "1 years 0 months";

/// Build the canonical remaining-lease string from two independently
/// optional components
///
/// Missing components count as zero. If either component is positive the
/// literal supplied values are used, zeroes included; otherwise the result is
/// [`DEFAULT_REMAINING_LEASE`].
pub fn format_remaining_lease(years: Option<u32>, months: Option<u32>) -> String {
    let years = years.unwrap_or(0);
    let months = months.unwrap_or(0);

    if years > 0 || months > 0 {
        format!("{years} years {months} months")
    } else {
        DEFAULT_REMAINING_LEASE.to_string()
    }
}
