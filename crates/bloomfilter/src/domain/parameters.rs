//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil(-n*ln(fpr) / (ln(2)^2))  -- optimal bits
//! - k = ceil((m/n) * ln(2))           -- optimal hash functions
//!
//! Both are rounded up so the filter never undershoots the requested
//! false positive rate.

use std::f64::consts::LN_2;

use bitvec::prelude::*;
use tracing::warn;

use crate::error::{FilterError, Result};

/// Above this hash count a filter is still built, but construction logs a warning.
pub const HASH_COUNT_WARN_THRESHOLD: usize = 32;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter (m)
    pub bit_count: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// False positive rate predicted for these parameters at full load
    pub expected_fpr: f64,
}

/// Check that `(n, fpr)` describes a constructible filter
pub fn validate_parameters(num_items: usize, target_fpr: f64) -> Result<()> {
    if num_items == 0 {
        return Err(FilterError::invalid_expected_items(num_items));
    }
    // Written as a negated range test so that NaN is rejected too.
    if !(target_fpr > 0.0 && target_fpr < 1.0) {
        return Err(FilterError::invalid_fpr(target_fpr));
    }
    Ok(())
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `num_items` - Expected number of items to insert (n)
/// * `target_fpr` - Target false positive rate, strictly inside (0, 1)
///
/// # Errors
/// `FilterError::InvalidParameter` when `n == 0`, when `fpr` lies outside
/// (0, 1), or when the resulting bit vector could not be addressed.
pub fn optimal_parameters(num_items: usize, target_fpr: f64) -> Result<BloomFilterParams> {
    if let Err(err) = validate_parameters(num_items, target_fpr) {
        warn!(num_items, target_fpr, %err, "rejected Bloom filter parameters");
        return Err(err);
    }

    let n = num_items as f64;
    let ln2_squared = LN_2 * LN_2;

    let m = (-n * target_fpr.ln() / ln2_squared).ceil();
    if !m.is_finite() || m > BitSlice::<u8, Lsb0>::MAX_BITS as f64 {
        return Err(FilterError::InvalidParameter(format!(
            "{num_items} items at rate {target_fpr} need {m} bits, more than a bit vector can hold"
        )));
    }
    let bit_count = m as usize;

    // ln(fpr) is bounded below by ln(f64::MIN_POSITIVE), so k stays in the low thousands.
    let hash_count = ((bit_count as f64 / n) * LN_2).ceil() as usize;

    Ok(BloomFilterParams {
        bit_count,
        hash_count,
        expected_fpr: calculate_fpr(bit_count, num_items, hash_count),
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
