//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - Size (m) and hash count (k) are fixed at construction, both >= 1
//! - No false negatives: once added, `check()` MUST return true
//! - Bits are only ever set, never cleared

use bitvec::prelude::*;
use tracing::{debug, warn};

use super::config::BloomConfig;
use super::hash_functions::hash_positions;
use super::parameters::{calculate_fpr, optimal_parameters, HASH_COUNT_WARN_THRESHOLD};
use crate::error::Result;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an item is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// `add` needs `&mut self`; share a filter across threads for concurrent
/// writes only behind an external lock. Concurrent `check` calls are fine.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Packed bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of `add` calls, repeats included
    items_added: usize,
}

impl BloomFilter {
    /// Create a Bloom filter sized for `expected_items` at `false_positive_rate`
    ///
    /// # Errors
    /// `FilterError::InvalidParameter` if `expected_items == 0` or the rate
    /// is not strictly between 0 and 1.
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self> {
        let params = optimal_parameters(expected_items, false_positive_rate)?;

        if params.hash_count > HASH_COUNT_WARN_THRESHOLD {
            warn!(
                hash_count = params.hash_count,
                expected_items,
                false_positive_rate,
                "Bloom filter needs an unusually high number of hash functions"
            );
        }
        debug!(
            expected_items,
            false_positive_rate,
            bit_count = params.bit_count,
            hash_count = params.hash_count,
            "Bloom filter created"
        );

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; params.bit_count],
            k: params.hash_count,
            m: params.bit_count,
            items_added: 0,
        })
    }

    /// Create a Bloom filter from a validated configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.expected_items, config.false_positive_rate)
    }

    /// Add an item to the filter
    ///
    /// After this call, `check(item)` is guaranteed to return true.
    pub fn add(&mut self, item: &[u8]) {
        for pos in hash_positions(item, self.k, self.m) {
            self.bits.set(pos, true);
        }
        self.items_added += 1;
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be in the set (could be false positive)
    /// - `false` if the item is definitely NOT in the set (never false negative)
    pub fn check(&self, item: &[u8]) -> bool {
        hash_positions(item, self.k, self.m).all(|pos| self.bits[pos])
    }

    /// Get the filter size in bits (m)
    pub fn bit_count(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions (k)
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the number of `add` calls made so far
    pub fn items_added(&self) -> usize {
        self.items_added
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits currently set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.m as f64
    }

    /// Predicted false positive rate at the current load
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k with n = `items_added()`. Repeated
    /// adds of the same item are counted, so this is an upper estimate.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        calculate_fpr(self.m, self.items_added, self.k)
    }

    /// Bytes of backing storage for the bit vector
    pub fn size_bytes(&self) -> usize {
        self.bits.as_raw_slice().len()
    }
}
