//! # Bloom Filter
//!
//! Space-efficient probabilistic set membership. A filter sized for `n`
//! items at false positive rate `eps` answers "have I seen this before?"
//! with no false negatives, using far less memory than an exact set.
//! Typical use is as a pre-filter in front of an expensive exact lookup.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Core probabilistic data structure
//!   - `BloomConfig`: Configuration with validation
//!   - `BloomConfigBuilder`: Fluent builder for configuration
//!   - `parameters`: Sizing math for `m` and `k`
//!   - `hash_functions`: Seeded MurmurHash3 bit positions
//!
//! ## Invariants
//!
//! - **Sizing**: m = ceil(-n·ln(eps) / ln(2)²), k = ceil((m/n)·ln(2))
//! - **No false negatives**: once added, `check()` MUST return true
//! - **Monotonic**: bits are only ever set; there is no removal
//!
//! ## Usage Example
//!
//! ```
//! use bloomfilter::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 0.01)?;
//! filter.add(b"hello");
//!
//! assert!(filter.check(b"hello"));
//! assert!(!filter.check(b"never-added"));
//! # Ok::<(), bloomfilter::FilterError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{BloomConfig, BloomConfigBuilder, BloomFilter, BloomFilterParams};
pub use error::{FilterError, Result};
