//! Domain Layer - Pure Bloom filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Seeded hash functions
//! - Parameter calculations
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use parameters::{
    calculate_fpr, optimal_parameters, BloomFilterParams, HASH_COUNT_WARN_THRESHOLD,
};
