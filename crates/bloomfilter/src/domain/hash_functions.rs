//! Hash functions for the Bloom filter
//!
//! A single MurmurHash3 (x64, 128-bit, low 64 bits kept) is reseeded once per
//! virtual hash function: function `i` is MurmurHash3 with seed `i`.

use std::io::Cursor;

/// Hash an item with MurmurHash3 under the given seed
pub fn murmur_hash(item: &[u8], seed: u32) -> u64 {
    let mut cursor = Cursor::new(item);

    // Reading from an in-memory cursor cannot fail.
    let hash = murmur3::murmur3_x64_128(&mut cursor, seed).unwrap_or(0);
    hash as u64
}

/// Bit positions probed for `item` in a filter of `m` bits with `k` hash functions
///
/// Position `i` is `murmur_hash(item, i) % m` for `i` in `0..k`. Lazy, so a
/// query can stop at the first unset bit.
///
/// `m` must be non-zero.
pub fn hash_positions(item: &[u8], k: usize, m: usize) -> impl Iterator<Item = usize> + '_ {
    let m = m as u64;
    (0..k).map(move |i| (murmur_hash(item, i as u32) % m) as usize)
}
