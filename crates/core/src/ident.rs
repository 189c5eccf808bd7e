//! Pseudo-unique identifier derivation.
//!
//! Identifiers are `prefix + 6-digit zero-padded number`, where the number
//! comes from an FNV-1a hash of the concatenated inputs reduced modulo
//! 1_000_000. The hash is fixed rather than the language's generic hasher so
//! identical inputs produce identical identifiers across processes and
//! platforms. Collisions are possible; these are not globally unique.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 64-bit over the UTF-8 bytes of `input`.
pub fn fnv1a_64(input: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

pub fn pseudo_unique_id(prefix: &str, parts: &[&str]) -> String {
    let combined = parts.concat();
    format!("{prefix}{:06}", fnv1a_64(&combined) % 1_000_000)
}
