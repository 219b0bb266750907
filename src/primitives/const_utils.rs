//! Const evaluation utilities

/// FNV-1a 64-bit Hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Nibble `n` (0..16) of the FNV-1a hash of `s`.
pub const fn hash_nibble(s: &str, n: u8) -> u8 {
    let hash = fnv1a_64_str(s);
    ((hash >> (n * 4)) & 0xF) as u8
}

/// Prepend one extent to a fixed-size extent table, dropping the last slot.
pub const fn push_extent<const N: usize>(first: usize, rest: [usize; N]) -> [usize; N] {
    let mut out = [0; N];
    if N == 0 {
        return out;
    }
    out[0] = first;
    let mut i = 1;
    while i < N {
        out[i] = rest[i - 1];
        i += 1;
    }
    out
}
