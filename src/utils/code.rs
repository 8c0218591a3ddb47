// src/utils/code.rs

use rand::Rng;

pub const ACCESS_CODE_PREFIX: &str = "PROF";

/// Exclusive upper bound of the numeric part.
const ACCESS_CODE_RANGE: u32 = 9999;

/// Generates a teacher access code such as `PROF0427`.
///
/// Collisions are possible and are not checked here or before insertion.
pub fn generate_access_code() -> String {
    let n = rand::thread_rng().gen_range(0..ACCESS_CODE_RANGE);
    format_access_code(n)
}

pub fn format_access_code(n: u32) -> String {
    format!("{}{:04}", ACCESS_CODE_PREFIX, n)
}
