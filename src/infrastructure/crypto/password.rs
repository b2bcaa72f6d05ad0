//! Password hashing utilities

use bcrypt::{hash, verify};

use crate::shared::{AccountError, AccountResult};

/// Work factor used unless the config overrides it.
pub const DEFAULT_HASH_COST: u32 = 14;

/// Cheapest and most expensive work factors bcrypt accepts.
pub const MIN_HASH_COST: u32 = 4;
pub const MAX_HASH_COST: u32 = 31;

/// bcrypt only looks at the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a password using bcrypt.
///
/// Leading and trailing whitespace is trimmed first, so `" secret "` and
/// `"secret"` produce hashes that both verify against `"secret"`. Inputs
/// longer than bcrypt can represent are rejected instead of silently
/// truncated.
pub fn hash_password(password: &str, cost: u32) -> AccountResult<String> {
    if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
        return Err(AccountError::Hashing(format!(
            "cost {} outside {}..={}",
            cost, MIN_HASH_COST, MAX_HASH_COST
        )));
    }
    let password = password.trim();
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AccountError::Hashing(format!(
            "password exceeds {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    hash(password, cost).map_err(|e| AccountError::Hashing(e.to_string()))
}

/// Verify a password against a hash.
///
/// A mismatch and a malformed hash are reported the same way.
pub fn verify_password(password: &str, hash: &str) -> AccountResult<()> {
    match verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(AccountError::password_incorrect()),
    }
}
