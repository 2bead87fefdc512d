//! Credential encoding compatible with the web application's bcrypt hasher (`bcrypt$<hash>`).

use bcrypt::{hash, verify, BcryptError};

const ALGORITHM_PREFIX: &str = "bcrypt$";

/// Hash `raw` with bcrypt at `cost` and prefix it with the hasher name.
pub fn make_password(raw: &str, cost: u32) -> Result<String, BcryptError> {
    let hashed = hash(raw, cost)?;
    Ok(format!("{ALGORITHM_PREFIX}{hashed}"))
}

/// True if `raw` matches `encoded`. Bare bcrypt hashes are accepted too.
/// Unknown or malformed encodings never match.
pub fn check_password(raw: &str, encoded: &str) -> bool {
    let hashed = encoded.strip_prefix(ALGORITHM_PREFIX).unwrap_or(encoded);
    verify(raw, hashed).unwrap_or(false)
}
