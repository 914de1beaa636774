//! Credential check against the static user table.
//!
//! No hashing, lockout or rate limiting: the table in `config` is a
//! convenience gate, not a security boundary.

use subtle::ConstantTimeEq;

/// True iff `username` is in `table` and maps exactly to `password`.
pub fn authenticate(table: &[(&str, &str)], username: &str, password: &str) -> bool {
    table
        .iter()
        .find(|(user, _)| *user == username)
        .map(|(_, code)| code.as_bytes().ct_eq(password.as_bytes()).unwrap_u8() == 1)
        .unwrap_or(false)
}
