/// Application-level constants
pub const APP_NAME: &str = "Hospital System";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static login table: username → 4-digit code.
///
/// Not a security boundary; it only gates the record screens.
pub const DEFAULT_USERS: &[(&str, &str)] = &[
    ("admin", "1234"),
    ("doctor", "1111"),
    ("reception", "2222"),
];

/// Maximum audit entries kept in memory before the oldest are dropped.
pub const AUDIT_BUFFER_CAPACITY: usize = 500;

/// Entries shown on the activity screen.
pub const ACTIVITY_ROWS: usize = 20;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "hospital_records_lib=info,hospital_records=info"
}
