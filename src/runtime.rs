use chrono::{DateTime, Timelike, Utc};

/// `major.minor.patch` of the compiler this binary was built with.
pub fn rust_version() -> &'static str {
    env!("TOUKON_RUSTC_VERSION")
}

/// ISO-8601 UTC timestamp with a trailing `Z`. Microseconds are included
/// unless they are zero.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    if now.nanosecond() / 1_000 == 0 {
        now.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
    }
}
