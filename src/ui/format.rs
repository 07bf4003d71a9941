//! Display formatting helpers.

use chrono::{DateTime, Utc};

/// Format a timestamp for list output.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_includes_time() {
        let ts = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        assert_eq!(format_timestamp(ts), "2023-11-14 22:13");
    }
}
