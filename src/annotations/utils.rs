use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// Timestamp used to prefix stderr diagnostics
pub fn now_str() -> String {
    let dt: DateTime<Utc> = SystemTime::now().into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_str_is_a_full_timestamp() {
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(now_str().len(), 19);
    }
}
