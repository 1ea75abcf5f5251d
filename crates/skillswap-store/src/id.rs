use chrono::Utc;

/// Identifier derived from the current time in milliseconds since the epoch.
///
/// Two calls within the same millisecond return the same id.
pub fn timestamp_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
