//! Local CSV header parsing
//!
//! Only the first line is read, to offer the user a column picker. The
//! server does the real CSV handling.

/// Split the first line of a CSV into trimmed column names, in order.
pub fn header_columns(data: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(data);
    let header = text.lines().next().unwrap_or("");

    if header.trim().is_empty() {
        return Vec::new();
    }

    header.split(',').map(|c| c.trim().to_string()).collect()
}
