//! Time formatting utilities.

use chrono::Local;

/// Formats the current local time according to the specified format string.
///
/// The format string follows the same syntax as `chrono::format::strftime`.
///
/// # Arguments
///
/// * `format` - The format string (e.g., "%Y-%m-%d %H:%M:%S")
///
/// # Returns
///
/// Returns the formatted time string.
///
/// # Examples
///
/// ```
/// use cutil::time::local_now;
///
/// let formatted = local_now("%Y-%m-%d %H:%M:%S");
/// println!("Current time: {}", formatted);
/// ```
pub fn local_now(format: &str) -> String {
    Local::now().format(format).to_string()
}
