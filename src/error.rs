//! Error formatting utilities.
//!
//! Operator-facing messages are a single line, so the source chain of an
//! error is flattened before it is printed.

use anyhow::Error;

/// Format an error and its source chain into one line.
///
/// Messages are joined with `": "`. A cause whose text is already contained
/// in the previous message is skipped, since SDK errors often repeat their
/// source in their own `Display`.
///
/// # Example
///
/// ```
/// use smed::error::format_error_chain;
///
/// let err = anyhow::anyhow!("connection refused").context("GetSecretValue failed");
/// assert_eq!(
///     format_error_chain(&err),
///     "GetSecretValue failed: connection refused"
/// );
/// ```
pub fn format_error_chain(error: &Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in error.chain() {
        let text = cause.to_string();
        if parts.last().is_some_and(|prev| prev.contains(&text)) {
            continue;
        }
        parts.push(text);
    }
    parts.join(": ")
}
