//! Formatting of secret values for display.
//!
//! Values are re-indented as text rather than parsed into a tree, so what is
//! printed is exactly what is stored: duplicate keys, key order, number text
//! and string escapes all survive.

use serde::de::IgnoredAny;

const INDENT: &str = "  ";

/// Re-indent a JSON document with two spaces.
///
/// The document is validated first; invalid JSON is an error and nothing is
/// produced.
pub fn pretty_json(raw: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str::<IgnoredAny>(raw)?;
    Ok(reindent(raw))
}

/// What to print for a stored value: the formatted document, or the raw
/// value alongside the reason it could not be formatted.
pub fn render_value(raw: &str) -> (String, Option<serde_json::Error>) {
    match pretty_json(raw) {
        Ok(pretty) => (pretty, None),
        Err(err) => (raw.to_string(), Some(err)),
    }
}

// Expects syntactically valid JSON.
fn reindent(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    // set after an opening bracket until we know whether the container is empty
    let mut pending_open = false;

    for c in raw.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            ' ' | '\t' | '\n' | '\r' => {}
            '}' | ']' => {
                if pending_open {
                    pending_open = false;
                } else {
                    newline(&mut out, depth.saturating_sub(1));
                }
                depth = depth.saturating_sub(1);
                out.push(c);
            }
            _ => {
                if pending_open {
                    pending_open = false;
                    newline(&mut out, depth);
                }
                match c {
                    '{' | '[' => {
                        out.push(c);
                        depth += 1;
                        pending_open = true;
                    }
                    ',' => {
                        out.push(',');
                        newline(&mut out, depth);
                    }
                    ':' => out.push_str(": "),
                    '"' => {
                        out.push('"');
                        in_string = true;
                    }
                    _ => out.push(c),
                }
            }
        }
    }

    out
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
