//! Command template rendering.
//!
//! A command template is an ordered token list: the first token is a format
//! string with `%s` placeholders, the remaining tokens are substitution
//! values. Values are escaped before insertion so the rendered command is a
//! single shell-executable string.

use crate::error::{Error, Result};
use crate::utils::shell;

/// Render a command template into a shell-executable string.
///
/// `%s` substitutes the next value (escaped), `%%` is a literal percent, any
/// other `%` sequence passes through unchanged. Too few substitution values
/// is an error; surplus values are ignored.
pub fn render_command(parts: &[&str]) -> Result<String> {
    let (format, args) = parts
        .split_first()
        .ok_or_else(|| Error::CommandFormat("empty command template".to_string()))?;

    let mut rendered = String::with_capacity(format.len());
    let mut values = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            rendered.push(c);
            continue;
        }

        match chars.peek() {
            Some('%') => {
                chars.next();
                rendered.push('%');
            }
            Some('s') => {
                chars.next();
                let value = values.next().ok_or_else(|| {
                    Error::CommandFormat(format!(
                        "not enough substitution values for template: {}",
                        format
                    ))
                })?;
                rendered.push_str(&shell::escape_argument(value));
            }
            _ => rendered.push('%'),
        }
    }

    Ok(rendered)
}
