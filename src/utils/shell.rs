/// Escape a substitution value for insertion into a command template.
///
/// Backslash-escapes the characters that let a value break out of a quoted
/// context or trigger expansion (`\`, `"`, `` ` ``, `$`). Plain text,
/// including spaces, passes through untouched: the template author controls
/// quoting, the value cannot subvert it.
pub fn escape_argument(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '`' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_argument_plain_text_unchanged() {
        assert_eq!(escape_argument("Hello World"), "Hello World");
        assert_eq!(escape_argument("--verbose"), "--verbose");
    }

    #[test]
    fn escape_argument_neutralizes_expansion() {
        assert_eq!(escape_argument("$HOME"), "\\$HOME");
        assert_eq!(escape_argument("`id`"), "\\`id\\`");
        assert_eq!(escape_argument("a\"b"), "a\\\"b");
        assert_eq!(escape_argument("a\\b"), "a\\\\b");
    }

    #[test]
    fn escape_argument_empty_is_empty() {
        assert_eq!(escape_argument(""), "");
    }
}
