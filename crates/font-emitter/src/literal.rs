//! String literal and union rendering.

use std::fmt::{self, Write};

/// A single-quoted TypeScript string literal.
#[derive(Debug, Clone, Copy)]
pub struct Quoted<'a>(pub &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\'')?;
        for c in self.0.chars() {
            match c {
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c.is_control() => write!(f, "\\u{{{:04x}}}", c as u32)?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('\'')
    }
}

/// A union of string literals on one line, `never` when empty.
#[derive(Debug, Clone, Copy)]
pub struct Union<'a>(pub &'a [String]);

impl fmt::Display for Union<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return f.write_str("never");
        };
        write!(f, "{}", Quoted(first))?;
        for member in rest {
            write!(f, " | {}", Quoted(member))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_plain() {
        assert_eq!(Quoted("Bar Baz").to_string(), "'Bar Baz'");
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(Quoted("Gideon's").to_string(), r"'Gideon\'s'");
        assert_eq!(Quoted(r"a\b").to_string(), r"'a\\b'");
        assert_eq!(Quoted("a\nb").to_string(), r"'a\nb'");
        assert_eq!(Quoted("\u{7}").to_string(), r"'\u{0007}'");
    }

    #[test]
    fn test_quoted_non_ascii_kept() {
        assert_eq!(Quoted("Crème").to_string(), "'Crème'");
    }

    #[test]
    fn test_union() {
        let members = vec!["400".to_string(), "700".to_string()];
        assert_eq!(Union(&members).to_string(), "'400' | '700'");
    }

    #[test]
    fn test_empty_union_is_never() {
        assert_eq!(Union(&[]).to_string(), "never");
    }
}
