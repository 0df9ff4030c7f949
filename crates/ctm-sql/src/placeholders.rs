//! Named placeholder scanning.
//!
//! MySQL's wire protocol only knows positional `?` parameters, so named
//! `:name` placeholders are rewritten before a statement reaches the server.
//! Quoted strings and quoted identifiers are copied untouched.

/// A statement rewritten to positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalSql {
    /// Statement text with every `:name` replaced by `?`.
    pub text: String,
    /// Placeholder names in the order their `?` appear.
    pub order: Vec<String>,
}

/// Rewrites `:name` placeholders to `?`, recording their order.
///
/// A `:` only starts a placeholder when followed by a letter or `_` and not
/// preceded by another `:`. A name may appear more than once.
pub fn to_positional(sql: &str) -> PositionalSql {
    let mut text = String::with_capacity(sql.len());
    let mut order = Vec::new();
    let mut chars = sql.chars().peekable();
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            text.push(ch);
            if ch == '\\' && q != '`' {
                if let Some(escaped) = chars.next() {
                    text.push(escaped);
                }
            } else if ch == q {
                if chars.peek() == Some(&q) {
                    // Doubled quote stays inside the literal.
                    if let Some(doubled) = chars.next() {
                        text.push(doubled);
                    }
                } else {
                    quote = None;
                }
            }
            prev = Some(ch);
            continue;
        }

        match ch {
            '\'' | '"' | '`' => {
                quote = Some(ch);
                text.push(ch);
            }
            ':' if prev != Some(':') && chars.peek().is_some_and(|&c| is_name_start(c)) => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_name_char(c) {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                text.push('?');
                order.push(name);
            }
            _ => text.push(ch),
        }
        prev = Some(ch);
    }

    PositionalSql { text, order }
}

/// Placeholder names in `sql`, in order of appearance.
pub fn named_placeholders(sql: &str) -> Vec<String> {
    to_positional(sql).order
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
