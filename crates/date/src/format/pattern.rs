//! Tokenizer for custom date-time patterns.

use crate::error::DateError;

/// Letters that act as field specifiers in a custom pattern.
const SPECIFIERS: &[char] = &['d', 'M', 'y', 'h', 'H', 'm', 's', 'f', 'F', 't', 'g', 'K', 'z'];

/// Largest run of `f` or `F`, one digit per tick.
pub(crate) const MAX_FRACTION_DIGITS: usize = 7;

/// One element of a tokenized custom pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A run of one specifier letter.
    Field { letter: char, len: usize },
    /// Text copied verbatim.
    Literal(String),
    /// `/`, replaced by the culture's date separator.
    DateSeparator,
    /// `:`, replaced by the culture's time separator.
    TimeSeparator,
}

/// Splits `pattern` into runs of identical characters.
pub(crate) fn runs(pattern: &str) -> impl Iterator<Item = (char, usize)> + '_ {
    let mut chars = pattern.chars().peekable();
    std::iter::from_fn(move || {
        let c = chars.next()?;
        let mut len = 1;
        while chars.next_if_eq(&c).is_some() {
            len += 1;
        }
        Some((c, len))
    })
}

/// Tokenizes a custom pattern.
///
/// Quoted text (`'...'` or `"..."`) and characters escaped with `\` are
/// literal. A leading `%` marks the following character as a single
/// specifier, which lets a one-letter custom pattern be told apart from a
/// standard format.
///
/// # Errors
///
/// Returns [`DateError::InvalidFormat`] for an unterminated quote, a
/// dangling `\` or `%`, or a fraction run longer than seven digits.
pub(crate) fn tokenize(pattern: &str) -> Result<Vec<Token>, DateError> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some(q) if q == c => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => text.push(escaped),
                            None => return Err(DateError::invalid_format(pattern, "dangling escape")),
                        },
                        Some(other) => text.push(other),
                        None => {
                            return Err(DateError::invalid_format(pattern, "unterminated quote"));
                        }
                    }
                }
                push_literal(&mut tokens, &text);
            }
            '\\' => match chars.next() {
                Some(escaped) => push_literal(&mut tokens, escaped.encode_utf8(&mut [0; 4])),
                None => return Err(DateError::invalid_format(pattern, "dangling escape")),
            },
            '%' => match chars.next() {
                Some(letter) if SPECIFIERS.contains(&letter) => {
                    tokens.push(Token::Field { letter, len: 1 });
                }
                _ => {
                    return Err(DateError::invalid_format(
                        pattern,
                        "'%' must be followed by a specifier",
                    ));
                }
            },
            ':' => tokens.push(Token::TimeSeparator),
            '/' => tokens.push(Token::DateSeparator),
            // K is never grouped; each one renders the kind suffix.
            'K' => tokens.push(Token::Field { letter: 'K', len: 1 }),
            letter if SPECIFIERS.contains(&letter) => {
                let mut len = 1;
                while chars.next_if_eq(&letter).is_some() {
                    len += 1;
                }
                if matches!(letter, 'f' | 'F') && len > MAX_FRACTION_DIGITS {
                    return Err(DateError::invalid_format(
                        pattern,
                        "at most seven fraction digits",
                    ));
                }
                tokens.push(Token::Field { letter, len });
            }
            other => push_literal(&mut tokens, other.encode_utf8(&mut [0; 4])),
        }
    }
    Ok(tokens)
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}
