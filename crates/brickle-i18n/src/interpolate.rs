#![forbid(unsafe_code)]

//! Interpolation-token parsing for localized block messages.
//!
//! Message strings mix literal text with two kinds of tokens:
//! - numeric placeholders `%1`, `%2`, ... that the block definition later
//!   fills with field or input values;
//! - catalog references `%{msg_key}` that splice in another catalog
//!   entry, resolved recursively.
//!
//! A doubled percent `%%` escapes a literal percent sign. Anything
//! malformed (an unknown reference, an invalid key, an unterminated
//! `%{`) falls back to literal text rather than failing: message files
//! come from translators, and a visible `%{msg_typo}` in the UI beats a
//! load error.
//!
//! # Example
//! ```
//! use brickle_i18n::{MessageCatalog, Token, tokenize_interpolation};
//!
//! let mut catalog = MessageCatalog::new();
//! catalog.insert("move", "move %1 steps").unwrap();
//!
//! let tokens = tokenize_interpolation("%{msg_move}", &catalog);
//! assert_eq!(tokens, vec![
//!     Token::Text("move ".to_string()),
//!     Token::Placeholder(1),
//!     Token::Text(" steps".to_string()),
//! ]);
//! ```

use crate::catalog::{MessageCatalog, is_valid_key};

/// One parsed piece of a message string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, with adjacent runs already merged.
    Text(String),
    /// Numeric placeholder `%n`, 1-based as written.
    Placeholder(u32),
}

/// Parser state for the interpolation scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Plain text.
    Base,
    /// Saw `%`, deciding between `%%`, `%n`, and `%{`.
    Percent,
    /// Accumulating the digits of a `%n` placeholder.
    Digit,
    /// Accumulating a reference key inside `%{...}`.
    Reference,
}

/// Split a message into text and placeholder tokens, resolving
/// `%{msg_key}` references against the catalog (recursively for string
/// values).
///
/// Unknown or malformed references pass through as literal `%{raw}`
/// text. Adjacent text tokens merge into one; pure-text messages yield a
/// single token, empty messages yield none.
#[must_use]
pub fn tokenize_interpolation(message: &str, catalog: &MessageCatalog) -> Vec<Token> {
    tokenize(message, catalog, true, MAX_REFERENCE_DEPTH)
}

/// How deep `%{...}` references may nest before resolution stops and the
/// reference passes through literally. Guards against reference cycles
/// in translator-supplied catalogs.
const MAX_REFERENCE_DEPTH: usize = 16;

/// Resolve `%{msg_key}` references only, leaving `%1`-style placeholders
/// as literal text.
///
/// Used when loading block definitions whose fields hold display text
/// rather than interpolated messages.
#[must_use]
pub fn replace_message_references(message: &str, catalog: &MessageCatalog) -> String {
    let tokens = tokenize(message, catalog, false, MAX_REFERENCE_DEPTH);
    // With placeholder parsing off, everything merges into one token.
    match tokens.into_iter().next() {
        Some(Token::Text(text)) => text,
        _ => String::new(),
    }
}

/// Validate that every prefixed `%{...}` reference in `message` resolves
/// against the catalog.
///
/// Logs a warning per missing key and keeps scanning, so one pass
/// reports every bad reference in the string.
#[must_use]
pub fn check_message_references(message: &str, catalog: &MessageCatalog) -> bool {
    let mut valid = true;

    let mut rest = message;
    while let Some(start) = rest.find("%{") {
        let tail = &rest[start + 2..];
        let Some(end) = tail.find('}') else {
            break;
        };
        let raw_key = &tail[..end];
        let prefixed = raw_key
            .to_ascii_uppercase()
            .starts_with(&catalog.prefix().to_ascii_uppercase());
        if is_valid_key(raw_key) && prefixed && catalog.resolve_reference(raw_key).is_none() {
            tracing::warn!(reference = raw_key, "no message string for %{{{raw_key}}}");
            valid = false;
        }
        rest = &tail[end + 1..];
    }

    valid
}

/// Append text to the token list, merging with a trailing text token.
fn push_text(tokens: &mut Vec<Token>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Token::Text(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Text(text.to_string()));
    }
}

/// The interpolation state machine shared by [`tokenize_interpolation`]
/// and [`replace_message_references`].
fn tokenize(
    message: &str,
    catalog: &MessageCatalog,
    parse_placeholders: bool,
    depth: usize,
) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = message.chars().collect();

    let mut state = State::Base;
    let mut buffer = String::new();
    let mut number = String::new();

    // One index past the end acts as the end-of-input marker so pending
    // states can flush.
    let mut i = 0;
    while i <= chars.len() {
        let c = chars.get(i).copied();

        match state {
            State::Base => match c {
                Some('%') => {
                    push_text(&mut tokens, &buffer);
                    buffer.clear();
                    state = State::Percent;
                }
                Some(ch) => buffer.push(ch),
                None => {}
            },

            State::Percent => match c {
                // Escaped percent: %%
                Some('%') => {
                    buffer.push('%');
                    state = State::Base;
                }
                Some(d) if parse_placeholders && d.is_ascii_digit() => {
                    number.clear();
                    number.push(d);
                    state = State::Digit;
                }
                Some('{') => {
                    state = State::Reference;
                }
                // Not recognized; keep the percent as a literal.
                Some(ch) => {
                    buffer.push('%');
                    buffer.push(ch);
                    state = State::Base;
                }
                None => {
                    buffer.push('%');
                    state = State::Base;
                }
            },

            State::Digit => match c {
                Some(d) if d.is_ascii_digit() => number.push(d),
                _ => {
                    tokens.push(Token::Placeholder(number.parse().unwrap_or(u32::MAX)));
                    number.clear();
                    state = State::Base;
                    // Parse this character again in the base state.
                    continue;
                }
            },

            State::Reference => match c {
                Some('}') => {
                    let raw_key = std::mem::take(&mut buffer);
                    match catalog.resolve_reference(&raw_key) {
                        Some(value) if is_valid_key(&raw_key) && depth > 0 => {
                            // Splice in the referenced message, resolving
                            // nested references the same way.
                            for token in tokenize(value, catalog, parse_placeholders, depth - 1) {
                                match token {
                                    Token::Text(text) => push_text(&mut tokens, &text),
                                    placeholder => tokens.push(placeholder),
                                }
                            }
                        }
                        // Unknown or malformed: pass through as literal.
                        _ => push_text(&mut tokens, &format!("%{{{raw_key}}}")),
                    }
                    state = State::Base;
                }
                Some(ch) => buffer.push(ch),
                None => {
                    // Premature end before the closing brace; re-parse
                    // the partial reference as literal text.
                    let partial = std::mem::take(&mut buffer);
                    buffer.push_str("%{");
                    buffer.push_str(&partial);
                    state = State::Base;
                    continue;
                }
            },
        }

        i += 1;
    }

    push_text(&mut tokens, &buffer);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MessageCatalog {
        let mut catalog = MessageCatalog::new();
        catalog.insert("greet", "hello").unwrap();
        catalog.insert("move", "move %1 steps").unwrap();
        catalog.insert("outer", "say %{msg_greet}").unwrap();
        catalog
    }

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_token() {
        assert_eq!(
            tokenize_interpolation("just words", &catalog()),
            vec![text("just words")]
        );
    }

    #[test]
    fn empty_message_yields_no_tokens() {
        assert_eq!(tokenize_interpolation("", &catalog()), vec![]);
    }

    #[test]
    fn placeholders_split_the_text() {
        assert_eq!(
            tokenize_interpolation("hi %1 bye", &catalog()),
            vec![text("hi "), Token::Placeholder(1), text(" bye")]
        );
    }

    #[test]
    fn multi_digit_placeholder() {
        assert_eq!(
            tokenize_interpolation("%12", &catalog()),
            vec![Token::Placeholder(12)]
        );
    }

    #[test]
    fn adjacent_placeholders() {
        assert_eq!(
            tokenize_interpolation("%1%2", &catalog()),
            vec![Token::Placeholder(1), Token::Placeholder(2)]
        );
    }

    #[test]
    fn doubled_percent_escapes() {
        assert_eq!(
            tokenize_interpolation("100%% sure", &catalog()),
            vec![text("100% sure")]
        );
    }

    #[test]
    fn stray_percent_is_literal() {
        assert_eq!(
            tokenize_interpolation("50% off", &catalog()),
            vec![text("50% off")]
        );
        assert_eq!(tokenize_interpolation("tail%", &catalog()), vec![text("tail%")]);
    }

    #[test]
    fn reference_resolves_case_insensitively() {
        assert_eq!(
            tokenize_interpolation("%{msg_greet} world", &catalog()),
            vec![text("hello world")]
        );
        assert_eq!(
            tokenize_interpolation("%{MSG_GREET} world", &catalog()),
            vec![text("hello world")]
        );
    }

    #[test]
    fn referenced_message_is_tokenized_recursively() {
        assert_eq!(
            tokenize_interpolation("%{msg_move}!", &catalog()),
            vec![text("move "), Token::Placeholder(1), text(" steps!")]
        );
    }

    #[test]
    fn nested_references_resolve() {
        assert_eq!(
            tokenize_interpolation("%{msg_outer}", &catalog()),
            vec![text("say hello")]
        );
    }

    #[test]
    fn reference_cycles_terminate() {
        let mut cyclic = MessageCatalog::new();
        cyclic.insert("a", "x %{msg_b}").unwrap();
        cyclic.insert("b", "y %{msg_a}").unwrap();
        let tokens = tokenize_interpolation("%{msg_a}", &cyclic);
        // Resolution bottoms out; the innermost reference stays literal.
        assert_eq!(tokens.len(), 1);
        let Token::Text(flat) = &tokens[0] else {
            panic!("expected a single text token");
        };
        assert!(flat.starts_with("x y x y"));
        assert!(flat.ends_with("%{msg_a}") || flat.ends_with("%{msg_b}"));
    }

    #[test]
    fn unknown_reference_passes_through() {
        assert_eq!(
            tokenize_interpolation("%{msg_nope}", &catalog()),
            vec![text("%{msg_nope}")]
        );
    }

    #[test]
    fn unprefixed_reference_passes_through() {
        // "greet" exists in the catalog but lacks the namespace prefix.
        assert_eq!(
            tokenize_interpolation("%{greet}", &catalog()),
            vec![text("%{greet}")]
        );
    }

    #[test]
    fn invalid_key_passes_through() {
        assert_eq!(
            tokenize_interpolation("%{not a key}", &catalog()),
            vec![text("%{not a key}")]
        );
    }

    #[test]
    fn unterminated_reference_is_literal() {
        assert_eq!(
            tokenize_interpolation("oops %{msg_greet", &catalog()),
            vec![text("oops %{msg_greet")]
        );
    }

    #[test]
    fn replace_keeps_placeholders_literal() {
        assert_eq!(
            replace_message_references("%1 %{msg_greet}", &catalog()),
            "%1 hello"
        );
    }

    #[test]
    fn replace_of_plain_text_is_identity() {
        assert_eq!(replace_message_references("no refs here", &catalog()), "no refs here");
        assert_eq!(replace_message_references("", &catalog()), "");
    }

    #[test]
    fn check_accepts_valid_references() {
        assert!(check_message_references("%{msg_greet} and %{msg_move}", &catalog()));
    }

    #[test]
    fn check_flags_missing_references() {
        assert!(!check_message_references("%{msg_greet} %{msg_nope}", &catalog()));
    }

    #[test]
    fn check_ignores_unprefixed_references() {
        // References outside the namespace are not the catalog's problem.
        assert!(check_message_references("%{other_thing}", &catalog()));
    }

    #[test]
    fn check_scans_past_the_first_failure() {
        // Both bad keys are inspected; the call still reports failure.
        assert!(!check_message_references("%{msg_a} %{msg_b}", &catalog()));
    }
}
