//! Decoding of literal token text into values.
//!
//! The scanner keeps literals as raw source text; these helpers are for the
//! stages after parsing that need the actual values.

use crate::errors::errors::DecodeError;

const INTEGER_SUFFIXES: [&str; 12] = [
    "i128", "u128", "isize", "usize", "i64", "u64", "i32", "u32", "i16", "u16", "i8", "u8",
];

/// Decodes an integer literal such as `42`, `1_000u32`, `0b1010`, `0o17` or `0x1F`.
pub fn decode_integer(raw: &str) -> Result<u128, DecodeError> {
    let body = INTEGER_SUFFIXES
        .iter()
        .find_map(|suffix| raw.strip_suffix(*suffix))
        .unwrap_or(raw);

    let (radix, digits) = match body.get(..2) {
        Some("0b") => (2, &body[2..]),
        Some("0o") => (8, &body[2..]),
        Some("0x") => (16, &body[2..]),
        _ => (10, body),
    };

    let mut value: u128 = 0;
    let mut seen_digit = false;
    for ch in digits.chars().filter(|ch| *ch != '_') {
        let digit = ch
            .to_digit(radix)
            .ok_or(DecodeError::InvalidDigit { digit: ch, radix })?;
        value = value
            .checked_mul(radix as u128)
            .and_then(|value| value.checked_add(digit as u128))
            .ok_or_else(|| DecodeError::IntegerOverflow {
                literal: raw.to_string(),
            })?;
        seen_digit = true;
    }

    if !seen_digit {
        return Err(DecodeError::MalformedLiteral {
            literal: raw.to_string(),
        });
    }

    Ok(value)
}

/// Decodes a quoted character literal such as `'a'`, `'\n'` or `'\x41'`.
pub fn decode_char(raw: &str) -> Result<char, DecodeError> {
    let inner = unquote(raw, '\'')?;
    let decoded = decode_escapes(inner)?;

    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(DecodeError::MalformedLiteral {
            literal: raw.to_string(),
        }),
    }
}

/// Decodes a quoted string literal, resolving escape sequences.
pub fn decode_string(raw: &str) -> Result<String, DecodeError> {
    decode_escapes(unquote(raw, '"')?)
}

fn unquote(raw: &str, quote: char) -> Result<&str, DecodeError> {
    raw.strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .ok_or_else(|| DecodeError::MalformedLiteral {
            literal: raw.to_string(),
        })
}

fn decode_escapes(text: &str) -> Result<String, DecodeError> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some('\\') => result.push('\\'),
            Some('0') => result.push('\0'),
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                if hex.len() != 2 || !hex.chars().all(|digit| digit.is_ascii_hexdigit()) {
                    return Err(DecodeError::InvalidEscape {
                        sequence: format!("\\x{}", hex),
                    });
                }
                let byte = u8::from_str_radix(&hex, 16).map_err(|_| DecodeError::InvalidEscape {
                    sequence: format!("\\x{}", hex),
                })?;
                result.push(char::from(byte));
            }
            Some(other) => {
                return Err(DecodeError::InvalidEscape {
                    sequence: format!("\\{}", other),
                })
            }
            None => {
                return Err(DecodeError::InvalidEscape {
                    sequence: String::from("\\"),
                })
            }
        }
    }

    Ok(result)
}
