//! Decoding of JavaScript literal tokens.

use crate::traits::ReadError;

/// Value of a numeric literal token (`42`, `0x2a`, `1_000`, `1e3`, `017`).
pub fn parse_number(text: &str) -> Result<f64, ReadError> {
    let invalid = || ReadError::Parse(format!("invalid number: {}", text));
    let digits: String = text.chars().filter(|c| *c != '_').collect();

    let radix = match digits.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&digits[2..], radix).ok_or_else(invalid);
    }

    // Legacy octal: leading zero followed only by octal digits.
    if digits.len() > 1
        && digits.starts_with('0')
        && digits.bytes().all(|b| b.is_ascii_digit())
    {
        if digits.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
            return parse_radix(&digits[1..], 8).ok_or_else(invalid);
        }
        return digits.parse().map_err(|_| invalid());
    }

    // Rust's float parser rejects a trailing dot ("1.") but accepts ".5".
    let digits = digits.strip_suffix('.').unwrap_or(&digits);
    digits.parse().map_err(|_| invalid())
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}

/// Digits of a big-integer literal token with the `n` suffix removed.
pub fn parse_bigint(text: &str) -> Result<String, ReadError> {
    let digits = text
        .strip_suffix('n')
        .ok_or_else(|| ReadError::Parse(format!("invalid bigint: {}", text)))?;
    Ok(digits.chars().filter(|c| *c != '_').collect())
}

/// Body of a quoted string token with escapes resolved.
pub fn unquote_string(text: &str) -> Result<String, ReadError> {
    let inner = text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| text.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .ok_or_else(|| ReadError::Parse(format!("unterminated string: {}", text)))?;
    unescape(inner)
}

/// Resolve JavaScript escape sequences.
pub fn unescape(raw: &str) -> Result<String, ReadError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = chars
            .next()
            .ok_or_else(|| ReadError::Parse("dangling escape".into()))?;
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push('\0'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                out.push(code_point(&hex)?);
            }
            'u' => {
                let hex: String = if chars.peek() == Some(&'{') {
                    chars.next();
                    chars.by_ref().take_while(|c| *c != '}').collect()
                } else {
                    chars.by_ref().take(4).collect()
                };
                let unit = u32::from_str_radix(&hex, 16)
                    .map_err(|_| ReadError::Parse(format!("invalid escape: \\u{}", hex)))?;
                // Surrogate pairs arrive as two consecutive \uXXXX escapes.
                let c = if (0xD800..0xDC00).contains(&unit) {
                    take_low_surrogate(&mut chars).and_then(|low| combine_surrogates(unit, low))
                } else {
                    char::from_u32(unit)
                };
                let c = c.ok_or_else(|| {
                    if unit > 0x10FFFF {
                        ReadError::Parse(format!("escape out of range: \\u{{{}}}", hex))
                    } else {
                        ReadError::Parse(format!("unpaired surrogate: \\u{}", hex))
                    }
                })?;
                out.push(c);
            }
            // Line continuation
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

fn code_point(hex: &str) -> Result<char, ReadError> {
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| ReadError::Parse(format!("invalid escape: {}", hex)))
}

fn take_low_surrogate(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<u32> {
    let mut lookahead = chars.clone();
    if lookahead.next() != Some('\\') || lookahead.next() != Some('u') {
        return None;
    }
    let hex: String = lookahead.by_ref().take(4).collect();
    let low = u32::from_str_radix(&hex, 16).ok()?;
    if !(0xDC00..0xE000).contains(&low) {
        return None;
    }
    *chars = lookahead;
    Some(low)
}

fn combine_surrogates(high: u32, low: u32) -> Option<char> {
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
}
