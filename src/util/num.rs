/// Largest exponent position that still prints in plain decimal notation.
const MAX_PLAIN_POINT: i32 = 21;
/// Smallest exponent position that still prints in plain decimal notation.
const MIN_PLAIN_POINT: i32 = -6;

/// Returns `true` for characters skipped around numeric text.
///
/// This is the Unicode white space set plus the byte order mark, minus the
/// next line control (U+0085), which numeric text does not treat as a line
/// terminator.
///
/// ## Example
/// ```
/// use loosetype::util::num::is_numeric_whitespace;
///
/// assert!(is_numeric_whitespace('\u{A0}'));
/// assert!(is_numeric_whitespace('\u{FEFF}'));
/// assert!(!is_numeric_whitespace('\u{85}'));
/// ```
#[must_use]
pub fn is_numeric_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Reads a string as a number.
///
/// Leading and trailing white space is ignored. An empty (or all white space)
/// string reads as `0`. Accepted forms are decimal literals with an optional
/// sign, fraction and exponent, the signed or unsigned word `Infinity`, and
/// unsigned `0x`, `0o` and `0b` integer literals. Anything else reads as
/// `NaN`, including the spellings Rust itself would accept such as `inf` or
/// `nan`.
///
/// ## Example
/// ```
/// use loosetype::util::num::string_to_number;
///
/// assert_eq!(string_to_number(" 42 "), 42.0);
/// assert_eq!(string_to_number(""), 0.0);
/// assert_eq!(string_to_number("0x1F"), 31.0);
/// assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
/// assert!(string_to_number("hello").is_nan());
/// assert!(string_to_number("inf").is_nan());
/// ```
#[must_use]
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_numeric_whitespace);

    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {},
    }

    if let Some((radix, digits)) = split_radix_prefix(trimmed) {
        return parse_radix_digits(digits, radix);
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Splits a `0x`, `0o` or `0b` prefix off an integer literal.
fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let mut chars = text.chars();
    if chars.next() != Some('0') {
        return None;
    }

    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };

    Some((radix, chars.as_str()))
}

/// Reads digits in the given radix, or `NaN` if any digit is invalid.
///
/// The integer is built exactly and rounded to `f64` once. Only values too
/// large for `u128` are accumulated in floating point.
#[allow(clippy::cast_precision_loss)]
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return f64::NAN;
    }

    let exact = digits.chars().try_fold(0_u128, |acc, c| {
                                  acc.checked_mul(u128::from(radix))?
                                     .checked_add(u128::from(c.to_digit(radix)?))
                              });

    match exact {
        Some(value) => value as f64,
        None => digits.chars()
                      .filter_map(|c| c.to_digit(radix))
                      .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit)),
    }
}

/// Checks that `text` only uses the characters of a decimal literal.
///
/// The exact shape is left to `f64::from_str`; this filter only rejects the
/// word forms and digit separators it would otherwise accept.
fn is_decimal_literal(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
    && text.bytes()
           .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

/// Prints a number as decimal text.
///
/// Uses the shortest digit sequence that reads back as the same `f64`.
/// Integral values print without a fraction, `-0` prints as `0`, and values
/// whose magnitude is at least `1e21` or below `1e-6` use exponent notation
/// with an explicit exponent sign.
///
/// ## Example
/// ```
/// use loosetype::util::num::number_to_string;
///
/// assert_eq!(number_to_string(52.0), "52");
/// assert_eq!(number_to_string(8.2), "8.2");
/// assert_eq!(number_to_string(-0.0), "0");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(0.000_001), "0.000001");
/// assert_eq!(number_to_string(1.5e-7), "1.5e-7");
/// assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_to_string(-value));
    }

    let (digits, point) = shortest_digits(value);
    let count = i32::try_from(digits.len()).unwrap_or(i32::MAX);

    if count <= point && point <= MAX_PLAIN_POINT {
        let zeros = (point - count).unsigned_abs() as usize;
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < point && point <= MAX_PLAIN_POINT {
        let (whole, fraction) = digits.split_at(point.unsigned_abs() as usize);
        format!("{whole}.{fraction}")
    } else if MIN_PLAIN_POINT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", exponent.unsigned_abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exponent.unsigned_abs())
        }
    }
}

/// Returns the shortest round-trip digits of a finite positive number and
/// the position of the decimal point relative to the first digit.
///
/// `1234.5` yields `("12345", 4)` and `0.05` yields `("5", -1)`.
fn shortest_digits(value: f64) -> (String, i32) {
    let formatted = format!("{value:e}");
    let (mantissa, exponent) = formatted.split_once('e')
                                        .unwrap_or((formatted.as_str(), "0"));
    let exponent = exponent.parse::<i32>().unwrap_or(0);
    let digits = mantissa.chars()
                         .filter(char::is_ascii_digit)
                         .collect::<String>();

    (digits, exponent + 1)
}
