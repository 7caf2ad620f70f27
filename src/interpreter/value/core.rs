use std::sync::Arc;

use crate::util::num::{number_to_string, string_to_number};

/// Represents a loosely typed primitive value.
///
/// Exactly one variant is active at a time. Values are immutable: every
/// operation produces a new `DynamicValue` rather than changing an operand.
/// String payloads are shared, so cloning is cheap and values can be sent
/// between threads.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    /// A double precision number. May be `NaN` or `±Infinity`.
    Number(f64),
    /// A sequence of Unicode code points.
    String(Arc<str>),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The `null` value.
    Null,
    /// The `undefined` value.
    Undefined,
}

impl From<f64> for DynamicValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for DynamicValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for DynamicValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::String(Arc::from(v))
    }
}

impl From<String> for DynamicValue {
    fn from(v: String) -> Self {
        Self::String(Arc::from(v))
    }
}

impl DynamicValue {
    /// Converts the value to a number.
    ///
    /// - `Number` is returned unchanged.
    /// - `Boolean` becomes `1` or `0`.
    /// - `Null` becomes `0`.
    /// - `Undefined` becomes `NaN`.
    /// - `String` is read as a numeric literal; see
    ///   [`string_to_number`](crate::util::num::string_to_number).
    ///
    /// # Example
    /// ```
    /// use loosetype::interpreter::value::core::DynamicValue;
    ///
    /// assert_eq!(DynamicValue::from(" 5 ").to_number(), 5.0);
    /// assert_eq!(DynamicValue::from(true).to_number(), 1.0);
    /// assert_eq!(DynamicValue::Null.to_number(), 0.0);
    /// assert!(DynamicValue::Undefined.to_number().is_nan());
    /// assert!(DynamicValue::from("hello").to_number().is_nan());
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::String(s) => string_to_number(s),
            Self::Boolean(b) => f64::from(u8::from(*b)),
            Self::Null => 0.0,
            Self::Undefined => f64::NAN,
        }
    }

    /// Interprets the value in a boolean context.
    ///
    /// Falsy values are `false`, `0`, `-0`, `NaN`, `""`, `null` and
    /// `undefined`. Every other value is truthy.
    ///
    /// # Example
    /// ```
    /// use loosetype::interpreter::value::core::DynamicValue;
    ///
    /// assert!(!DynamicValue::from(0).to_boolean());
    /// assert!(!DynamicValue::from("").to_boolean());
    /// assert!(DynamicValue::from("0").to_boolean());
    /// assert!(DynamicValue::from(f64::NEG_INFINITY).to_boolean());
    /// ```
    #[must_use]
    pub fn to_boolean(&self) -> bool {
        match self {
            Self::Number(n) => !(n.is_nan() || *n == 0.0),
            Self::String(s) => !s.is_empty(),
            Self::Boolean(b) => *b,
            Self::Null | Self::Undefined => false,
        }
    }

    /// Converts the value to its string form, as used by concatenation.
    ///
    /// Strings are shared rather than copied.
    ///
    /// # Example
    /// ```
    /// use loosetype::interpreter::value::core::DynamicValue;
    ///
    /// assert_eq!(&*DynamicValue::from(2).to_js_string(), "2");
    /// assert_eq!(&*DynamicValue::from(false).to_js_string(), "false");
    /// assert_eq!(&*DynamicValue::Undefined.to_js_string(), "undefined");
    /// ```
    #[must_use]
    pub fn to_js_string(&self) -> Arc<str> {
        match self {
            Self::String(s) => Arc::clone(s),
            Self::Number(n) => Arc::from(number_to_string(*n)),
            Self::Boolean(true) => Arc::from("true"),
            Self::Boolean(false) => Arc::from("false"),
            Self::Null => Arc::from("null"),
            Self::Undefined => Arc::from("undefined"),
        }
    }

    /// Returns the name reported by `typeof`.
    ///
    /// `null` reports `"object"`.
    #[must_use]
    pub const fn type_of(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Null => "object",
            Self::Undefined => "undefined",
        }
    }

    /// Returns `true` if the value is the number `NaN`.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }

    /// Returns `true` if both values carry the same variant, regardless of
    /// payload.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Renders the value the way a REPL echoes it.
    ///
    /// Strings are single quoted with quotes, backslashes and control
    /// characters escaped. Every other value prints as its string form.
    ///
    /// # Example
    /// ```
    /// use loosetype::interpreter::value::core::DynamicValue;
    ///
    /// assert_eq!(DynamicValue::from("52").inspect(), "'52'");
    /// assert_eq!(DynamicValue::from("it's").inspect(), r"'it\'s'");
    /// assert_eq!(DynamicValue::from(52).inspect(), "52");
    /// assert_eq!(DynamicValue::Null.inspect(), "null");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::String(s) => {
                let mut quoted = String::with_capacity(s.len() + 2);
                quoted.push('\'');
                for c in s.chars() {
                    match c {
                        '\'' => quoted.push_str("\\'"),
                        '\\' => quoted.push_str("\\\\"),
                        '\n' => quoted.push_str("\\n"),
                        '\r' => quoted.push_str("\\r"),
                        '\t' => quoted.push_str("\\t"),
                        _ => quoted.push(c),
                    }
                }
                quoted.push('\'');
                quoted
            },
            _ => self.to_js_string().to_string(),
        }
    }
}

impl std::fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_js_string())
    }
}
