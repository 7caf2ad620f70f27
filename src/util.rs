/// Numeric text conversion helpers.
///
/// This module converts between `f64` and the decimal text forms used by
/// loosely typed arithmetic: reading a string as a number (`"  42 "`, `"0x1F"`,
/// `"-Infinity"`) and printing a number the way string concatenation shows it
/// (`1e+21`, `0.000001`, `NaN`).
///
/// Neither direction can fail. Text that is not a numeric literal reads as
/// `NaN`, and every `f64` has a textual form.
pub mod num;
