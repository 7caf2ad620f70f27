/// Dynamic value representation.
///
/// Defines `DynamicValue`, the tagged union over the primitive types the
/// engine works with, together with the conversions every operator is built
/// from: numeric conversion, string conversion and truthiness.
pub mod core;
