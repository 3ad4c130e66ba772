/// Numeric conversion helpers.
///
/// Conversions between integer and floating-point types that never lose data
/// silently. Each returns an error if the value cannot be represented exactly.
pub mod num;
