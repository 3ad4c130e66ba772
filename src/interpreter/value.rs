/// The runtime value type.
///
/// Defines `Value`, the tagged union over the four scalar kinds, with
/// conversion from literal text, textual output form, and the coercion
/// applied to interactive input.
pub mod core;
