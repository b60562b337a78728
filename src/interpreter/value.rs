/// Runtime values.
///
/// Defines the `Value` tagged union shared by variables, function arguments
/// and return values, along with kind queries and numeric conversion.
pub mod core;
/// Declared kinds.
///
/// Defines the `Kind` of a variable or parameter (`str`, `num`, `bool`) and
/// the `ReturnKind` of a function, which may also be `void`.
pub mod kind;
