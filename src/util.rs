/// Numeric parsing and formatting helpers.
///
/// This module decides how numbers are printed and how text is turned back
/// into numbers. Every numeric output and every numeric substitution into
/// text goes through [`num::format_number`], so the trimming rule lives in
/// exactly one place.
pub mod num;
