use crate::{
    interpreter::value::kind::Kind,
    util::num::{format_number, parse_number},
};

/// Represents a runtime value in the interpreter.
///
/// The same union is used for variables, function arguments and return
/// values. `Absent` stands for "no value": the result of a `void` function
/// or an argument that could not be resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value.
    #[default]
    Absent,
    /// A text value.
    Text(String),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
}

impl Value {
    /// Returns the kind of the value, or `None` for `Absent`.
    #[must_use]
    pub const fn kind(&self) -> Option<Kind> {
        match self {
            Self::Absent => None,
            Self::Text(_) => Some(Kind::Text),
            Self::Number(_) => Some(Kind::Number),
            Self::Boolean(_) => Some(Kind::Boolean),
        }
    }

    /// Names the kind of the value as a script keyword.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.keyword(),
            None => "void",
        }
    }

    /// Converts the value to a number for numeric evaluation.
    ///
    /// Booleans become `1` or `0`, text is parsed as a number and falls back
    /// to `0`, and `Absent` is `0`.
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(4.5).to_number(), 4.5);
    /// assert_eq!(Value::Boolean(true).to_number(), 1.0);
    /// assert_eq!(Value::Text("12".to_string()).to_number(), 12.0);
    /// assert_eq!(Value::Text("twelve".to_string()).to_number(), 0.0);
    /// assert_eq!(Value::Absent.to_number(), 0.0);
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Boolean(b) => f64::from(u8::from(*b)),
            Self::Text(t) => parse_number(t).unwrap_or(0.0),
            Self::Absent => 0.0,
        }
    }
}

/// Parses `true` or `false`, ignoring letter case.
#[must_use]
pub fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Text(t) => f.write_str(t),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
