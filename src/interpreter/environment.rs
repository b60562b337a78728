use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{FunctionHeader, Param},
    interpreter::{
        source::SourceLine,
        value::{core::Value, kind::ReturnKind},
    },
};

/// A user-defined function.
///
/// The body is stored as raw cleaned lines and is recognized again on every
/// call, so diagnostics inside a body are raised each time the offending line
/// runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The name of the function.
    pub name:        String,
    /// The declared return kind.
    pub return_kind: ReturnKind,
    /// The parameters in declaration order.
    pub params:      Vec<Param>,
    /// The body lines between the braces.
    pub body:        Vec<SourceLine>,
    /// Line number of the header.
    pub line:        usize,
}

impl Function {
    /// Creates a function from its parsed header and collected body.
    #[must_use]
    pub fn new(header: FunctionHeader, body: Vec<SourceLine>, line: usize) -> Self {
        Self { name: header.name,
               return_kind: header.return_kind,
               params: header.params,
               body,
               line }
    }
}

/// Stores variable bindings and user-defined functions.
///
/// Text, number and boolean variables live in three independent maps; a name
/// may be bound in more than one of them at the same time. Which map wins is
/// decided by each lookup site.
///
/// ## Scoping
///
/// A function call runs against a *clone* of the caller's environment, so
/// nothing the callee binds is visible to the caller afterwards. Branches of
/// an `if` run against the caller's environment itself.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Text variables.
    pub text:      HashMap<String, String>,
    /// Number variables.
    pub number:    HashMap<String, f64>,
    /// Boolean variables.
    pub boolean:   HashMap<String, bool>,
    /// User-defined functions, keyed by name.
    pub functions: HashMap<String, Rc<Function>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` in the map matching the value's kind.
    ///
    /// Binding `Absent` does nothing.
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.bind("lives", Value::Number(9.0));
    /// env.bind("lives", Value::Text("nine".to_string()));
    ///
    /// assert_eq!(env.number.get("lives"), Some(&9.0));
    /// assert_eq!(env.text.get("lives").map(String::as_str), Some("nine"));
    /// ```
    pub fn bind(&mut self, name: &str, value: Value) {
        match value {
            Value::Text(t) => {
                self.text.insert(name.to_string(), t);
            },
            Value::Number(n) => {
                self.number.insert(name.to_string(), n);
            },
            Value::Boolean(b) => {
                self.boolean.insert(name.to_string(), b);
            },
            Value::Absent => {},
        }
    }

    /// Looks a variable up in the text, number and boolean maps, in that
    /// order.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(t) = self.text.get(name) {
            return Some(Value::Text(t.clone()));
        }
        if let Some(n) = self.number.get(name) {
            return Some(Value::Number(*n));
        }
        self.boolean.get(name).map(|b| Value::Boolean(*b))
    }

    /// Registers a function, replacing any previous function of that name.
    pub fn define_function(&mut self, function: Function) {
        self.functions.insert(function.name.clone(), Rc::new(function));
    }

    /// Returns the function registered under `name`.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Rc<Function>> {
        self.functions.get(name).cloned()
    }
}
