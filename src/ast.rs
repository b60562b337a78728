use crate::interpreter::{
    lexer::Spanned,
    value::kind::{Kind, ReturnKind},
};

/// A fragment of a line kept as tokens for lazy evaluation.
///
/// Expressions are not parsed when a statement is recognized: how the tokens
/// are interpreted depends on the evaluation mode (text, numeric or
/// condition) chosen by the statement. Token spans are relative to `source`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The exact source text of the fragment, trimmed.
    pub source: String,
    /// The tokens of the fragment.
    pub tokens: Vec<Spanned>,
    /// Line number in the source code.
    pub line:   usize,
}

impl Expression {
    /// Builds an expression from a run of tokens taken from `text`.
    ///
    /// Spans are rebased so they index into the new `source`.
    #[must_use]
    pub fn from_tokens(text: &str, tokens: &[Spanned], line: usize) -> Self {
        let (Some((_, first)), Some((_, last))) = (tokens.first(), tokens.last()) else {
            return Self { source: String::new(),
                          tokens: Vec::new(),
                          line };
        };
        let start = first.start;
        let source = text[start..last.end].to_string();
        let tokens = tokens.iter()
                           .map(|(token, span)| (token.clone(), span.start - start..span.end - start))
                           .collect();

        Self { source, tokens, line }
    }
}

/// A typed parameter of a user-defined function, e.g. `num a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Declared kind of the argument.
    pub kind: Kind,
    /// Name the argument is bound to inside the body.
    pub name: String,
}

/// The header line of a function definition: `num add(num a, num b) {`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionHeader {
    /// The name of the function.
    pub name:        String,
    /// The declared return kind.
    pub return_kind: ReturnKind,
    /// The parameters in declaration order.
    pub params:      Vec<Param>,
}

/// Represents a recognized line.
///
/// The statement recognizer classifies every cleaned line into exactly one of
/// these forms. Block-opening forms carry the text following their opening
/// brace, which becomes the first line of the block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `kind name(params) {`
    FunctionDefinition {
        /// The parsed header.
        header:     FunctionHeader,
        /// Text after the opening brace on the header line.
        body_start: String,
    },
    /// `kind name ~> callee(args);`, a declaration initialized by exactly one
    /// function call.
    CallDeclaration {
        /// Declared kind of the variable.
        kind: Kind,
        /// Name of the variable.
        name: String,
        /// The call expression.
        call: Expression,
    },
    /// `purr ~> expr;`
    Print(Expression),
    /// `kind name ~> expr;`
    Declaration {
        /// Declared kind of the variable.
        kind:  Kind,
        /// Name of the variable.
        name:  String,
        /// The initializer.
        value: Expression,
    },
    /// `name(args);`
    Call(Expression),
    /// `if (cond) {`
    If {
        /// The condition between the parentheses.
        condition:  Expression,
        /// Text after the opening brace.
        body_start: String,
    },
    /// `else {`
    Else {
        /// Text after the opening brace.
        body_start: String,
    },
    /// `return expr;` or `return;`
    Return(Option<Expression>),
    /// A line matching no recognized form.
    Unknown,
}

/// An abstract syntax tree (AST) node of a numeric expression.
///
/// Numeric expressions are the only ones parsed into a tree. Function call
/// arguments are expressions too, which is how nested calls such as
/// `add(add(1, 2), 3)` are evaluated innermost first.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A quoted text literal.
    Text(String),
    /// Reference to a variable by name.
    Variable(String),
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a user-defined function.
    FunctionCall {
        /// The function name.
        name:      String,
        /// The argument expressions.
        arguments: Vec<Self>,
    },
}

/// Represents an arithmetic binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// Represents a comparison operator of a condition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl ComparisonOperator {
    /// Applies the operator to two ordered operands.
    ///
    /// # Example
    /// ```
    /// use catlang::ast::ComparisonOperator;
    ///
    /// assert!(ComparisonOperator::Greater.compare(&5.0, &3.0));
    /// assert!(ComparisonOperator::Equal.compare(&"cat", &"cat"));
    /// assert!(!ComparisonOperator::LessEqual.compare(&2.0, &1.0));
    /// ```
    pub fn compare<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::Less => left < right,
            Self::Greater => left > right,
            Self::LessEqual => left <= right,
            Self::GreaterEqual => left >= right,
        }
    }
}
