use crate::interpreter::lexer::Token;

/// The kind of a variable, parameter or value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `str`
    Text,
    /// `num`
    Number,
    /// `bool`
    Boolean,
}

impl Kind {
    /// Maps a type keyword token to its kind.
    ///
    /// Returns `None` for `void` and every other token.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Str => Some(Self::Text),
            Token::Num => Some(Self::Number),
            Token::Bool => Some(Self::Boolean),
            _ => None,
        }
    }

    /// The keyword spelling the kind in scripts.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Text => "str",
            Self::Number => "num",
            Self::Boolean => "bool",
        }
    }
}

/// The declared return kind of a function.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    /// The function returns a value of the given kind.
    Value(Kind),
    /// `void`: the function returns nothing.
    Void,
}

impl ReturnKind {
    /// Maps a type keyword token, including `void`, to a return kind.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Void => Some(Self::Void),
            _ => match Kind::from_token(token) {
                Some(kind) => Some(Self::Value(kind)),
                None => None,
            },
        }
    }

    /// The keyword spelling the return kind in scripts.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Value(kind) => kind.keyword(),
            Self::Void => "void",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl std::fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
