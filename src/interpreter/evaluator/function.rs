use crate::{
    ast::{Expr, Expression},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Function},
        evaluator::core::{Context, ExecResult, Flow},
        lexer::Spanned,
        parser::core::{parse_call, parse_complete},
        source::LineCursor,
        value::{
            core::{Value, parse_bool},
            kind::{Kind, ReturnKind},
        },
    },
};

impl Context<'_> {
    /// Evaluates a call expression such as `add(1, 2)`.
    ///
    /// # Returns
    /// - `Some(value)`: The function ran; `value` is `Absent` for `void`
    ///   functions and for bodies that end without `return`.
    /// - `None`: The call could not be made. The reason has already been
    ///   reported.
    pub(crate) fn eval_call(&mut self, call: &Expression, env: &Environment) -> ExecResult<Option<Value>> {
        self.eval_call_tokens(&call.tokens, env, call.line)
    }

    /// Parses and evaluates a call from raw tokens.
    pub(crate) fn eval_call_tokens(&mut self,
                                   tokens: &[Spanned],
                                   env: &Environment,
                                   line: usize)
                                   -> ExecResult<Option<Value>> {
        match parse_call(tokens, line) {
            Ok((name, arguments)) => self.call_function(&name, &arguments, env, line),
            Err(e) => {
                self.report(e);
                Ok(None)
            },
        }
    }

    /// Looks up `name`, evaluates the arguments in the caller's environment
    /// and executes the function.
    ///
    /// An undefined function is reported and yields `None`.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                arguments: &[Expr],
                                env: &Environment,
                                line: usize)
                                -> ExecResult<Option<Value>> {
        let Some(function) = env.function(name) else {
            self.report(RuntimeError::UnknownFunction { name: name.to_string(),
                                                        line });
            return Ok(None);
        };

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_argument(argument, env, line)?);
        }

        self.execute_function(&function, args, env).map(Some)
    }

    /// Evaluates one call argument.
    ///
    /// Quoted text stays text and numeric literals stay numbers. A bare name
    /// is `true`/`false` in any letter case, or else a variable looked up in
    /// the text, number and boolean maps in that order, or else `Absent`.
    /// Any other expression is evaluated in numeric mode.
    fn eval_argument(&mut self, argument: &Expr, env: &Environment, line: usize) -> ExecResult<Value> {
        Ok(match argument {
            Expr::Text(text) => Value::Text(text.clone()),
            Expr::Number(n) => Value::Number(*n),
            Expr::Variable(name) => {
                if let Some(b) = parse_bool(name) {
                    Value::Boolean(b)
                } else if let Some(value) = env.lookup(name) {
                    value
                } else {
                    tracing::debug!(%name, line, "unresolved argument");
                    Value::Absent
                }
            },
            expr => Value::Number(self.eval_number(expr, env, line)?),
        })
    }

    /// Executes a user-defined function.
    ///
    /// The body runs against a copy of `env`. Arguments are bound to the
    /// parameters by position; extra arguments are ignored, and a missing
    /// argument or one whose kind differs from the parameter's leaves that
    /// parameter unbound.
    ///
    /// # Parameters
    /// - `function`: The function to execute.
    /// - `args`: Evaluated arguments, in call order.
    /// - `env`: The caller's environment, copied as the local scope.
    ///
    /// # Returns
    /// The value of the first `return` that runs, or `Absent` when the body
    /// ends without one.
    ///
    /// # Errors
    /// Returns a `FatalError` if the body contains an unterminated block or
    /// output cannot be written.
    pub fn execute_function(&mut self,
                            function: &Function,
                            args: Vec<Value>,
                            env: &Environment)
                            -> ExecResult<Value> {
        tracing::debug!(name = %function.name,
                        defined_on = function.line,
                        args = args.len(),
                        "call");

        let mut local = env.clone();
        for (param, value) in function.params.iter().zip(args) {
            if value.kind() == Some(param.kind) {
                local.bind(&param.name, value);
            } else {
                tracing::debug!(name = %function.name,
                                param = %param.name,
                                expected = %param.kind,
                                found = value.kind_name(),
                                "argument not bound");
            }
        }

        let mut cursor = LineCursor::new(&function.body);
        match self.execute_lines(&mut cursor, &mut local, Some(function))? {
            Flow::Return(value) => Ok(value),
            Flow::Continue => Ok(Value::Absent),
        }
    }

    /// Resolves the expression of a `return` according to the function's
    /// declared return kind.
    ///
    /// `void` functions and a bare `return;` produce `Absent`, as does an
    /// expression that cannot be read as the declared kind (after a
    /// diagnostic).
    pub(crate) fn resolve_return(&mut self,
                                 function: &Function,
                                 value: Option<&Expression>,
                                 env: &Environment)
                                 -> ExecResult<Value> {
        let (Some(value), ReturnKind::Value(kind)) = (value, function.return_kind) else {
            return Ok(Value::Absent);
        };
        let line = value.line;

        Ok(match kind {
            Kind::Text => Value::Text(self.eval_text(value, env)?),
            Kind::Number => match parse_complete(&value.tokens, line) {
                Ok(expr) => Value::Number(self.eval_number(&expr, env, line)?),
                Err(e) => {
                    self.report(e);
                    Value::Absent
                },
            },
            Kind::Boolean => match self.eval_boolean(value, env)? {
                Some(b) => Value::Boolean(b),
                None => {
                    self.report(RuntimeError::InvalidBoolean { name: function.name.clone(),
                                                               line });
                    Value::Absent
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::Param,
        interpreter::{
            environment::{Environment, Function},
            evaluator::core::Context,
            source::SourceLine,
            value::{
                core::Value,
                kind::{Kind, ReturnKind},
            },
        },
    };

    fn function(return_kind: ReturnKind, params: Vec<Param>, body: &[&str]) -> Function {
        Function { name: "f".to_string(),
                   return_kind,
                   params,
                   body: body.iter()
                             .enumerate()
                             .map(|(i, text)| SourceLine::new(i + 2, text))
                             .collect(),
                   line: 1 }
    }

    fn param(kind: Kind, name: &str) -> Param {
        Param { kind,
                name: name.to_string() }
    }

    #[test]
    fn arguments_bind_by_position_and_kind() {
        let f = function(ReturnKind::Value(Kind::Number),
                         vec![param(Kind::Number, "a"), param(Kind::Number, "b")],
                         &["return a + b;"]);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut context = Context::new(&mut out, &mut err);
        let env = Environment::new();

        let value = context.execute_function(&f, vec![Value::Number(2.0), Value::Text("3".to_string())], &env)
                           .unwrap();

        assert_eq!(value, Value::Number(2.0));
        drop(context);
        assert!(String::from_utf8(err).unwrap().contains("Undefined variable: b"));
    }

    #[test]
    fn body_without_return_is_absent() {
        let f = function(ReturnKind::Value(Kind::Text), Vec::new(), &["purr ~> \"side\";"]);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut context = Context::new(&mut out, &mut err);

        let value = context.execute_function(&f, Vec::new(), &Environment::new()).unwrap();

        assert_eq!(value, Value::Absent);
        drop(context);
        assert_eq!(out, b"side");
    }

    #[test]
    fn locals_do_not_leak_to_the_caller() {
        let f = function(ReturnKind::Void, Vec::new(), &["num x ~> 99;"]);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut context = Context::new(&mut out, &mut err);
        let mut env = Environment::new();
        env.bind("x", Value::Number(1.0));

        context.execute_function(&f, Vec::new(), &env).unwrap();

        assert_eq!(env.number.get("x"), Some(&1.0));
    }
}
