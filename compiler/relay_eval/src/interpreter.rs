//! The dispatch loop.
//!
//! The interpreter walks a flat token sequence with an instruction
//! pointer. Statements advance the pointer by the number of tokens they
//! cover; control-flow constructs are cut out with [`BlockParser`] and
//! their bodies run in a nested frame over a fresh child scope.

mod builder;

use relay_lexer::Token;
use relay_parse::{split_arguments, split_for_clauses, BlockParser, ForClauses};
use smallvec::SmallVec;

use crate::condition;
use crate::environment::{Environment, ScopeId};
use crate::errors::{EvalError, EvalResult};
use crate::functions::FunctionRegistry;
use crate::stack::ensure_sufficient_stack;
use crate::value::{type_name_of, Value};

pub use builder::InterpreterBuilder;

/// How a frame finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Ran off the end of its tokens.
    Normal,
    /// Hit `break`; enclosing frames unwind up to the nearest loop.
    Break,
}

/// Runs token sequences against an [`Environment`] and a set of host
/// functions.
pub struct Interpreter<'r, 'f> {
    env: Environment,
    functions: &'r mut FunctionRegistry<'f>,
    loop_limit: Option<u64>,
}

impl<'r, 'f> Interpreter<'r, 'f> {
    /// An interpreter with an empty environment and no loop limit.
    pub fn new(functions: &'r mut FunctionRegistry<'f>) -> Self {
        InterpreterBuilder::new(functions).build()
    }

    /// Bind a host variable in the root scope before the script runs.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.env.register(ScopeId::ROOT, name, Some(value.into()));
    }

    /// Current value of a root-scope variable.
    pub fn read(&self, name: &str) -> Option<Value> {
        self.env.read(ScopeId::ROOT, name)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }

    /// Run `tokens` in the root scope.
    ///
    /// Definitions made at the top level stay visible afterwards through
    /// [`Interpreter::read`]. A top-level `break` ends the script early.
    pub fn execute(&mut self, tokens: &[Token]) -> EvalResult {
        if self.run(tokens, ScopeId::ROOT)? == Flow::Break {
            tracing::debug!("script stopped by top-level break");
        }
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len(), scope = ?scope))]
    fn run(&mut self, tokens: &[Token], scope: ScopeId) -> EvalResult<Flow> {
        let tokens = self.declare_variables(tokens, scope)?;
        let parser = BlockParser::new(&tokens);
        let mut ip = 0;

        while let Some(token) = tokens.get(ip) {
            ip += match token {
                Token::Function(name) => {
                    self.call(name, &[])?;
                    1
                }
                Token::FunctionWithArguments(name) => {
                    self.call_with_arguments(&parser, ip, name, scope)?
                }
                Token::If => {
                    let block = parser.if_block(ip)?;
                    let branch = if condition::evaluate(block.condition, &self.env, scope)? {
                        Some(block.body)
                    } else {
                        block.alternate
                    };
                    if let Some(body) = branch {
                        if self.run_in_child(body, scope)? == Flow::Break {
                            return Ok(Flow::Break);
                        }
                    }
                    block.consumed
                }
                Token::While => {
                    let block = parser.while_block(ip)?;
                    self.while_loop(block.condition, block.body, scope)?;
                    block.consumed
                }
                Token::For => {
                    let block = parser.for_block(ip)?;
                    let clauses = split_for_clauses(block.condition)?;
                    let header = self.env.push_scope(scope);
                    let result = self.for_loop(clauses, block.body, header);
                    self.env.pop_scope(header);
                    result?;
                    block.consumed
                }
                Token::BlockOpen => {
                    let block = parser.anonymous_block(ip)?;
                    if self.run_in_child(block.body, scope)? == Flow::Break {
                        return Ok(Flow::Break);
                    }
                    block.consumed
                }
                Token::Variable(name) => self.variable_statement(&tokens, ip, name, scope)?,
                Token::Break => return Ok(Flow::Break),
                Token::IntLiteral(_)
                | Token::FloatLiteral(_)
                | Token::StringLiteral(_)
                | Token::BoolLiteral(_)
                | Token::BracketOpen
                | Token::BracketClose
                | Token::BlockClose
                | Token::Comma
                | Token::Semicolon
                | Token::Else
                | Token::Return
                | Token::VariableDefinition(_)
                | Token::Assign
                | Token::Equal
                | Token::Less
                | Token::Greater
                | Token::And
                | Token::Or
                | Token::Increment
                | Token::Decrement => 1,
            };
        }

        Ok(Flow::Normal)
    }

    /// Run `body` in a new child scope of `parent`, discarding the scope
    /// afterwards whether or not the body failed.
    fn run_in_child(&mut self, body: &[Token], parent: ScopeId) -> EvalResult<Flow> {
        let child = self.env.push_scope(parent);
        let result = ensure_sufficient_stack(|| self.run(body, child));
        self.env.pop_scope(child);
        result
    }

    /// Register every top-level `var`/`let` name in `scope` as unset and
    /// drop the definition markers, so `var x = 1` runs as `x = 1`.
    ///
    /// Definitions nested in brackets or braces belong to the frame that
    /// will run that region.
    fn declare_variables(&mut self, tokens: &[Token], scope: ScopeId) -> EvalResult<Vec<Token>> {
        let mut kept = Vec::with_capacity(tokens.len());
        let mut depth = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            match token {
                Token::VariableDefinition(keyword) if depth == 0 => {
                    let Some(Token::Variable(name)) = tokens.get(i + 1) else {
                        return Err(EvalError::InvalidDefinition {
                            keyword: keyword.clone(),
                        });
                    };
                    self.env.register(scope, name.as_str(), None);
                    continue;
                }
                Token::BracketOpen | Token::BlockOpen => depth += 1,
                Token::BracketClose | Token::BlockClose => depth = depth.saturating_sub(1),
                _ => {}
            }
            kept.push(token.clone());
        }

        Ok(kept)
    }

    fn while_loop(&mut self, test: &[Token], body: &[Token], scope: ScopeId) -> EvalResult {
        let mut iterations = 0;
        while condition::evaluate(test, &self.env, scope)? {
            self.count_iteration(&mut iterations)?;
            if self.run_in_child(body, scope)? == Flow::Break {
                break;
            }
        }
        tracing::debug!(iterations, "while loop finished");
        Ok(())
    }

    /// `init` and `step` run in `header`; each pass of the body gets its
    /// own child of `header`.
    fn for_loop(&mut self, clauses: ForClauses<'_>, body: &[Token], header: ScopeId) -> EvalResult {
        self.run(clauses.init, header)?;

        let mut iterations = 0;
        while condition::evaluate(clauses.test, &self.env, header)? {
            self.count_iteration(&mut iterations)?;
            if self.run_in_child(body, header)? == Flow::Break {
                break;
            }
            self.run(clauses.step, header)?;
        }
        tracing::debug!(iterations, "for loop finished");
        Ok(())
    }

    fn count_iteration(&self, iterations: &mut u64) -> EvalResult {
        *iterations += 1;
        match self.loop_limit {
            Some(limit) if *iterations > limit => Err(EvalError::LoopLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    /// `name = rhs`, `name++`, `name--`, or a bare name (no-op).
    ///
    /// Returns the number of tokens the statement covers.
    fn variable_statement(
        &mut self,
        tokens: &[Token],
        ip: usize,
        name: &str,
        scope: ScopeId,
    ) -> EvalResult<usize> {
        match tokens.get(ip + 1) {
            Some(Token::Assign) => {
                let value = self.assigned_value(name, tokens.get(ip + 2), scope)?;
                self.env.update(scope, name, value)?;
                Ok(3)
            }
            Some(Token::Increment) => {
                self.step(name, scope, 1, "increment")?;
                Ok(2)
            }
            Some(Token::Decrement) => {
                self.step(name, scope, -1, "decrement")?;
                Ok(2)
            }
            _ => Ok(1),
        }
    }

    fn assigned_value(
        &self,
        name: &str,
        rhs: Option<&Token>,
        scope: ScopeId,
    ) -> EvalResult<Option<Value>> {
        let invalid = |found: String| EvalError::InvalidAssignment {
            name: name.to_owned(),
            found,
        };
        match rhs {
            Some(Token::Variable(source)) => self
                .env
                .binding(scope, source)
                .cloned()
                .ok_or_else(|| invalid(format!("undefined variable `{source}`"))),
            Some(token) => Value::from_literal(token)
                .map(Some)
                .ok_or_else(|| invalid(format!("`{token}`"))),
            None => Err(invalid("end of input".to_owned())),
        }
    }

    fn step(&mut self, name: &str, scope: ScopeId, delta: i64, operation: &'static str) -> EvalResult {
        let current = self
            .env
            .binding(scope, name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_owned(),
            })?;
        let next = match current {
            Some(Value::Int(n)) => n
                .checked_add(delta)
                .ok_or_else(|| EvalError::IntegerOverflow {
                    name: name.to_owned(),
                })?,
            other => {
                return Err(EvalError::NotAnInteger {
                    name: name.to_owned(),
                    operation,
                    found: type_name_of(other.as_ref()),
                })
            }
        };
        self.env.update(scope, name, Some(Value::Int(next)))
    }

    /// `name(arg, ...)` starting at the call token. Returns the number of
    /// tokens covered through the closing `)`.
    fn call_with_arguments(
        &mut self,
        parser: &BlockParser<'_>,
        ip: usize,
        name: &str,
        scope: ScopeId,
    ) -> EvalResult<usize> {
        let region = parser.bracket_region(ip + 1)?;
        let mut args: SmallVec<[Value; 4]> = SmallVec::new();

        for piece in split_arguments(region.inner) {
            let [token] = piece else {
                return Err(EvalError::InvalidArgument {
                    function: name.to_owned(),
                    found: describe_piece(piece),
                });
            };
            args.push(self.argument(name, token, scope)?);
        }

        self.call(name, &args)?;
        Ok(1 + region.consumed)
    }

    fn argument(&self, function: &str, token: &Token, scope: ScopeId) -> EvalResult<Value> {
        if let Some(value) = Value::from_literal(token) {
            return Ok(value);
        }
        match token {
            Token::Variable(name) => match self.env.binding(scope, name) {
                Some(Some(value)) => Ok(value.clone()),
                Some(None) => Err(EvalError::UninitializedVariable { name: name.clone() }),
                None => Err(EvalError::UndefinedVariable { name: name.clone() }),
            },
            other => Err(EvalError::InvalidArgument {
                function: function.to_owned(),
                found: format!("`{other}`"),
            }),
        }
    }

    fn call(&mut self, name: &str, args: &[Value]) -> EvalResult {
        tracing::debug!(function = name, args = args.len(), "calling host function");
        self.functions.call(name, args)
    }
}

fn describe_piece(piece: &[Token]) -> String {
    if piece.is_empty() {
        return "an empty argument".to_owned();
    }
    let text: Vec<String> = piece.iter().map(ToString::to_string).collect();
    format!("`{}`", text.join(" "))
}
