use std::io::{self, Write};

use tracing::{debug, trace};

use crate::{
    ast::{ElifBranch, Expr, Position, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes statements in order.
    ///
    /// Execution stops at the first failing statement. Effects of the
    /// statements before it, such as new bindings and printed lines, are
    /// kept.
    ///
    /// # Errors
    /// Returns the `RuntimeError` of the first statement that fails.
    pub fn execute(&mut self, statements: &[Statement]) -> EvalResult<()> {
        debug!(count = statements.len(), "executing statements");
        statements.iter()
                  .try_for_each(|statement| self.execute_statement(statement))
    }

    /// Executes a single statement.
    ///
    /// - A declaration binds a new name; the name must not be bound yet.
    /// - An assignment overwrites an existing binding with a value of any
    ///   kind.
    /// - `out` writes the textual forms of its expressions, concatenated,
    ///   followed by one newline.
    /// - `in` binds the next value of the input source, bound or not.
    /// - `if` runs the first branch whose condition holds, or the `else`
    ///   block. An `elif` whose condition is not boolean is passed over.
    /// - An expression statement is evaluated for its errors only.
    ///
    /// # Errors
    /// Returns a `RuntimeError` on redeclaration, use of an unbound name, a
    /// non-boolean condition, an I/O failure, or any expression error.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::VariableDeclaration { name, value, pos, .. } => {
                if self.environment.contains(name) {
                    return Err(RuntimeError::Redeclaration { name:   name.clone(),
                                                             line:   pos.line,
                                                             column: pos.column, });
                }

                let value = self.eval(value)?;
                trace!(%name, %value, "define");
                self.environment.bind(name, value);
                Ok(())
            },
            Statement::Assignment { name, value, pos } => {
                if !self.environment.contains(name) {
                    return Err(RuntimeError::UnknownVariable { name:   name.clone(),
                                                               line:   pos.line,
                                                               column: pos.column, });
                }

                let value = self.eval(value)?;
                trace!(%name, %value, "assign");
                self.environment.bind(name, value);
                Ok(())
            },
            Statement::Out { outputs, pos } => self.execute_out(outputs, *pos),
            Statement::In { name, pos } => self.execute_in(name, *pos),
            Statement::If { condition,
                            then_block,
                            elif_branches,
                            else_block,
                            .. } => {
                self.execute_if(condition, then_block, elif_branches, else_block.as_deref())
            },
            Statement::Expression { expr, .. } => self.eval(expr).map(drop),
        }
    }

    fn execute_out(&mut self, outputs: &[Expr], pos: Position) -> EvalResult<()> {
        let mut line = String::new();
        for expr in outputs {
            line.push_str(&self.eval(expr)?.to_string());
        }
        line.push('\n');

        let failed = |e: io::Error| RuntimeError::OutputFailed { details: e.to_string(),
                                                                      line:    pos.line,
                                                                      column:  pos.column, };
        self.output.write_all(line.as_bytes()).map_err(failed)?;
        self.output.flush().map_err(failed)
    }

    fn execute_in(&mut self, name: &str, pos: Position) -> EvalResult<()> {
        let unavailable = |details: String| RuntimeError::InputUnavailable { name: name.to_string(),
                                                                             details,
                                                                             line: pos.line,
                                                                             column: pos.column };

        let value = self.input
                        .read_value(self.environment.get(name))
                        .map_err(|e| unavailable(e.to_string()))?
                        .ok_or_else(|| unavailable("no more input".to_string()))?;

        trace!(%name, %value, "input");
        self.environment.bind(name, value);
        Ok(())
    }

    fn execute_if(&mut self,
                  condition: &Expr,
                  then_block: &[Statement],
                  elif_branches: &[ElifBranch],
                  else_block: Option<&[Statement]>)
                  -> EvalResult<()> {
        if self.eval_condition(condition)? {
            return self.execute(then_block);
        }

        for branch in elif_branches {
            match self.eval(&branch.condition)? {
                Value::Bool(true) => return self.execute(&branch.block),
                Value::Bool(false) => {},
                other => trace!(kind = %other.kind(), "skipping non-boolean elif"),
            }
        }

        match else_block {
            Some(block) => self.execute(block),
            None => Ok(()),
        }
    }

    /// Evaluates the condition of an `if`, which must be boolean.
    fn eval_condition(&self, condition: &Expr) -> EvalResult<bool> {
        match self.eval(condition)? {
            Value::Bool(b) => Ok(b),
            other => {
                let pos = condition.position();
                Err(RuntimeError::ConditionNotBoolean { found:  other.kind(),
                                                        line:   pos.line,
                                                        column: pos.column, })
            },
        }
    }
}
