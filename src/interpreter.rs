use std::rc::Rc;

use log::{debug, info};

use crate::ast::Expr;
use crate::environment::Environment;
use crate::error::{LangError, Result};
use crate::value::{Closure, Value};

/// Evaluates expressions against a fixed root environment.
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    /// Creates an interpreter whose root environment is empty.
    pub fn new() -> Self {
        info!("Initializing Interpreter");

        Self {
            environment: Environment::new(),
        }
    }

    /// Creates an interpreter that resolves free variables against `environment`.
    pub fn with_environment(environment: Environment) -> Self {
        info!(
            "Initializing Interpreter with {} root binding(s)",
            environment.len()
        );

        Self { environment }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Evaluates an expression and returns a Value.
    pub fn evaluate(&self, expr: &Expr) -> Result<Value> {
        info!("Evaluating expression of depth {}", expr.depth());

        let value = evaluate(expr, &self.environment)?;

        info!("Evaluation completed successfully: {}", value);

        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Call‑by‑value evaluation of `expr` under `env`.
///
/// Recursion depth equals the depth of the tree; the environment is only ever
/// extended, never mutated.
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<Value> {
    debug!("Evaluating expression: {:?}", expr);

    let value = match expr {
        Expr::Number(n) => Value::Int(*n),

        Expr::Bool(b) => Value::Bool(*b),

        Expr::Var(name) => evaluate_variable(name, env)?,

        Expr::Lambda { param, body } => {
            debug!("Capturing closure over {} binding(s)", env.len());

            Value::Closure(Closure {
                param: param.clone(),
                body: Rc::clone(body),
                env: env.clone(),
            })
        }

        Expr::Apply { func, arg } => {
            debug!("Evaluating function application");

            let callee = evaluate(func, env)?;
            let argument = evaluate(arg, env)?;

            debug!("Evaluated argument => {}", argument);

            apply_closure(callee, argument)?
        }

        Expr::LetIn { name, bound, body } => {
            debug!("Binding '{}'", name);

            // `bound` runs in the outer environment: `name` is not yet visible.
            let bound_value = evaluate(bound, env)?;

            debug!("'{}' bound to {}", name, bound_value);

            evaluate(body, &env.extend(name, bound_value))?
        }
    };

    debug!("Expression evaluated to: {}", value);

    Ok(value)
}

/// Looks up a variable, newest binding first.
fn evaluate_variable(name: &str, env: &Environment) -> Result<Value> {
    debug!("Looking up variable '{}'", name);

    let value = env
        .get(name)
        .cloned()
        .ok_or_else(|| LangError::unbound_variable(name))?;

    debug!("Variable '{}' evaluated to: {}", name, value);

    Ok(value)
}

/// Applies a closure to an already evaluated argument.
fn apply_closure(callee: Value, argument: Value) -> Result<Value> {
    match callee {
        Value::Closure(closure) => {
            debug!("Binding parameter '{}' to {}", closure.param, argument);

            // Extend the *captured* environment, not the caller's.
            let call_env = closure.env.extend(&closure.param, argument);

            evaluate(&closure.body, &call_env)
        }

        other => {
            debug!("Error: cannot apply {}", other);

            Err(LangError::ApplyNonFunction {
                type_name: other.type_name(),
                value: other.to_string(),
            })
        }
    }
}
