use std::fmt;
use std::rc::Rc;

use crate::ast::Expr;
use crate::environment::Environment;

/// A function value: parameter, body, and the environment that was active
/// when the lambda expression was evaluated.
#[derive(Debug, Clone)]
pub struct Closure {
    pub param: String,
    pub body: Rc<Expr>,
    pub env: Environment,
}

#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Closure(Closure),
}

impl Value {
    /// Runtime type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Closure(_) => "Fn",
        }
    }
}

impl PartialEq for Value {
    /// Closures compare by identity: same body node captured in the same
    /// environment instance.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,

            (Value::Bool(a), Value::Bool(b)) => a == b,

            (Value::Closure(a), Value::Closure(b)) => {
                a.param == b.param && Rc::ptr_eq(&a.body, &b.body) && a.env.same_chain(&b.env)
            }

            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),

            Value::Bool(b) => write!(f, "{}", b),

            Value::Closure(closure) => write!(f, "<closure \\{}>", closure.param),
        }
    }
}
