use serde::Serialize;
use std::mem;
use std::rc::Rc;

/// **Abstract‑Syntax‑Tree node** for every expression form of the language.
///
/// Nodes own their children; the tree is finite and acyclic by construction.
/// A lambda body is held behind an `Rc` so closures created from it can
/// refer to the body without copying the subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// Integer literal: `42`
    Number(i64),

    /// Boolean literal: `true` or `false`
    Bool(bool),

    /// Variable reference: `x`
    Var(String),

    /// Single‑argument function: `\param -> body`
    Lambda { param: String, body: Rc<Expr> },

    /// Function application: `func arg`
    Apply { func: Box<Expr>, arg: Box<Expr> },

    /// Non‑recursive local binding: `let name = bound in body`
    LetIn {
        name: String,
        bound: Box<Expr>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn var<S: Into<String>>(name: S) -> Self {
        Expr::Var(name.into())
    }

    pub fn lambda<S: Into<String>>(param: S, body: Expr) -> Self {
        Expr::Lambda {
            param: param.into(),
            body: Rc::new(body),
        }
    }

    pub fn apply(func: Expr, arg: Expr) -> Self {
        Expr::Apply {
            func: Box::new(func),
            arg: Box::new(arg),
        }
    }

    pub fn let_in<S: Into<String>>(name: S, bound: Expr, body: Expr) -> Self {
        Expr::LetIn {
            name: name.into(),
            bound: Box::new(bound),
            body: Box::new(body),
        }
    }

    /// Nesting depth of the tree (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        let mut deepest: usize = 0;
        let mut pending: Vec<(&Expr, usize)> = vec![(self, 1)];

        while let Some((expr, level)) = pending.pop() {
            deepest = deepest.max(level);

            match expr {
                Expr::Number(_) | Expr::Bool(_) | Expr::Var(_) => {}

                Expr::Lambda { body, .. } => pending.push((&**body, level + 1)),

                Expr::Apply { func, arg } => {
                    pending.push((&**func, level + 1));
                    pending.push((&**arg, level + 1));
                }

                Expr::LetIn { bound, body, .. } => {
                    pending.push((&**bound, level + 1));
                    pending.push((&**body, level + 1));
                }
            }
        }

        deepest
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Expr::Number(_) | Expr::Bool(_) | Expr::Var(_))
    }

    /// Move every non‑leaf child into `out`, leaving leaves in its place.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        let mut take = |child: &mut Expr| {
            if !child.is_leaf() {
                out.push(mem::replace(child, Expr::Bool(false)));
            }
        };

        match self {
            Expr::Number(_) | Expr::Bool(_) | Expr::Var(_) => {}

            // A body still shared with a live closure is left to that closure.
            Expr::Lambda { body, .. } => {
                if let Some(inner) = Rc::get_mut(body) {
                    take(inner);
                }
            }

            Expr::Apply { func, arg } => {
                take(&mut **func);
                take(&mut **arg);
            }

            Expr::LetIn { bound, body, .. } => {
                take(&mut **bound);
                take(&mut **body);
            }
        }
    }
}

impl Drop for Expr {
    // Flatten the tree onto a worklist so a deep chain (e.g. `f 1 1 1 ...`)
    // is freed without one stack frame per level.
    fn drop(&mut self) {
        let mut pending: Vec<Expr> = Vec::new();

        self.detach_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}
