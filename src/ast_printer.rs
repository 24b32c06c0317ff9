use crate::ast::Expr;

/// Converts an expression to a fully parenthesised prefix form:
/// `(lambda x body)`, `(apply f a)`, `(let x bound body)`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(expr: &Expr) -> String {
        match expr {
            // ── literals ────────────────────────────────────────────────
            Expr::Number(n) => {
                let mut buf: itoa::Buffer = itoa::Buffer::new();
                buf.format(*n).to_owned()
            }

            Expr::Bool(true) => "true".into(),

            Expr::Bool(false) => "false".into(),

            // ── names ───────────────────────────────────────────────────
            Expr::Var(name) => name.clone(),

            // ── functions ───────────────────────────────────────────────
            Expr::Lambda { param, body } => format!("(lambda {} {})", param, Self::print(body)),

            Expr::Apply { .. } => Self::print_application(expr),

            // ── bindings ────────────────────────────────────────────────
            Expr::LetIn { name, bound, body } => format!(
                "(let {} {} {})",
                name,
                Self::print(bound),
                Self::print(body)
            ),
        }
    }

    /// Prints a left‑nested chain `((f a) b) c` by walking its spine with a
    /// loop; only the arguments recurse.
    fn print_application(expr: &Expr) -> String {
        let mut args: Vec<&Expr> = Vec::new();
        let mut head: &Expr = expr;

        while let Expr::Apply { func, arg } = head {
            args.push(&**arg);
            head = &**func;
        }

        let mut out = "(apply ".repeat(args.len());
        out.push_str(&Self::print(head));

        for arg in args.iter().rev() {
            out.push(' ');
            out.push_str(&Self::print(arg));
            out.push(')');
        }

        out
    }
}
