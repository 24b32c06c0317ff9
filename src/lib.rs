pub mod ast;
pub mod ast_printer;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod keywords;
pub mod parser;
pub mod scanner;
pub mod source;
pub mod token;
pub mod value;

pub use error::{LangError, Result};
pub use interpreter::evaluate;
pub use parser::parse;
pub use scanner::tokenize;

/// Lex, parse and evaluate `source` against the empty environment.
pub fn run(source: &str) -> Result<value::Value> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;

    interpreter::Interpreter::new().evaluate(&expr)
}
