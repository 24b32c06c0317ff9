use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use lambda_let::ast_printer::AstPrinter;
use lambda_let::interpreter::Interpreter;
use lambda_let::parser::Parser;
use lambda_let::scanner::{tokenize, Scanner};
use lambda_let::source::read_source;
use lambda_let::LangError;

#[derive(ClapParser, Debug)]
#[command(version, about = "Interpreter for a small functional expression language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file (or stdin), printing each token
    Tokenize { filename: Option<PathBuf> },

    /// Parses input as a single expression and prints its AST
    Parse {
        filename: Option<PathBuf>,

        /// Print the AST as JSON instead of prefix form
        #[arg(long)]
        json: bool,
    },

    /// Evaluates input as a single expression and prints the result
    Evaluate { filename: Option<PathBuf> },
}

fn init_logger() -> Result<()> {
    // Create or open the log file
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    Builder::new()
        .format(|buf, record| {
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("lambda_let::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .parse_default_env() // RUST_LOG overrides the default
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

/// Reports `e` on stderr and exits with its status code.
fn fail(stage: &str, e: LangError) -> ! {
    debug!("{} debug: {}", stage, e);
    eprintln!("{}", e);

    std::process::exit(e.exit_code());
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    if args.log {
        init_logger()?;
    } else {
        // Initialize a minimal logger to avoid "no logger" errors
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    match args.commands {
        Commands::Tokenize { filename } => {
            info!("Running Tokenize subcommand");
            let source = read_source(filename.as_deref()).unwrap_or_else(|e| fail("Read", e));
            let mut first_error: Option<LangError> = None;

            for token in Scanner::new(&source) {
                match token {
                    Ok(token) => {
                        debug!("Scanned token: {}", token);
                        println!("{}", token);
                    }

                    Err(e) => {
                        debug!("Tokenization debug: {}", e);
                        eprintln!("{}", e);
                        first_error.get_or_insert(e);
                    }
                }
            }

            if let Some(e) = first_error {
                debug!("Tokenization failed, exiting with code {}", e.exit_code());
                std::process::exit(e.exit_code());
            }

            info!("Tokenization completed successfully");
        }

        Commands::Parse { filename, json } => {
            info!("Running Parse subcommand");
            let source = read_source(filename.as_deref()).unwrap_or_else(|e| fail("Read", e));
            let tokens = tokenize(&source).unwrap_or_else(|e| fail("Tokenize", e));

            match Parser::new(&tokens).parse() {
                Ok(expr) => {
                    info!("Expression parsed successfully");

                    if json {
                        let rendered =
                            serde_json::to_string_pretty(&expr).context("Failed to encode AST")?;
                        println!("{}", rendered);
                    } else {
                        let ast_str = AstPrinter::print(&expr);
                        debug!("AST: {}", ast_str);
                        println!("{}", ast_str);
                    }
                }

                Err(e) => fail("Parse", e),
            }

            info!("Parse subcommand completed");
        }

        Commands::Evaluate { filename } => {
            info!("Running Evaluate subcommand");
            let source = read_source(filename.as_deref()).unwrap_or_else(|e| fail("Read", e));
            let tokens = tokenize(&source).unwrap_or_else(|e| fail("Tokenize", e));
            let expr = Parser::new(&tokens)
                .parse()
                .unwrap_or_else(|e| fail("Parse", e));

            match Interpreter::new().evaluate(&expr) {
                Ok(value) => {
                    debug!("Evaluated to: {}", value);
                    println!("{}", value);
                }

                Err(e) => fail("Evaluation", e),
            }

            info!("Evaluate subcommand completed");
        }
    }

    Ok(())
}
