use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use pancake::{Error, QueuedInput, Session, StdinInput, ast, tokenize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// pancake runs `.pnc` scripts, or starts an interactive prompt when no
/// script is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run. Without it, pancake reads statements line by line
    /// from an interactive prompt.
    script: Option<PathBuf>,

    /// Prints the tokens of each unit before it runs.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the statement tree of each unit before it runs.
    #[arg(short, long)]
    ast: bool,

    /// Queues a value for an `in` statement. May be repeated; once the queue
    /// is empty, input is read from standard input.
    #[arg(short, long = "input", value_name = "VALUE")]
    inputs: Vec<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let mut session = Session::new();
    if !args.inputs.is_empty() {
        info!(count = args.inputs.len(), "queued input values");
        let queue = QueuedInput::new(args.inputs.iter().cloned()).with_fallback(StdinInput);
        session.interpreter_mut().set_input(Box::new(queue));
    }

    match args.script.as_deref() {
        Some(path) => run_file(&mut session, path, &args),
        None => {
            run_console(&mut session, &args);
            ExitCode::SUCCESS
        },
    }
}

fn run_file(session: &mut Session, path: &Path, args: &Args) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the script '{}': {e}", path.display());
            return ExitCode::FAILURE;
        },
    };
    debug!(path = %path.display(), bytes = source.len(), "running script");

    match run_unit(session, &source, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run_console(session: &mut Session, args: &Args) {
    println!("Pancake {} on {}", env!("CARGO_PKG_VERSION"), std::env::consts::OS);
    println!("Type \"help;\" for information");

    let stdin = io::stdin();
    loop {
        print!("pan -> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        match line.trim() {
            "exit;" => break,
            "help;" => {
                println!("This is Pancake {} - Type code or use commands like 'exit;'.",
                         env!("CARGO_PKG_VERSION"));
            },
            _ => {
                if let Err(e) = run_unit(session, &line, args) {
                    eprintln!("{e}");
                }
            },
        }
    }
}

/// Scans, parses and executes one unit, printing the tokens and the tree
/// first when asked to.
fn run_unit(session: &mut Session, source: &str, args: &Args) -> Result<(), Error> {
    let tokens = tokenize(source);
    if args.tokens {
        println!("=== Tokens ===");
        for token in &tokens {
            println!("{token}");
        }
    }

    let statements = session.parse(&tokens)?;
    if args.ast {
        println!("=== AST ===");
        print!("{}", ast::dump(&statements));
    }

    session.execute(&statements)?;
    Ok(())
}
