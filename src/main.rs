use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    sync::Once,
};

use clap::Parser;

use monkey_lexer::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    tokenize, tokenize_strict,
    trace::Tracer,
    Position, Scanner, Token,
};

/// Monkey token dumper.
///
/// Scans a Monkey source file and prints one token per line.
#[derive(Parser)]
#[command(
    name = "monkey-lex",
    version,
    about,
    long_about = "Monkey token dumper.\n\nScans a Monkey source file (or stdin) and prints one token per line.\n\nExamples:\n  monkey-lex main.monkey            Print every token\n  monkey-lex main.monkey --strict   Fail on the first illegal character\n  echo 'let x = 1;' | monkey-lex    Scan stdin"
)]
struct Cli {
    /// Input source file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Treat an illegal character as an error instead of a token.
    #[arg(long)]
    strict: bool,

    /// Print nested BEGIN/END trace lines around scanning.
    #[arg(long)]
    trace: bool,
}

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=monkey_lexer=debug` or `RUST_LOG=monkey_lexer=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let (source, file_name) = match read_source(cli.input.as_ref()) {
        Ok(read) => read,
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    };

    let tokens = if cli.strict {
        match tokenize_strict(source.as_str(), Some(file_name)) {
            Ok(tokens) => tokens,
            Err(error) => {
                eprint!("{}", display_error(&error, &source));
                process::exit(1);
            }
        }
    } else if cli.trace {
        let mut tracer = Tracer::new();
        let tokens = traced_tokenize(&source, &mut tracer);
        for line in tracer.lines() {
            eprintln!("{}", line);
        }
        tokens
    } else {
        tokenize(source.as_str())
    };

    for token in &tokens {
        println!("{}", token);
    }
}

fn read_source(input: Option<&PathBuf>) -> Result<(String, String), Error> {
    let unreadable = |path: String, error: io::Error| {
        Error::new(
            ErrorImpl::SourceUnreadable {
                path,
                reason: error.to_string(),
            },
            Position::null(),
        )
    };

    match input {
        Some(path) => {
            let display = path.display().to_string();
            let source = fs::read_to_string(path).map_err(|e| unreadable(display.clone(), e))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or(display);
            Ok((source, file_name))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| unreadable(String::from("<stdin>"), e))?;
            Ok((source, String::from("shell")))
        }
    }
}

fn traced_tokenize(source: &str, tracer: &mut Tracer) -> Vec<Token> {
    let msg = tracer.trace("tokenize");
    let mut scanner = Scanner::new(source);
    let mut tokens = vec![];

    loop {
        let scan = tracer.trace("next_token");
        let (start, token) = scanner.next_spanned();
        tracer.untrace(&format!("{} {} at {}", scan, token, start));

        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    tracer.untrace(msg);
    tokens
}
