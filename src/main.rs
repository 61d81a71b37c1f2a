use std::{
    fs,
    io::{self, Read},
    process,
};

use clap::{ArgAction, Parser};
use tinyl::{eval, parse};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// tinyl runs small imperative programs that read and write integers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tinyl to treat `contents` as a path to a program file.
    #[arg(short, long)]
    file: bool,

    /// Input integers, separated by commas. May be given more than once.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    input: Vec<i64>,

    /// Also read whitespace-separated input integers from stdin, after any
    /// given with `--input`.
    #[arg(short, long)]
    stdin: bool,

    /// Prints the parsed program to stderr before running it.
    #[arg(short, long)]
    dump_ast: bool,

    /// Raises the log level: -v for info, -vv for debug, -vvv for trace.
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
}

fn read_stdin_input() -> Result<Vec<i64>, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)
               .map_err(|e| format!("Failed to read stdin: {e}"))?;

    buffer.split_whitespace()
          .map(|word| {
              word.parse::<i64>()
                  .map_err(|_| format!("Invalid input value '{word}' on stdin"))
          })
          .collect()
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            fail(format!("Failed to read the program file '{}'. Perhaps this file does not exist?",
                         &args.contents))
        })
    } else {
        args.contents
    };

    let mut input = args.input;
    if args.stdin {
        input.extend(read_stdin_input().unwrap_or_else(|e| fail(e)));
    }
    debug!(inputs = input.len(), "collected input");

    let program = parse(&script).unwrap_or_else(|e| fail(e));
    if args.dump_ast {
        eprintln!("{program}");
    }

    match eval(&program, input) {
        Ok(output) => {
            if output.is_empty() {
                info!("program wrote no output");
            }
            for value in output {
                println!("{value}");
            }
        },
        Err(e) => fail(e),
    }
}
