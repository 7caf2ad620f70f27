use std::fs;

use clap::Parser;
use loosetype::get_result;
use tracing_subscriber::EnvFilter;

/// loosetype evaluates expressions over loosely typed values, coercing
/// operands the way JavaScript does.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells loosetype to read expressions from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last expression.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Log filter used when `RUST_LOG` is not set, e.g. `debug` or
    /// `loosetype=trace`.
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    contents: String,
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over the flag.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(true)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() {
    let args = Args::parse();

    init_tracing(&args.log_level);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
