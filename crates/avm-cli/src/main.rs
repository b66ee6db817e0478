//! Abstract VM - CLI
//!
//! Runs an assembly program from a file, or from standard input until a
//! `;;` line.
//!
//! Usage: `avm [FILE] [--max-stack N]`

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use avm_core::{InstructionSource, StackMachine, TextSource, VmConfig};

#[derive(Parser, Debug)]
#[command(name = "avm")]
#[command(about = "Run a typed stack-machine assembly program")]
struct Args {
    /// Program file; reads standard input when omitted
    path: Option<PathBuf>,

    /// Maximum operand stack depth
    #[arg(long = "max-stack")]
    max_stack: Option<usize>,
}

/// Logs go to stderr so they never mix with program output.
///
/// Use `RUST_LOG` to override the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    let source: Box<dyn InstructionSource> = match &args.path {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(TextSource::new(BufReader::new(file))),
            Err(e) => {
                eprintln!("Error: failed to read {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Box::new(TextSource::interactive(io::stdin().lock())),
    };
    debug!(path = ?args.path, "program source opened");

    let config = VmConfig {
        max_stack_size: args.max_stack,
    };
    let mut vm = StackMachine::new(config, source);

    let status = vm.run(&mut io::stdout().lock(), &mut io::stderr().lock());
    if !status.is_success() {
        debug!(depth = vm.stack().size(), "program failed");
    }
    process::exit(status.code());
}
