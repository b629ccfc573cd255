use std::fs;

use clap::Parser;
use tdcalc::{
    Options,
    interpreter::options::{DEFAULT_MAX_CALL_DEPTH, FrameMode},
    run_with,
};

/// tdcalc evaluates arithmetic expressions with variables and user-defined
/// functions, printing the value of every statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tdcalc to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Give every function call its own parameter frame instead of sharing a
    /// single one.
    #[arg(long)]
    nested_frames: bool,

    /// Reject calls with the wrong number of arguments.
    #[arg(long)]
    strict_arity: bool,

    /// Make `tan` behave like `cos`, for compatibility with old scripts.
    #[arg(long)]
    legacy_tan: bool,

    /// Maximum depth of nested user-defined function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    contents: String,
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let frame_mode = if args.nested_frames {
        FrameMode::Nested
    } else {
        FrameMode::Shared
    };
    let options = Options::default().with_frame_mode(frame_mode)
                                    .with_strict_arity(args.strict_arity)
                                    .with_legacy_tan(args.legacy_tan)
                                    .with_max_call_depth(args.max_call_depth);

    println!("{}", run_with(&script, &options));
}
