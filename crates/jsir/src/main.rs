//! jsir - compile JavaScript into the protobuf AST consumed by the fuzzer.
//!
//! Exit status: 0 success, 1 I/O failure, 2 usage error, 3 unreadable input,
//! 4 unsupported construct, 5 internal shape violation.

mod config;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use config::{InputFormat, JsirConfig};
use jsir_compiler::{CompileError, CompileOptions, Compiler, DecodeError};
use jsir_syntax::{ReadError, Reader, reader_for_extension, reader_for_language};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jsir", version)]
#[command(about = "Compile JavaScript into the protobuf AST consumed by the fuzzer")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); overrides JSIR_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a JavaScript or ESTree file into an encoded AST
    Compile(CompileArgs),

    /// Print an encoded AST as JSON
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct CompileArgs {
    /// Source file (.js, .mjs, .cjs) or Babel JSON export (.json)
    input: PathBuf,

    /// Where to write the encoded AST
    output: PathBuf,

    /// Input format (default: from config, else by extension)
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Deepest statement/expression nesting to accept
    #[arg(long)]
    max_depth: Option<usize>,

    /// Also print the compiled AST as JSON on stdout
    #[arg(long)]
    dump: bool,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Encoded AST file
    file: PathBuf,
}

/// The input format could not be decided.
#[derive(Debug, thiserror::Error)]
#[error("cannot tell the input format of {}; pass --format", .0.display())]
struct UnknownFormat(PathBuf);

/// Stack for the worker thread. Reading and compiling recurse once per
/// nesting level, and both limits must fit in an unoptimized build.
const WORKER_STACK_SIZE: usize = 64 << 20;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run_on_worker(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("JSIR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<UnknownFormat>().is_some() {
        return 2;
    }
    if err.downcast_ref::<ReadError>().is_some() || err.downcast_ref::<DecodeError>().is_some() {
        return 3;
    }
    if let Some(err) = err.downcast_ref::<CompileError>() {
        return if err.is_unsupported_input() { 4 } else { 5 };
    }
    1
}

fn run_on_worker(cli: Cli) -> Result<()> {
    let worker = std::thread::Builder::new()
        .name("jsir".into())
        .stack_size(WORKER_STACK_SIZE)
        .spawn(move || run(cli))
        .context("failed to start the worker thread")?;
    worker
        .join()
        .unwrap_or_else(|_| Err(anyhow::anyhow!("worker thread panicked")))
}

fn run(cli: Cli) -> Result<()> {
    let root = std::env::current_dir().context("failed to determine the working directory")?;
    let config = JsirConfig::load(&root);
    tracing::debug!(?config, "configuration");

    match cli.command {
        Command::Compile(args) => compile(args, &config),
        Command::Inspect(args) => inspect(args),
    }
}

fn select_reader(format: InputFormat, path: &Path) -> Result<&'static dyn Reader, UnknownFormat> {
    let reader = match format {
        InputFormat::Javascript => reader_for_language("javascript"),
        InputFormat::Estree => reader_for_language("estree"),
        InputFormat::Auto => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(reader_for_extension),
    };
    reader.ok_or_else(|| UnknownFormat(path.to_path_buf()))
}

fn compile(args: CompileArgs, config: &JsirConfig) -> Result<()> {
    let format = args.format.unwrap_or_else(|| config.format());
    let reader = select_reader(format, &args.input)?;

    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let program = reader
        .read(&source)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let options = CompileOptions {
        max_depth: args.max_depth.unwrap_or_else(|| config.max_depth()),
    };
    let ast = Compiler::new(options)
        .compile(&program)
        .with_context(|| format!("failed to compile {}", args.input.display()))?;

    if args.dump || config.dump() {
        println!("{}", jsir_compiler::to_json(&ast)?);
    }

    // Single write, only once everything above succeeded.
    let bytes = jsir_compiler::encode(&ast);
    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        reader = reader.language(),
        statements = ast.statements.len(),
        bytes = bytes.len(),
        "compiled"
    );
    Ok(())
}

fn inspect(args: InspectArgs) -> Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let ast = jsir_compiler::decode(&bytes)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;
    println!("{}", jsir_compiler::to_json(&ast)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_selection() {
        let js = select_reader(InputFormat::Auto, Path::new("a/b.mjs")).unwrap();
        assert_eq!(js.language(), "javascript");

        let estree = select_reader(InputFormat::Auto, Path::new("tree.json")).unwrap();
        assert_eq!(estree.language(), "estree");

        let forced = select_reader(InputFormat::Estree, Path::new("tree.txt")).unwrap();
        assert_eq!(forced.language(), "estree");

        assert!(select_reader(InputFormat::Auto, Path::new("notes.txt")).is_err());
        assert!(select_reader(InputFormat::Auto, Path::new("Makefile")).is_err());
    }

    #[test]
    fn test_exit_status_classes() {
        let usage = anyhow::Error::from(UnknownFormat(PathBuf::from("x")));
        assert_eq!(exit_status(&usage), 2);

        let parse = anyhow::Error::from(ReadError::Parse("syntax error at 1:1".into()))
            .context("failed to parse x.js");
        assert_eq!(exit_status(&parse), 3);

        let unsupported = anyhow::Error::from(CompileError::UnhandledNode {
            kind: "ClassDeclaration".into(),
        });
        assert_eq!(exit_status(&unsupported), 4);

        let shape = anyhow::Error::from(CompileError::Shape(jsir_compiler::ShapeViolation::new(
            "IfStatement",
            "test",
            "missing",
        )));
        assert_eq!(exit_status(&shape), 5);

        let io = anyhow::Error::from(std::io::Error::other("disk on fire"));
        assert_eq!(exit_status(&io), 1);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["jsir", "-vv", "compile", "in.js", "out.bin", "--dump"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Compile(args) => {
                assert!(args.dump);
                assert_eq!(args.format, None);
            }
            Command::Inspect(_) => panic!("expected compile"),
        }

        assert!(Cli::try_parse_from(["jsir", "compile", "in.js"]).is_err());
        assert!(Cli::try_parse_from(["jsir", "compile", "a", "b", "--format", "cobol"]).is_err());
    }
}
