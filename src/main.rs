//! Teeny CLI - translate Teeny programs to Python

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};

use teeny::errors::print_error;
use teeny::{FileSink, Lexer, Python, Sink, Target, TranslateOptions, Translator, WriterSink};

#[derive(Parser, Debug)]
#[command(name = "teeny", version, about = "Teeny to Python translator")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a source file
    Compile {
        /// Teeny source file
        file: PathBuf,

        /// Output file. Defaults to <stem>.py
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the generated code to stdout instead of a file
        #[arg(long, default_value_t = false, conflicts_with = "output")]
        stdout: bool,

        /// Spaces per indentation level
        #[arg(long, default_value_t = 4)]
        indent: usize,
    },
    /// Translate without writing any output
    Check {
        /// Teeny source file
        file: PathBuf,
    },
    /// Dump the token stream
    Tokens {
        /// Teeny source file
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            None
        }
    }
}

fn default_output(input: &Path, target: &dyn Target) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    PathBuf::from(format!("{}.{}", stem, target.file_extension()))
}

fn compile(file: &Path, output: Option<PathBuf>, stdout: bool, indent: usize) -> ExitCode {
    let Some(source) = read_source(file) else {
        return ExitCode::FAILURE;
    };
    let filename = file.display().to_string();
    let options = TranslateOptions::new().with_indent_width(indent);

    let mut translator = match Translator::new(&source, &options) {
        Ok(t) => t,
        Err(e) => {
            print_error(&source, &filename, &e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = translator.program() {
        print_error(&source, &filename, &e);
        return ExitCode::FAILURE;
    }
    for (name, kind) in translator.registry().names() {
        debug!("declared {:?} '{}'", kind, name);
    }

    if stdout {
        let mut sink = WriterSink::new(io::stdout().lock());
        return match translator.commit(&mut sink) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error writing to stdout: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let output = output.unwrap_or_else(|| default_output(file, translator.target()));
    let size = translator.emitter().header().len() + translator.emitter().body().len();
    let mut sink = FileSink::new(&output);
    debug!("writing {} bytes to {}", size, sink.path().display());

    match translator.commit(&mut sink) {
        Ok(()) => {
            println!("Generated: {} ({} bytes)", output.display(), size);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing '{}': {}", output.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn check(file: &Path) -> ExitCode {
    let Some(source) = read_source(file) else {
        return ExitCode::FAILURE;
    };

    // Translate into a throwaway buffer.
    let mut discard = String::new();
    match teeny::translate_into(&source, &TranslateOptions::default(), &mut discard) {
        Ok(()) => {
            info!("{} bytes of {} generated", discard.len(), Python.language_name());
            println!("OK: {}", file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&source, &file.display().to_string(), &e);
            ExitCode::FAILURE
        }
    }
}

fn tokens(file: &Path) -> ExitCode {
    let Some(source) = read_source(file) else {
        return ExitCode::FAILURE;
    };

    match Lexer::new(&source).tokenize() {
        Ok(tokens) => {
            let mut listing = String::new();
            for token in &tokens {
                listing.push_str(&format!(
                    "{:>5}..{:<5} {:<16} {:?}\n",
                    token.span.start,
                    token.span.end,
                    token.kind.to_string(),
                    token.text
                ));
            }
            let mut sink = WriterSink::new(io::stdout().lock());
            if let Err(e) = sink.commit(&listing) {
                eprintln!("Error writing to stdout: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&source, &file.display().to_string(), &e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Compile {
            file,
            output,
            stdout,
            indent,
        } => compile(&file, output, stdout, indent),
        Command::Check { file } => check(&file),
        Command::Tokens { file } => tokens(&file),
    }
}
