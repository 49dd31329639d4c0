use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser as CliParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use arbor::config::ConfigError;
use arbor::{Config, Parser, analyze, lex, release, render};

#[derive(CliParser)]
#[command(name = "arbor", version)]
#[command(about = "Parse an Arbor source file and inspect its syntax tree")]
struct Cli {
    /// Input source file
    file: PathBuf,

    /// Write the rendered tree to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the rendered tree
    #[arg(short, long)]
    tree: bool,

    /// Print every binding as `name: type = value`
    #[arg(short, long)]
    bindings: bool,

    /// Configuration file (defaults to arbor.toml next to the input)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arbor=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = cli.file.display().to_string();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Read source file
    let source = match fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}: {}", file, e);
            process::exit(1);
        }
    };

    // Lex
    let tokens = match lex(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!(
                "error: lexical analysis failed\n{}",
                e.span().format_error_context(&source, Some(&file), &e.message)
            );
            process::exit(1);
        }
    };

    // Parse
    let ast = match Parser::parse_with_config(&tokens, &config.parser) {
        Ok(ast) => ast,
        Err(e) => {
            eprintln!("{}", e.format_with_source_and_file(&source, Some(&file)));
            process::exit(1);
        }
    };

    // Tree output
    if cli.tree || config.output.tree || cli.output.is_some() {
        let text = render(&ast);
        match &cli.output {
            Some(out_file) => {
                if let Err(e) = fs::write(out_file, &text) {
                    eprintln!("error: could not write to {}: {}", out_file.display(), e);
                    process::exit(1);
                }
            }
            None => print!("{}", text),
        }
    }

    // Binding analysis always runs; summaries are printed on request
    match analyze(&ast) {
        Ok(bindings) => {
            if cli.bindings || config.output.bindings {
                for binding in &bindings {
                    println!("{}", binding);
                }
            }
        }
        Err(e) => {
            eprintln!("error: {}: {}", file, e);
            process::exit(1);
        }
    }

    let released = release(ast);
    debug!(released, "released syntax tree");
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => {
            let dir = cli.file.parent().unwrap_or_else(|| Path::new("."));
            Config::discover(dir)
        }
    }
}
