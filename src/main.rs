use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use asplex::{metadata, AspLexer, Token};

#[derive(Parser)]
#[command(name = "asplex")]
#[command(author, version, about = "A syntax-highlighting tokenizer for ASP logic programs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize an ASP source file and dump the token stream
    Tokenize {
        /// The source file to tokenize
        input: PathBuf,

        /// Dump tokens as pretty-printed JSON
        #[arg(long)]
        json: bool,

        /// Dump the raw per-rule stream (no coalescing, no label filter)
        #[arg(long)]
        raw: bool,
    },

    /// Report whether a file is plausibly an ASP program
    Sniff {
        /// The file to inspect
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Tokenize { input, json, raw } => tokenize(input, json, raw),
        Commands::Sniff { input } => sniff(input),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn tokenize(input: PathBuf, json: bool, raw: bool) -> Result<()> {
    log::debug!("Tokenizing {:?}", input);
    let source = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read source file: {:?}", input))?;

    let lexer = AspLexer::new();
    let tokens: Vec<Token> = if raw {
        lexer.tokens(&source).collect()
    } else {
        lexer.tokenize(&source)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        println!("{}", "=== Tokens ===".blue().bold());
        for (i, token) in tokens.iter().enumerate() {
            println!("{:4}: {}", i, token);
        }
    }

    Ok(())
}

fn sniff(input: PathBuf) -> Result<()> {
    let source =
        fs::read_to_string(&input).with_context(|| format!("Failed to read file: {:?}", input))?;

    let by_name = metadata::matches_filename(&input);
    let by_content = metadata::analyse_text(&source);

    if by_name || by_content {
        println!(
            "{}: {:?} looks like an ASP program (filename: {}, rule arrow: {})",
            "match".green().bold(),
            input,
            by_name,
            by_content
        );
    } else {
        println!(
            "{}: {:?} does not look like an ASP program",
            "no match".yellow().bold(),
            input
        );
    }

    Ok(())
}
