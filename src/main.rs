use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use commandline::{GeneratorOptions, Operation, Options};
use error::{describe_error, PositionalError};
use lexer::tokens::Token;

mod commandline;
mod cursor;
mod error;
mod il;
mod lexer;
mod listing;
mod source_map;
mod span;
mod validator;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(options.quiet)
        .verbosity(usize::from(options.verbose) + 1)
        .init()?;

    match options.operation {
        Operation::Lex { file } => {
            let (_, tokens) = read_tokens(&file)?;
            for token in tokens {
                println!("{:?}\t{:?}\t{}", token.source, token.kind, token.text);
            }
        }
        Operation::Check { file } => {
            let (source, tokens) = read_tokens(&file)?;
            check(&source, &tokens)?;
            println!("{}: program is syntactically correct", file);
        }
        Operation::Generate { file, generator } => generate(&file, &generator)?,
    }

    Ok(())
}

fn generate(file: &str, options: &GeneratorOptions) -> Result<()> {
    let (source, tokens) = read_tokens(file)?;
    if options.validate() {
        check(&source, &tokens)?;
    } else if !validator::is_well_formed(&tokens) {
        warn!("{} has syntax errors, the generated code may be malformed", file);
    }

    let program = il::generate(&tokens).map_err(|err| report(&err, &source))?;
    info!("Generated {} instructions for {}", program.len(), file);

    match &options.output {
        Some(path) => fs::write(path, program.to_string())
            .with_context(|| format!("Could not write to '{}'", path))?,
        None => print!("{}", program),
    }
    Ok(())
}

/// Reads and lexes a source file. Every lexer error is reported before failing.
fn read_tokens(file: &str) -> Result<(String, Vec<Token>)> {
    let source =
        fs::read_to_string(file).with_context(|| format!("Could not read '{}'", file))?;

    match lexer::lex(&source) {
        Ok(tokens) => Ok((source, tokens)),
        Err(errors) => {
            for err in errors.iter() {
                eprintln!("{}", describe_error(err, &source));
            }
            bail!("Lexing failed with {} error(s)", errors.len())
        }
    }
}

fn check(source: &str, tokens: &[Token]) -> Result<()> {
    validator::validate(tokens).map_err(|err| report(&err, source))
}

/// Prints a positional error underneath its source line, and converts it into
/// an [`anyhow::Error`] for the caller to propagate.
fn report<E>(err: &E, source: &str) -> anyhow::Error
where
    E: PositionalError + std::fmt::Display,
{
    eprintln!("{}", describe_error(err, source));
    anyhow::anyhow!("{}", err)
}
