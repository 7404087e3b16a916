use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(about = "A three-address code generator for SimpleScript")]
pub struct Options {
    #[clap(subcommand)]
    pub operation: Operation,
    /// Increase logging verbosity (may be repeated)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Silence all logging
    #[clap(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print the token stream of a program
    Lex { file: String },
    /// Check a program for syntax errors
    Check { file: String },
    /// Generate three-address code for a program
    Generate {
        file: String,
        #[clap(flatten)]
        generator: GeneratorOptions,
    },
}

#[derive(Debug, Args)]
pub struct GeneratorOptions {
    #[clap(long)]
    /// Generate code even if the program has syntax errors
    no_validate: bool,
    #[clap(short, long)]
    /// Write the generated code to a file instead of standard output
    pub output: Option<String>,
}

impl GeneratorOptions {
    pub fn validate(&self) -> bool {
        !self.no_validate
    }
}
