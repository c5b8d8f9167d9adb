use clap::Parser;

/// Raw command line arguments.
#[derive(Parser)]
#[command(about)]
pub struct Args {
    /// Validate every input as strict mode code
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Validate each input as a standalone expression instead of a program
    #[arg(long, default_value_t = false)]
    pub expression: bool,

    /// Never use colors in the output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Log validation events to stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// ESTree JSON files to validate
    #[arg(required = true)]
    pub files: Vec<String>,
}

/// Options passed to every validation.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Treat the root as strict mode code, as if it began with a "use strict" directive
    pub strict: bool,
}

impl Options {
    /// Create a new options struct from the command line arguments.
    pub fn new_from_args(args: &Args) -> Self {
        Self { strict: args.strict }
    }
}

impl Default for Options {
    /// Create a new options struct with default values.
    fn default() -> Self {
        Self { strict: false }
    }
}
