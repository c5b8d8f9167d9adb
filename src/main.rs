use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::error::Error;

use estree_validator::{
    common::{
        error::{ErrorFormatter, FormatOptions},
        options::{Args, Options},
        terminal::stderr_should_use_colors,
    },
    estree::{self, format_localized_validation_errors, LocalizedValidationError, Value},
};

/// Log to stderr. Verbose runs log every collected error, RUST_LOG overrides both defaults.
fn init_logging(args: &Args) {
    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_tree(file_path: &str) -> Result<Value, Box<dyn Error>> {
    let contents = std::fs::read_to_string(file_path)
        .map_err(|err| format!("Error reading {}: {}", file_path, err))?;
    let tree = Value::from_json_str(&contents)
        .map_err(|err| format!("Error parsing {}: {}", file_path, err))?;

    Ok(tree)
}

/// Validate a single file, returning the errors to report. Empty if the tree is valid.
fn validate_file(
    file_path: &str,
    tree: &Value,
    args: &Args,
    options: &Options,
) -> Vec<LocalizedValidationError> {
    let is_valid = if args.expression {
        estree::is_valid_expression_with_options(tree, options)
    } else {
        estree::is_valid_with_options(tree, options)
    };

    if is_valid {
        return vec![];
    }

    let errors = estree::errors_with_options(tree, options);
    if errors.is_empty() {
        // The tree is well formed but has the wrong kind of root
        let expected = if args.expression { "an expression" } else { "a Program" };
        return vec![LocalizedValidationError {
            file_path: file_path.to_owned(),
            line_col: None,
            message: format!("{}: root must be {}", tree.describe(), expected),
            snippet: tree.describe(),
        }];
    }

    errors
        .iter()
        .map(|error| LocalizedValidationError::new(file_path, error))
        .collect()
}

fn main_impl() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args);

    let options = Options::new_from_args(&args);
    let use_color = stderr_should_use_colors(&args);

    let mut all_errors = vec![];
    for file_path in &args.files {
        let tree = read_tree(file_path)?;
        all_errors.extend(validate_file(file_path, &tree, &args, &options));
    }

    if all_errors.is_empty() {
        return Ok(());
    }

    let message = if use_color {
        let format_options = FormatOptions::new(use_color);
        all_errors
            .iter()
            .map(|error| ErrorFormatter::new_for_validation_error(error, &format_options).build())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        format_localized_validation_errors(&all_errors)
    };

    Err(message.into())
}

/// Wrapper to pretty print errors
fn main() -> () {
    match main_impl() {
        Ok(_) => (),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
