use super::options::Args;

/// Diagnostics are written to stderr, so only stderr support matters. Colors are used when the
/// flags allow it and the terminal has at least basic color support.
pub fn stderr_should_use_colors(args: &Args) -> bool {
    if args.no_color {
        return false;
    }

    supports_color::on_cached(supports_color::Stream::Stderr)
        .map_or(false, |support| support.has_basic)
}

pub const RESET: &str = "\x1b[0m";

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const DEFAULT_COLOR: &str = "\x1b[39m";
