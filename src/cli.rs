use clap::Parser;

/// Find out what those flags mean, straight from the man page.
///
/// Looks up the manual page for a command and prints only the sections that
/// document the flags you ask about, e.g. `manly ls -la` or `manly grep
/// --invert-match`.
#[derive(Parser, Debug)]
#[command(name = "manly")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Suppress colored output (useful when piping)
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Command whose manual page to search
    pub command: Option<String>,

    /// Flags to look up; concatenated short flags are split (-la -> -l -a)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub flags: Vec<String>,
}
