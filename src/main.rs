use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use manly::{
    cli::Cli,
    flags::expand_flags,
    logging::init_logging,
    man::{ManError, ManRunner},
    matcher::matching_sections,
    output::{page_title, render_report},
    style::Emphasis,
};

/// Exit status when a command is given without any flags to look up.
const EXIT_NO_FLAGS: u8 = 2;

/// Exit status when the command has no manual page; mirrors man(1)'s own
/// "not found" status.
const EXIT_NO_MANPAGE: u8 = 16;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    if cli.flags.is_empty() {
        println!("Please supply flags. Type `manly --help` for help.");
        return Ok(ExitCode::from(EXIT_NO_FLAGS));
    }

    let flags = expand_flags(&cli.flags);
    log::debug!("Expanded flags: {:?}", flags);

    let page = match ManRunner::new()?.load_page(&command) {
        Ok(page) => page,
        Err(err @ ManError::PageNotFound { .. }) => {
            log::debug!("{err}");
            return Ok(ExitCode::from(EXIT_NO_MANPAGE));
        }
        Err(err) => return Err(err.into()),
    };

    let emphasis = Emphasis::for_output(cli.no_color);
    let sections = matching_sections(&page, &flags, emphasis);

    // Pages without a NAME section fall back to the command name as title.
    let title = page_title(&page).unwrap_or_else(|| command.clone());

    print!(
        "{}",
        render_report(&command, &flags, &title, &sections, emphasis)
    );

    Ok(ExitCode::SUCCESS)
}
