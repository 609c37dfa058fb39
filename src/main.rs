use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vtag::config::{self, Config};
use vtag::domain::{self, select_latest, Version, VersionBump};
use vtag::ui;

#[derive(clap::Parser)]
#[command(
    name = "vtag",
    version,
    about = "Parse, compare and increment release version tags"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Check whether a tag matches the version grammar
    Check { tag: String },

    /// Print the components of a tag
    Parse { tag: String },

    /// Print whether GREATER >= LESSER
    Compare { greater: String, lesser: String },

    /// Print the next version tag
    Next {
        /// Current tag; read from stdin (one per line) when omitted
        tag: Option<String>,

        #[arg(long, help = "The change breaks the public contract")]
        breaking: bool,

        #[arg(long, help = "The change adds a backward-compatible feature")]
        feature: bool,

        #[arg(long, help = "Print without the leading 'v'")]
        plain: bool,
    },

    /// Print a tag without its leading 'v'
    Strip { tag: String },

    /// Print the greatest tag read from stdin (one per line)
    Latest {
        #[arg(long, help = "Ignore release candidates")]
        final_only: bool,

        #[arg(long, help = "Print without the leading 'v'")]
        plain: bool,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            ui::display_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = config::load_config(args.config.as_deref())?;

    match args.command {
        Command::Check { tag } => {
            if domain::matches_grammar(&tag) {
                ui::display_success(&format!("{} is a valid version tag", tag));
                Ok(ExitCode::SUCCESS)
            } else {
                ui::display_error(&format!("{} is not a valid version tag", tag));
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Parse { tag } => {
            let version = Version::parse(&tag)?;
            println!("{}", ui::format_version_details(&version));
            Ok(ExitCode::SUCCESS)
        }
        Command::Compare { greater, lesser } => {
            let result = domain::is_greater_or_equal_tag(&greater, &lesser)?;
            println!("{}", result);
            Ok(ExitCode::SUCCESS)
        }
        Command::Next {
            tag,
            breaking,
            feature,
            plain,
        } => next_version(&config, tag, breaking, feature, plain),
        Command::Strip { tag } => {
            println!("{}", domain::strip_leading_marker(&tag));
            Ok(ExitCode::SUCCESS)
        }
        Command::Latest { final_only, plain } => {
            let include_candidates = config.behavior.include_release_candidates && !final_only;
            let selection = select_latest(read_stdin_tags()?, include_candidates);
            for warning in &selection.warnings {
                ui::display_boundary_warning(warning);
            }

            match selection.latest {
                Some((_, version)) => {
                    println!("{}", ui::format_version(&version, plain || config.output.plain));
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::FAILURE),
            }
        }
    }
}

fn next_version(
    config: &Config,
    tag: Option<String>,
    breaking: bool,
    feature: bool,
    plain: bool,
) -> Result<ExitCode> {
    let current = match tag {
        Some(tag) => Some(Version::parse(&tag)?),
        None => {
            let selection = select_latest(
                read_stdin_tags()?,
                config.behavior.include_release_candidates,
            );
            for warning in &selection.warnings {
                ui::display_boundary_warning(warning);
            }
            selection.latest.map(|(_, version)| version)
        }
    };

    // No prior tag: start from the configured initial version
    let next = match current {
        Some(current) => current.increment(breaking, feature),
        None => config.behavior.initial_version()?,
    };

    let old = current.map(|v| {
        (
            v.to_tag(),
            VersionBump::for_change(v.major, breaking, feature),
        )
    });
    ui::display_proposed_tag(
        old.as_ref().map(|(tag, bump)| (tag.as_str(), *bump)),
        &next.to_tag(),
    );
    println!("{}", ui::format_version(&next, plain || config.output.plain));
    Ok(ExitCode::SUCCESS)
}

fn read_stdin_tags() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    let tags = stdin.lock().lines().collect::<io::Result<Vec<String>>>()?;
    Ok(tags)
}
