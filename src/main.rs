mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use formation_calendar_core::BusinessProfile;
use formation_calendar_core::config::CalendarConfig;
use formation_calendar_core::profile::parse_formation_date;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formation-calendar")]
#[command(about = "Tax and compliance deadlines for your new business, exportable to any calendar app")]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Profile fields that can be given on the command line.
/// They override the saved profile field by field.
#[derive(Args, Debug, Default)]
struct ProfileArgs {
    /// State the business was formed in (e.g., "Delaware")
    #[arg(long)]
    state: Option<String>,

    /// Date the formation was filed (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    formation_date: Option<NaiveDate>,

    /// Ignore the saved profile
    #[arg(long)]
    no_profile: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List compliance events grouped by month
    Events {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Export compliance events as an .ics file
    Export {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Directory to write the file to (defaults to output_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File name (defaults to filename from config)
        #[arg(long)]
        filename: Option<String>,

        /// Write the calendar to stdout instead of a file
        #[arg(long, conflicts_with_all = ["output", "open"])]
        stdout: bool,

        /// Open the exported file with the default calendar app
        #[arg(long)]
        open: bool,
    },
    /// Manage the saved business profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the saved profile
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update fields of the saved profile
    Set {
        #[arg(long)]
        state: Option<String>,

        /// Date the formation was filed (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        formation_date: Option<NaiveDate>,

        #[arg(long)]
        business_name: Option<String>,

        /// e.g. LLC, S-Corp, C-Corp
        #[arg(long)]
        entity_type: Option<String>,

        #[arg(long)]
        industry: Option<String>,
    },
    /// Fill in the profile interactively
    Init,
    /// Delete the saved profile
    Clear,
    /// Export the profile as business-data.json
    Export {
        /// Directory to write the file to (defaults to output_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CalendarConfig::load()?;

    match cli.command {
        Commands::Events { profile } => {
            let profile = resolve_profile(&config, &profile)?;
            commands::events::run(&profile)
        }
        Commands::Export {
            profile,
            output,
            filename,
            stdout,
            open,
        } => {
            let profile = resolve_profile(&config, &profile)?;
            let target = commands::export::Target {
                output,
                filename,
                stdout,
                open,
            };
            commands::export::run(&config, &profile, target)
        }
        Commands::Profile { command } => {
            let store = config.profile_store()?;
            match command {
                ProfileCommand::Show { json } => commands::profile::show(&store, json),
                ProfileCommand::Set {
                    state,
                    formation_date,
                    business_name,
                    entity_type,
                    industry,
                } => {
                    let updates = BusinessProfile {
                        business_name,
                        entity_type,
                        industry,
                        state,
                        formation_date,
                    };
                    commands::profile::set(&store, &updates)
                }
                ProfileCommand::Init => commands::profile::init(&store),
                ProfileCommand::Clear => commands::profile::clear(&store),
                ProfileCommand::Export { output } => {
                    commands::profile::export(&config, &store, output)
                }
            }
        }
    }
}

/// Logs go to stderr so `export --stdout` output stays a clean calendar.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_formation_date(s).map_err(|e| e.to_string())
}

/// Saved profile (unless --no-profile) with command-line fields on top.
fn resolve_profile(config: &CalendarConfig, args: &ProfileArgs) -> Result<BusinessProfile> {
    let saved = if args.no_profile {
        BusinessProfile::default()
    } else {
        config.profile_store()?.load_or_default()?
    };

    let overrides = BusinessProfile {
        state: args.state.clone(),
        formation_date: args.formation_date,
        ..Default::default()
    };

    let profile = saved.merged_with(&overrides);
    tracing::debug!(?profile, "Resolved business profile");
    Ok(profile)
}
