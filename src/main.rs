use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;

use version_bump::config::{self, Config, MalformedPolicy};
use version_bump::orchestration::{self, BumpMode, BumpRequest};
use version_bump::{ui, validate};

#[derive(Parser)]
#[command(
    name = "version-bump",
    version,
    about = "Compute the next semantic version from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Infer the next version from commit messages and apply it
    Bump {
        #[arg(
            long = "type",
            value_enum,
            default_value = "auto",
            help = "Version bump type (auto = detect from commits)"
        )]
        mode: Mode,

        #[arg(long, help = "Manually specify the exact next version (e.g. 1.4.0)")]
        manual: Option<String>,

        #[arg(long, help = "Preview what would happen without making changes")]
        dry_run: bool,

        #[arg(long, help = "Skip malformed commit messages instead of aborting")]
        skip_malformed: bool,

        #[arg(long, help = "Path to the VERSION file")]
        version_file: Option<String>,

        #[arg(long, help = "Path to the CHANGELOG.md file")]
        changelog_file: Option<String>,

        #[arg(help = "Commit messages or PR titles; read from stdin when omitted")]
        messages: Vec<String>,
    },
    /// Validate commit messages against the conventional format
    Check {
        #[arg(help = "Messages to validate; read from stdin when omitted")]
        messages: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Auto,
    Major,
    Minor,
    Patch,
}

impl From<Mode> for BumpMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Auto => BumpMode::Auto,
            Mode::Major => BumpMode::Major,
            Mode::Minor => BumpMode::Minor,
            Mode::Patch => BumpMode::Patch,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Bump {
            mode,
            manual,
            dry_run,
            skip_malformed,
            version_file,
            changelog_file,
            messages,
        } => run_bump_command(
            config,
            mode,
            manual,
            dry_run,
            skip_malformed,
            version_file,
            changelog_file,
            messages,
        ),
        Command::Check { messages } => run_check_command(&config, messages),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_bump_command(
    mut config: Config,
    mode: Mode,
    manual: Option<String>,
    dry_run: bool,
    skip_malformed: bool,
    version_file: Option<String>,
    changelog_file: Option<String>,
    messages: Vec<String>,
) -> Result<()> {
    if let Some(path) = version_file {
        config.files.version_file = path;
    }
    if let Some(path) = changelog_file {
        config.files.changelog_file = path;
    }

    let messages = if messages.is_empty() {
        read_stdin_messages()?
    } else {
        messages
    };

    if !messages.is_empty() {
        ui::display_commit_analysis(&messages);
    }

    let request = BumpRequest {
        mode: mode.into(),
        manual,
        messages,
        dry_run,
        malformed_policy: skip_malformed.then_some(MalformedPolicy::Skip),
        today: Local::now().date_naive(),
    };

    let outcome = match orchestration::run_bump(&request, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &outcome.warnings {
        ui::display_warning(warning);
    }

    ui::display_bump_summary(&outcome.previous, &outcome.next, outcome.decision.label());

    if outcome.changed {
        if dry_run {
            ui::display_status("Dry run - no changes made");
        } else {
            ui::display_success(&format!(
                "Updated {} to {}",
                config.files.version_file, outcome.next
            ));
        }
    }

    // CI contract: stdout carries only the resulting version
    println!("{}", outcome.next);
    Ok(())
}

fn run_check_command(config: &Config, messages: Vec<String>) -> Result<()> {
    let messages = if messages.is_empty() {
        read_stdin_messages()?
    } else {
        messages
    };

    if messages.is_empty() {
        ui::display_success("No messages to validate");
        return Ok(());
    }

    ui::display_status(&format!("Validating {} message(s)...", messages.len()));

    let report = validate::validate_all(&messages, &config.validation);
    ui::display_validation_report(&report);

    if report.all_valid() {
        ui::display_success("All messages follow the Conventional Commits standard");
        Ok(())
    } else {
        ui::display_error(&format!(
            "{} invalid message(s) found",
            report.invalid_count()
        ));
        ui::display_conventional_help();
        std::process::exit(1);
    }
}

/// Read newline-separated messages from stdin, dropping blank lines.
fn read_stdin_messages() -> Result<Vec<String>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    Ok(input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
