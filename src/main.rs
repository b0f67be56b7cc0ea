//! Kase CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick a case and print its directory (default command)
//! kase
//! kase query --prompt kernel
//!
//! # Jump into a case from the shell
//! eval "$(kase shell)"
//! jk
//!
//! # Create a case
//! kase init --name "[01234567] Server does not boot"
//!
//! # Import cases from a Salesforce report export
//! kase import report.csv
//! ```
//!
//! # Configuration
//!
//! Read from the user's config directory (`~/.config/kase/config.toml` on
//! Linux) when present. `KASE_DIR` overrides the configured case directory.

use colored::Colorize;
use kase::{
    KaseError,
    cases::CaseRepo,
    cli::{Cli, Commands},
    commands,
    config::KaseConfig,
    importer::SalesforceCsv,
    logging,
    ui::{DialoguerInput, RatatuiPicker},
};
use std::io;

type Result<T> = std::result::Result<T, KaseError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = KaseConfig::load()?;

    if let Some(log_path) = config.log_path()
        && let Err(e) = logging::init(&log_path)
    {
        eprintln!("{} {e}", "Warning:".yellow().bold());
    }

    match cli.get_command() {
        Commands::Query { case_dir, prompt } => {
            let repo = CaseRepo::new(&config.case_dir(case_dir.as_deref()));
            let picker = RatatuiPicker::new().with_debounce(config.debounce());
            if let Some(case) = commands::query(&repo, &picker, &prompt)? {
                println!("{}", case.path.display());
            }
        }
        Commands::Init {
            case_dir,
            name,
            lp,
            description,
        } => {
            let repo = CaseRepo::new(&config.case_dir(case_dir.as_deref()));
            let case = commands::init(&repo, &DialoguerInput::new(), name, lp, description)?;
            println!(
                "{} [{}] {} in {}",
                "Created".green().bold(),
                case.id,
                case.title,
                case.path.display()
            );
        }
        Commands::Import {
            csv,
            case_dir,
            prompt,
        } => {
            let repo = CaseRepo::new(&config.case_dir(case_dir.as_deref()));
            let export = SalesforceCsv::new(csv, repo.case_dir());
            let picker = RatatuiPicker::new()
                .with_title("Select cases to import")
                .with_debounce(config.debounce());
            let written = commands::import(&export, &repo, &picker, &prompt)?;
            println!("{} {written} case(s)", "Imported".green().bold());
        }
        Commands::Shell => commands::shell(&mut io::stdout().lock())?,
        Commands::Config => print!("{}", config.to_toml()?),
    }
    Ok(())
}
