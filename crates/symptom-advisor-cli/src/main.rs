//! Symptom Advisor - command-line front end
//!
//! Browse the symptom catalog, get advice for a set of symptoms, and record
//! whether the advice turned out to be accurate.

mod config;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use symptom_advisor_core::{AdvisorService, DiagnosticEngine, ServiceError, SubmissionForm};

use config::AdvisorConfig;

#[derive(Parser)]
#[command(name = "symptom-advisor")]
#[command(about = "Symptom Advisor - rule-based health advice", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the SQLite database (overrides config and environment)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable symptoms
    Symptoms {
        /// Fuzzy search by label or code
        #[arg(long)]
        search: Option<String>,

        /// Maximum search results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// List example symptom bundles
    Bundles,

    /// Show one example bundle
    Bundle {
        /// Bundle slug (e.g., "stomach-problems")
        slug: String,
    },

    /// Get advice for a set of symptoms
    Diagnose {
        /// Symptom code (repeatable)
        #[arg(short = 's', long = "symptom")]
        symptoms: Vec<String>,

        /// Free-text description of how you feel
        #[arg(short = 't', long = "text")]
        text: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Do not store the submission
        #[arg(long)]
        no_save: bool,

        /// Print the diagnosis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record whether advice was accurate
    Feedback {
        /// Submission ID printed by `diagnose`
        submission_id: String,

        #[arg(long, conflicts_with = "inaccurate", required_unless_present = "inaccurate")]
        accurate: bool,

        #[arg(long)]
        inaccurate: bool,

        #[arg(long)]
        comment: Option<String>,
    },

    /// Show past submissions, newest first
    History {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AdvisorConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.storage.database_path = db;
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.logging.level))?,
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.command, &config) {
        Err(e) => match e.downcast_ref::<ServiceError>() {
            Some(service_error) => {
                eprintln!("{}", service_error.user_message());
                std::process::exit(1);
            }
            None => Err(e),
        },
        ok => ok,
    }
}

fn run(command: Commands, config: &AdvisorConfig) -> Result<()> {
    match command {
        Commands::Symptoms { search, limit } => {
            let engine = DiagnosticEngine::default();
            let options = match search {
                Some(query) => engine.search_symptoms(&query, limit),
                None => engine.symptoms(),
            };
            print!("{}", output::render_symptoms(&options));
        }

        Commands::Bundles => {
            let engine = DiagnosticEngine::default();
            print!("{}", output::render_bundles(&engine.example_bundles()));
        }

        Commands::Bundle { slug } => {
            let bundle = DiagnosticEngine::default()
                .example_bundle(&slug)
                .ok_or_else(|| ServiceError::bundle_not_found(&slug))?;
            print!("{}", output::render_bundle(&bundle));
        }

        Commands::Diagnose {
            symptoms,
            text,
            name,
            age,
            gender,
            location,
            no_save,
            json,
        } => {
            let form = SubmissionForm {
                name: name.unwrap_or_default(),
                age: age.unwrap_or_default(),
                gender: gender.unwrap_or_default(),
                location: location.unwrap_or_default(),
                symptoms,
                symptoms_text: text.unwrap_or_default(),
            };

            let (diagnosis, submission_id) = if no_save {
                let validated = form.validate().map_err(ServiceError::from)?;
                let diagnosis = DiagnosticEngine::default().diagnose(
                    &validated.symptoms,
                    validated.symptoms_text.as_deref().unwrap_or(""),
                );
                (diagnosis, None)
            } else {
                let mut service = AdvisorService::open(&config.storage.database_path)?;
                let submission = service.submit(&form)?;
                (submission.diagnosis, Some(submission.id))
            };

            if json {
                println!("{}", diagnosis.to_json()?);
            } else {
                print!("{}", output::render_diagnosis(&diagnosis));
                if let Some(id) = submission_id {
                    println!();
                    println!("Submission ID: {}", id);
                    println!(
                        "Tell us if this was accurate: symptom-advisor feedback {} --accurate",
                        id
                    );
                }
            }
        }

        Commands::Feedback {
            submission_id,
            accurate,
            inaccurate: _,
            comment,
        } => {
            let mut service = AdvisorService::open(&config.storage.database_path)?;
            service.record_feedback(&submission_id, accurate, comment.as_deref())?;
            println!("Thank you for your feedback!");
        }

        Commands::History { json } => {
            let service = AdvisorService::open(&config.storage.database_path)?;
            let history = service.history()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else {
                print!("{}", output::render_history(&history));
            }
        }
    }

    Ok(())
}
