//! SafeSpeak command-line front end
//!
//! Stands in for the report and feedback forms: classifies text, builds the
//! tracking view for a stored report, and checks feedback before submission.

mod cli;

use clap::{Parser, Subcommand};
use cli::{config::ConfigAction, reference::ReferenceAction, track::TrackSource};
use safespeak_core::{
    error::Result, FeedbackCategory, FeedbackFilter, FeedbackGate, FeedbackStatus,
    ProgressEstimator, SafespeakConfig, TextClassifier,
};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(name = "safespeak")]
#[command(about = "Feedback classification and report tracking for SafeSpeak", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "SAFESPEAK_CONFIG")]
    config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the type of a feedback message
    Classify {
        /// Feedback text
        text: String,
    },

    /// Suggest a crime category from a report description
    Suggest {
        /// Report description
        text: String,
    },

    /// Show status, progress and history for a report
    Track {
        /// JSON file with the stored report record
        #[arg(long, conflicts_with_all = ["status", "id"])]
        record: Option<PathBuf>,

        /// Report ID (inline record)
        #[arg(long, default_value = "RPT-UNKNOWN")]
        id: String,

        /// Raw status token from the store (inline record)
        #[arg(long)]
        status: Option<String>,

        /// Creation time, RFC 3339 or YYYY-MM-DD (inline record)
        #[arg(long)]
        created_at: Option<String>,

        /// Crime category (inline record)
        #[arg(long)]
        category: Option<String>,

        /// Evaluate as of this time instead of now
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Dashboard counters for a JSON array of report records
    Summary {
        /// JSON file with an array of report records
        file: PathBuf,
    },

    /// Check whether feedback would be accepted
    Feedback {
        /// Feedback message
        message: String,

        /// Report ID the feedback refers to
        #[arg(short, long)]
        reference: Option<String>,
    },

    /// List or open feedback items awaiting staff review
    Review {
        /// JSON file with an array of feedback records
        file: PathBuf,

        /// Text to look for in description, feedback ID or report ID
        #[arg(short, long)]
        search: Option<String>,

        /// Only this feedback type (investigation, admin, resolution, other)
        #[arg(long = "type")]
        category: Option<FeedbackCategory>,

        /// Only this review status (unread, read, flagged, resolved)
        #[arg(long)]
        status: Option<FeedbackStatus>,

        /// Open one item by ID, marking it read
        #[arg(long, conflicts_with_all = ["search", "category", "status"])]
        open: Option<String>,
    },

    /// Generate or validate report IDs
    Reference {
        #[command(subcommand)]
        action: ReferenceAction,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!(
        "safespeak={level},safespeak_core={level}",
        level = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("SafeSpeak v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = SafespeakConfig::load(cli.config.as_deref())?;
    let classifier = TextClassifier::new(config.classifier.clone());
    let estimator = ProgressEstimator::new(config.progress.clone());

    match cli.command {
        Commands::Classify { text } => cli::classify::handle_classify(&classifier, &text, cli.json),
        Commands::Suggest { text } => cli::classify::handle_suggest(&classifier, &text, cli.json),
        Commands::Track {
            record,
            id,
            status,
            created_at,
            category,
            as_of,
        } => {
            let source = match &record {
                Some(path) => TrackSource::File(path),
                None => TrackSource::Inline {
                    id: &id,
                    status: status.as_deref().unwrap_or(""),
                    created_at: created_at.as_deref(),
                    category: category.as_deref(),
                },
            };
            cli::track::handle_track(&estimator, source, as_of.as_deref(), cli.json)
        }
        Commands::Summary { file } => cli::track::handle_summary(&file, cli.json),
        Commands::Feedback { message, reference } => {
            let gate = FeedbackGate::new(classifier, config.reference.clone());
            cli::feedback::handle(&gate, &message, reference.as_deref(), cli.json)
        }
        Commands::Review {
            file,
            search,
            category,
            status,
            open,
        } => {
            let filter = FeedbackFilter {
                query: search,
                category,
                status,
            };
            cli::review::handle(&file, &filter, open.as_deref(), cli.json)
        }
        Commands::Reference { action } => cli::reference::handle(&config.reference, action),
        Commands::Config { action } => cli::config::handle(&config, action),
    }
}
