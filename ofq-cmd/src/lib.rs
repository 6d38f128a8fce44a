//! Command implementations for the ocean float query CLI.
//!
//! Provides subcommands for running free-text queries against the
//! synthesis pipeline and for inspecting the named-region table.

use clap::Subcommand;

pub mod hint_client;
pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// Run a free-text ocean data query and emit synthesized profiles
    Query {
        /// Query text, e.g. "show me temperature data in bay of bengal"
        text: String,

        /// Inline JSON hint overriding text extraction (same schema as
        /// the remote hint service reply)
        #[arg(long)]
        hint: Option<String>,

        /// Ask the configured remote hint service to interpret the text
        #[arg(long)]
        remote_hint: bool,

        /// Output path; stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Output format: json or csv
        #[arg(long, default_value = "json")]
        format: String,

        /// Seed for reproducible synthesis
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the named regions and their bounding boxes
    Regions,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query {
            text,
            hint,
            remote_hint,
            output,
            format,
            seed,
        } => {
            query::run_query(
                &text,
                hint.as_deref(),
                remote_hint,
                output.as_deref(),
                &format,
                seed,
            )
            .await
        }
        Command::Regions => query::run_regions(),
    }
}
