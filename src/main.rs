use clap::{Parser, ValueEnum};
use evensplit::application::engine::SettlementEngine;
use evensplit::domain::ports::StateStoreBox;
use evensplit::domain::state::Action;
use evensplit::infrastructure::in_memory::InMemoryStateStore;
use evensplit::interfaces::csv::participant_reader::ParticipantReader;
use evensplit::interfaces::csv::transfer_writer::TransferWriter;
use evensplit::interfaces::report::json::SnapshotWriter;
use evensplit::interfaces::report::summary::SummaryWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Human-readable summary
    Text,
    /// Transfers as `from,to,amount` rows
    Csv,
    /// Full snapshot as JSON
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input participants CSV file with `name,amount` columns
    input: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store: StateStoreBox = Box::new(InMemoryStateStore::new());
    let engine = SettlementEngine::new(store);
    engine.dispatch(Action::Start).await.into_diagnostic()?;

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = ParticipantReader::new(file);
    let mut added = 0usize;
    for (row, record) in reader.participants().enumerate() {
        match record {
            Ok(record) if record.name.trim().is_empty() => {
                warn!(row = row + 1, "Skipping participant without a name");
            }
            Ok(record) => {
                engine
                    .dispatch(Action::AddParticipant {
                        name: record.name,
                        amount: record.amount,
                    })
                    .await
                    .into_diagnostic()?;
                added += 1;
            }
            Err(e) => {
                warn!(row = row + 1, error = %e, "Error reading participant");
            }
        }
    }

    let snapshot = engine.into_snapshot().await.into_diagnostic()?;
    info!(
        participants = added,
        transfers = snapshot.transfers.len(),
        total = %snapshot.total,
        "Settlement computed"
    );

    let stdout = io::stdout();
    match cli.format {
        Format::Text => SummaryWriter::new(stdout.lock())
            .write_summary(&snapshot)
            .into_diagnostic()?,
        Format::Csv => TransferWriter::new(stdout.lock())
            .write_transfers(&snapshot.transfers)
            .into_diagnostic()?,
        Format::Json => SnapshotWriter::new(stdout.lock())
            .write_snapshot(&snapshot)
            .into_diagnostic()?,
    }

    Ok(())
}
