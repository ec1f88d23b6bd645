//! Command-line interface for clinic-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Provision collections and seed the default dataset into SurrealDB
//! clinic-seed \
//!   --surreal-endpoint ws://localhost:8000 \
//!   --namespace clinic --database demo
//!
//! # Regenerate from scratch with custom counts and a fixed seed
//! clinic-seed \
//!   --surreal-endpoint ws://localhost:8000 \
//!   --namespace clinic --database demo \
//!   --clear --seed 7 \
//!   --patients 100 --doctors 20 --appointments 150 --activities 300
//!
//! # Dry run against an in-memory store (no database needed)
//! clinic-seed --dry-run
//! ```

use clap::Parser;
use clinic_seed::{run, RunOptions};
use seed_generator::SynthCounts;

#[derive(Parser)]
#[command(name = "clinic-seed")]
#[command(about = "Provision and seed a clinic demo dataset into a structured list store")]
struct Cli {
    /// SurrealDB endpoint
    #[arg(long, default_value = "ws://localhost:8000")]
    surreal_endpoint: String,

    /// SurrealDB username
    #[arg(long, env = "SURREAL_USER", default_value = "root")]
    surreal_username: String,

    /// SurrealDB password
    #[arg(long, env = "SURREAL_PASS", default_value = "root")]
    surreal_password: String,

    /// Target namespace
    #[arg(long, default_value = "clinic")]
    namespace: String,

    /// Target database
    #[arg(long, default_value = "demo")]
    database: String,

    /// Delete all existing records before seeding
    #[arg(long)]
    clear: bool,

    /// Keep existing collections instead of recreating them
    #[arg(long)]
    skip_schema: bool,

    /// Run against an in-memory store instead of SurrealDB
    #[arg(long)]
    dry_run: bool,

    /// Random seed; equal seeds produce equal datasets
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of patients to generate
    #[arg(long, default_value_t = 30)]
    patients: usize,

    /// Number of doctors to generate
    #[arg(long, default_value_t = 10)]
    doctors: usize,

    /// Number of appointments to generate
    #[arg(long, default_value_t = 30)]
    appointments: usize,

    /// Number of activities to generate
    #[arg(long, default_value_t = 50)]
    activities: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run_cli().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run_cli() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let opts = RunOptions {
        clear: cli.clear,
        skip_schema: cli.skip_schema,
        counts: SynthCounts {
            patients: cli.patients,
            doctors: cli.doctors,
            appointments: cli.appointments,
            activities: cli.activities,
        },
        seed: cli.seed,
    };

    let report = if cli.dry_run {
        let store = seed_store_memory::MemoryStore::new();
        run(&store, &opts).await?
    } else {
        let store = seed_store_surreal::SurrealStore::connect(
            &cli.surreal_endpoint,
            &cli.surreal_username,
            &cli.surreal_password,
            &cli.namespace,
            &cli.database,
        )
        .await?;
        run(&store, &opts).await?
    };

    for ingest in &report.ingested {
        println!(
            "{}: {} of {} records created",
            ingest.kind, ingest.created, ingest.attempted
        );
    }
    if report.total_failed() > 0 {
        println!("{} records were rejected by the store", report.total_failed());
    }
    Ok(())
}
