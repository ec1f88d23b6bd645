//! Orchestration of a full clinic-seed run against any list store.
//!
//! A run is a strict pipeline: optionally clear existing records, provision
//! the four collections, then generate and persist records in dependency
//! order. Dependent kinds are generated only from records read back out of
//! the store, so every reference they carry points at a storage identifier
//! the store actually assigned.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::{EntityKind, ListStore, ResolvedIds};
use seed_generator::{synth, SynthCounts};
use seed_populate::{clear_all, ingest, provision_all, ClearReport, IngestReport};
use tracing::info;

/// Settings for one seeding run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Delete all existing records before generating new ones.
    pub clear: bool,
    /// Leave collections as-is instead of recreating them.
    pub skip_schema: bool,
    /// How many records of each kind to generate.
    pub counts: SynthCounts,
    /// Seed for the random generator; equal seeds give equal output.
    pub seed: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            clear: false,
            skip_schema: false,
            counts: SynthCounts::default(),
            seed: 42,
        }
    }
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub cleared: Option<ClearReport>,
    pub ingested: Vec<IngestReport>,
}

impl RunReport {
    pub fn total_created(&self) -> usize {
        self.ingested.iter().map(|r| r.created).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.ingested.iter().map(|r| r.failed).sum()
    }
}

/// Execute a full seeding run.
///
/// Base kinds (patients, doctors) are persisted first, then read back so
/// appointments can be linked to real storage identifiers; appointments are
/// in turn read back before activities are generated. A record the store
/// rejects is counted in the report and does not abort the run.
pub async fn run<S: ListStore>(store: &S, opts: &RunOptions) -> anyhow::Result<RunReport> {
    let mut report = RunReport::default();

    if opts.clear {
        let cleared = clear_all(store)
            .await
            .context("clearing existing records")?;
        info!("Cleared {} existing records", cleared.total());
        report.cleared = Some(cleared);
    }

    if opts.skip_schema {
        info!("Skipping schema provisioning");
    } else {
        provision_all(store)
            .await
            .context("provisioning collections")?;
    }

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let now = chrono::Utc::now();

    let patients =
        synth::patients(&mut rng, opts.counts.patients, now).context("generating patients")?;
    report.ingested.push(ingest(store, &patients).await);

    let doctors = synth::doctors(&mut rng, opts.counts.doctors);
    report.ingested.push(ingest(store, &doctors).await);

    // Read the persisted base records back: dependent kinds link against
    // the identifiers the store assigned, not the ones we submitted.
    let mut ids = ResolvedIds::new();
    let stored_patients = store
        .list_records(EntityKind::Patient)
        .await
        .context("reading back patients")?;
    ids.index(EntityKind::Patient, &stored_patients)
        .context("indexing patients")?;
    let stored_doctors = store
        .list_records(EntityKind::Doctor)
        .await
        .context("reading back doctors")?;
    ids.index(EntityKind::Doctor, &stored_doctors)
        .context("indexing doctors")?;

    let appointments = synth::appointments(
        &mut rng,
        opts.counts.appointments,
        &stored_patients,
        &stored_doctors,
        &ids,
        now,
    )
    .context("generating appointments")?;
    report.ingested.push(ingest(store, &appointments).await);

    let stored_appointments = store
        .list_records(EntityKind::Appointment)
        .await
        .context("reading back appointments")?;
    ids.index(EntityKind::Appointment, &stored_appointments)
        .context("indexing appointments")?;

    let activities = synth::activities(
        &mut rng,
        opts.counts.activities,
        &stored_appointments,
        &stored_patients,
        &stored_doctors,
        &ids,
    )
    .context("generating activities")?;
    report.ingested.push(ingest(store, &activities).await);

    info!(
        "Run complete: {} records created, {} failed",
        report.total_created(),
        report.total_failed()
    );
    Ok(report)
}
