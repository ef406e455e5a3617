pub mod discover;
pub mod enrich;
pub mod reconcile;
pub mod request;
pub mod summary;
pub mod trim;
pub mod write;

use crate::{
    types::{config::GenerateConfig, manifest::MasterEntry},
    utils::{
        logger::{LogLevel, Logger},
        spinner::{Spinner, run_step},
    },
};
use chrono::Utc;
use enrich::Enricher;
use futures::stream::{self, StreamExt};
use reconcile::{History, Reconciled};
use summary::GenerateSummary;

/// Runs the whole pipeline: discover, trim, enrich, reconcile and write.
pub async fn generate_master(
    config: &GenerateConfig,
    logger: &Logger,
) -> Result<GenerateSummary, String> {
    // history is read before any entry is touched and never mutated afterwards
    let history = History::load(&config.output, logger);

    let manifests = run_step(
        &format!("Loading manifests from {}", config.plugins_dir.display()),
        logger,
        |found: &Vec<_>| format!("Loaded {} manifest(s)", found.len()),
        || discover::discover_manifests(&config.plugins_dir, logger),
    )?;

    let enricher = Enricher::new(
        request::build_http_client()?,
        &config.api_base_url,
        &config.owner,
        logger.clone(),
    );

    let progress = Spinner::counter(
        "Fetching download counts",
        manifests.len() as u64,
        logger,
    );
    let enriched = run_bounded_in_order(
        manifests.iter().map(trim::trim_manifest),
        config.concurrency,
        |manifest| {
            let enricher = &enricher;
            let progress = &progress;
            async move {
                let result = enricher.enrich(manifest).await;
                progress.inc();
                result
            }
        },
    )
    .await;

    let mut summary = GenerateSummary::default();
    let mut master: Vec<MasterEntry> = Vec::with_capacity(enriched.len());
    for item in enriched {
        let mut entry = item.entry;
        let outcome = history.reconcile(&mut entry, Utc::now());
        match outcome {
            Reconciled::CarriedForward => summary.carried_forward += 1,
            Reconciled::Refreshed => summary.refreshed += 1,
        }
        logger.log_message(
            LogLevel::Debug,
            &format!("{}: LastUpdate {:?}", entry.label(), outcome),
        );
        if item.lookup_failed {
            summary.failed_lookups += 1;
        }
        summary.total_downloads = summary.total_downloads.saturating_add(entry.download_count());
        master.push(entry);
    }
    progress.succeed(format!("Enriched {} manifest(s)", master.len()));

    run_step(
        &format!("Writing {}", config.output.display()),
        logger,
        |_| format!("Wrote {}", config.output.display()),
        || write::write_master(&config.output, &master),
    )?;

    summary.written = master.len();
    Ok(summary)
}

/// Drives at most `limit` futures at once and yields their outputs in input
/// order, whatever order they complete in.
pub async fn run_bounded_in_order<I, F, Fut>(items: I, limit: usize, f: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .collect()
        .await
}
