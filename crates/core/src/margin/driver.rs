//! Debounced, cancellable recompute driver for margin analysis.
//!
//! Edits to items and cost inputs can arrive faster than an analysis can be
//! computed and committed. The driver coalesces bursts of edits inside a
//! debounce window and tags every submission with a monotonically increasing
//! generation id; a result whose generation is no longer the latest is
//! discarded silently instead of overwriting a result for newer input. This
//! is the cancellable single-flight pattern; the stale discard is not an
//! error surfaced to callers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use clinia_shared::FinancialSettings;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::debug;

use super::analyzer::MarginAnalyzer;
use super::filter::MarginFilter;
use super::types::{CostSnapshot, MarginAnalysis};
use crate::budget::BudgetItem;

/// A full snapshot of analyzer inputs submitted for recomputation.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    /// Budget items to analyze.
    pub items: Vec<BudgetItem>,
    /// Cost data snapshot.
    pub costs: CostSnapshot,
    /// Item filter.
    pub filter: MarginFilter,
}

/// A committed analysis together with the generation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginSnapshot {
    /// Generation id of the input set this analysis was computed from.
    pub generation: u64,
    /// The committed analysis.
    pub analysis: MarginAnalysis,
}

struct Request {
    generation: u64,
    input: AnalysisInput,
}

/// Debounced margin recompute driver.
///
/// Consumers subscribe to committed snapshots through a watch channel; the
/// channel only ever moves forward to newer generations.
pub struct MarginDriver {
    input_tx: mpsc::UnboundedSender<Request>,
    snapshot_rx: watch::Receiver<Option<MarginSnapshot>>,
    generation: Arc<AtomicU64>,
    worker: JoinHandle<()>,
}

impl MarginDriver {
    /// Spawns the background worker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(settings: FinancialSettings) -> Self {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(None);
        let generation = Arc::new(AtomicU64::new(0));

        let worker = tokio::spawn(run_worker(
            input_rx,
            snapshot_tx,
            Arc::clone(&generation),
            settings,
        ));

        Self {
            input_tx,
            snapshot_rx,
            generation,
            worker,
        }
    }

    /// Submits a new input set, superseding any in-flight computation.
    pub fn submit(&self, input: AnalysisInput) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        // Send only fails after shutdown; edits past that point are moot.
        let _ = self.input_tx.send(Request { generation, input });
    }

    /// Subscribes to committed analysis snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<MarginSnapshot>> {
        self.snapshot_rx.clone()
    }

    /// Returns the most recently committed snapshot, if any.
    #[must_use]
    pub fn latest(&self) -> Option<MarginSnapshot> {
        self.snapshot_rx.borrow().clone()
    }

    /// Returns the latest submitted generation id.
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Stops the worker after it drains the pending input, if any.
    pub async fn shutdown(self) {
        drop(self.input_tx);
        let _ = self.worker.await;
    }
}

async fn run_worker(
    mut input_rx: mpsc::UnboundedReceiver<Request>,
    snapshot_tx: watch::Sender<Option<MarginSnapshot>>,
    generation: Arc<AtomicU64>,
    settings: FinancialSettings,
) {
    let debounce = Duration::from_millis(settings.debounce_ms);

    while let Some(mut request) = input_rx.recv().await {
        // Debounce: keep absorbing newer inputs until the window stays quiet.
        loop {
            tokio::select! {
                next = input_rx.recv() => match next {
                    Some(newer) => {
                        debug!(
                            superseded = request.generation,
                            by = newer.generation,
                            "coalescing margin edit burst"
                        );
                        request = newer;
                    }
                    None => break,
                },
                () = sleep(debounce) => break,
            }
        }

        // A submission can race the select arms; skip anything already stale.
        if request.generation != generation.load(Ordering::SeqCst) {
            debug!(generation = request.generation, "discarding stale margin input");
            continue;
        }

        let analysis = MarginAnalyzer::analyze(
            &request.input.items,
            &request.input.costs,
            &request.input.filter,
            &settings,
        );

        // Commit only if no newer input arrived while computing.
        if request.generation == generation.load(Ordering::SeqCst) {
            debug!(generation = request.generation, "committing margin analysis");
            let _ = snapshot_tx.send(Some(MarginSnapshot {
                generation: request.generation,
                analysis,
            }));
        } else {
            debug!(
                generation = request.generation,
                "discarding stale margin analysis"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use clinia_shared::types::{BudgetItemId, ProcedureId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::margin::types::CostBreakdown;

    fn input_with_price(unit_value: Decimal) -> AnalysisInput {
        let procedure = ProcedureId::from_uuid(uuid::Uuid::nil());
        AnalysisInput {
            items: vec![BudgetItem {
                id: BudgetItemId::from_uuid(uuid::Uuid::nil()),
                procedure_id: Some(procedure),
                procedure_name: "procedure".to_string(),
                quantity: 1,
                unit_value,
                category: None,
                sales_rep: None,
            }],
            costs: CostSnapshot::new(dec!(4.50)).with_breakdown(
                procedure,
                CostBreakdown::new(dec!(100), dec!(100), dec!(50)),
            ),
            filter: MarginFilter::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_submit_commits_after_debounce() {
        let driver = MarginDriver::spawn(FinancialSettings::default());
        let mut rx = driver.subscribe();

        driver.submit(input_with_price(dec!(1000)));

        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone().unwrap();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.analysis.total_price, dec!(1000));

        driver.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_burst_coalesces_to_latest_input() {
        let driver = MarginDriver::spawn(FinancialSettings::default());
        let mut rx = driver.subscribe();

        // Three edits land inside one debounce window.
        driver.submit(input_with_price(dec!(100)));
        driver.submit(input_with_price(dec!(200)));
        driver.submit(input_with_price(dec!(300)));

        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone().unwrap();

        // Only the newest generation's result is ever committed.
        assert_eq!(snapshot.generation, 3);
        assert_eq!(snapshot.analysis.total_price, dec!(300));
        assert!(
            !rx.has_changed().unwrap(),
            "intermediate edits must not produce commits"
        );

        driver.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_submissions_each_commit() {
        let driver = MarginDriver::spawn(FinancialSettings::default());
        let mut rx = driver.subscribe();

        driver.submit(input_with_price(dec!(100)));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().clone().unwrap().generation, 1);

        driver.submit(input_with_price(dec!(500)));
        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone().unwrap();
        assert_eq!(snapshot.generation, 2);
        assert_eq!(snapshot.analysis.total_price, dec!(500));

        driver.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_reflects_only_committed_generations() {
        let driver = MarginDriver::spawn(FinancialSettings::default());

        assert!(driver.latest().is_none());
        driver.submit(input_with_price(dec!(100)));
        assert_eq!(driver.current_generation(), 1);

        let mut rx = driver.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(driver.latest().unwrap().generation, 1);

        driver.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_input_drains_on_shutdown() {
        let driver = MarginDriver::spawn(FinancialSettings::default());
        let rx = driver.subscribe();

        driver.submit(input_with_price(dec!(250)));
        driver.shutdown().await;

        let snapshot = rx.borrow().clone().unwrap();
        assert_eq!(snapshot.analysis.total_price, dec!(250));
    }
}
