//! Fan-out of probes over hosts × domains.

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::config::TASK_DEADLINE_GRACE;
use crate::error_handling::ErrorType;
use crate::initialization::init_semaphore;

use super::{execute_probe, ProbeContext, ProbeTarget, ResultCollector, ResultMessage};

/// Runs one probe per (host, domain) pair and returns the reported messages.
///
/// At most `settings.max_concurrency` probes are in flight; a permit is taken
/// before each task is spawned. Every task runs under a deadline of the
/// request timeout plus a short grace period and stops early when `cancel`
/// fires. This returns only after every task has finished.
///
/// Pairs that were never started because the run was cancelled are reported
/// as cancelled, so every pair has exactly one outcome in `ctx.stats`.
/// Messages come back in no particular order.
pub async fn dispatch(
    ctx: Arc<ProbeContext>,
    hosts: &[String],
    domains: &[String],
    cancel: CancellationToken,
) -> Vec<ResultMessage> {
    let total = hosts.len().saturating_mul(domains.len());
    let (sink, collector) = ResultCollector::with_capacity(total);
    let semaphore = init_semaphore(ctx.settings.max_concurrency);
    let deadline = ctx.settings.request_timeout + TASK_DEADLINE_GRACE;

    debug!(
        "Dispatching {} probes ({} hosts x {} domains, {} at a time)",
        total,
        hosts.len(),
        domains.len(),
        ctx.settings.max_concurrency
    );

    let mut tasks = FuturesUnordered::new();

    for host in hosts {
        for domain in domains {
            let target = ProbeTarget::new(host.as_str(), domain.as_str());

            let permit = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                permit = Arc::clone(&semaphore).acquire_owned() => permit.ok(),
            };
            let Some(permit) = permit else {
                let outcome = target.cancelled();
                outcome.record(&ctx.stats);
                if let Some(message) = outcome.into_message() {
                    sink.submit(message).await;
                }
                continue;
            };

            let ctx = Arc::clone(&ctx);
            let sink = sink.clone();
            let cancel = cancel.clone();
            let task_target = target.clone();
            let handle = tokio::spawn(async move {
                let _permit = permit;
                let target = task_target;

                let outcome = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => target.cancelled(),
                    result = tokio::time::timeout(
                        deadline,
                        execute_probe(&ctx.client, &ctx.headers, &target, &ctx.settings.policy),
                    ) => match result {
                        Ok(outcome) => outcome,
                        Err(_) => target.deadline_exceeded(deadline),
                    },
                };

                outcome.record(&ctx.stats);
                if let Some(message) = outcome.into_message() {
                    sink.submit(message).await;
                }
            });
            tasks.push(async move { (target, handle.await) });
        }
    }

    while let Some((target, task_result)) = tasks.next().await {
        if let Err(join_error) = task_result {
            warn!(
                "Probe of {} as {} panicked: {:?}",
                target.host, target.domain, join_error
            );
            let outcome = target.failure(ErrorType::ProbeTaskPanicked, "probe task panicked");
            outcome.record(&ctx.stats);
            if let Some(message) = outcome.into_message() {
                sink.submit(message).await;
            }
        }
    }
    drop(sink);

    collector.drain()
}
