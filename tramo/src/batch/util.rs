use futures::StreamExt;
use tramo_core::TramoError;

/// Drive a collection of tasks with at most `max_concurrency` in flight, in
/// input order, and apply an optional request-level deadline.
///
/// On timeout the helper returns `TramoError::RequestTimeout("request")`, which
/// call sites remap to a more specific capability label.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    max_concurrency: usize,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, TramoError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    let all = futures::stream::iter(tasks)
        .buffered(max_concurrency.max(1))
        .collect::<Vec<T>>();
    crate::core::with_request_deadline(deadline, all).await
}

/// Run a synchronous per-entity computation on the blocking pool.
pub(crate) async fn run_blocking<T, F>(entity: &str, f: F) -> Result<T, TramoError>
where
    F: FnOnce() -> Result<T, TramoError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(res) => res.map_err(|e| crate::core::tag_err(entity, e)),
        Err(join) => Err(TramoError::entity(
            entity,
            TramoError::Other(format!("worker task failed: {join}")).to_string(),
        )),
    }
}

/// Remap the generic deadline label to the batch's capability.
pub(crate) fn relabel_timeout(e: TramoError, capability: &str) -> TramoError {
    match e {
        TramoError::RequestTimeout { .. } => TramoError::request_timeout(capability),
        other => other,
    }
}
