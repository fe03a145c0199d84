//! Bounded-concurrency comment enrichment for task listings.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinSet;

use crate::api::client::Client;
use crate::api::error::ApiError;
use crate::api::types::{Comment, Task};

/// Maximum comment fetches in flight at once.
const MAX_IN_FLIGHT: usize = 5;

/// Fetches the comments of every task with bounded parallelism.
///
/// A fixed pool of at most [`MAX_IN_FLIGHT`] workers drains a shared
/// queue, each finishing one task's fetch before taking the next.
/// Completion order is irrelevant: the returned map is keyed by task ID.
///
/// The first failing fetch aborts the remaining workers and becomes the
/// overall error; the caller never observes a partially filled map.
///
/// # Errors
///
/// Returns the first [`ApiError`] produced by any fetch.
pub async fn comments_by_task(
    client: &Arc<Client>,
    tasks: &[Task],
) -> Result<HashMap<String, Vec<Comment>>, ApiError> {
    let queue: VecDeque<String> = tasks.iter().map(|task| task.id.clone()).collect();
    let queue = Arc::new(Mutex::new(queue));
    let results = Arc::new(Mutex::new(HashMap::new()));

    let mut workers = JoinSet::new();
    for _ in 0..MAX_IN_FLIGHT.min(tasks.len()) {
        let client = Arc::clone(client);
        let queue = Arc::clone(&queue);
        let results = Arc::clone(&results);
        workers.spawn(async move {
            loop {
                let task_id = queue.lock().await.pop_front();
                let Some(task_id) = task_id else {
                    return Ok::<(), ApiError>(());
                };
                let comments = client.get_comments(Some(&task_id), None).await?;
                results.lock().await.insert(task_id, comments);
            }
        });
    }

    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                workers.abort_all();
                return Err(err);
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                return Err(ApiError::Network(format!("comment fetch worker failed: {err}")))
            }
        }
    }

    let mut results = results.lock().await;
    Ok(std::mem::take(&mut *results))
}
