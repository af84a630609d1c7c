//! The asynchronous boundary in front of the search.
//!
//! Searches are CPU-bound and may take seconds at high depth, so they run on a
//! blocking worker task and the caller awaits a [`SearchHandle`]. Only one search
//! may be in flight per [`Engine`].

use crate::protocol::{Query, RequestError, SearchRequest, SearchResponse};
use async_std::task::{self, JoinHandle};
use derive_more::{Display, Error};
use log::{debug, warn};
use sable_othello::{Board, Player};
use sable_search::{search_root, SearchResult};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// The function run for each request. Swappable so faults can be exercised.
pub type Searcher = fn(Board, u32, Player, usize) -> SearchResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    #[display(fmt = "a search is already in progress")]
    Busy,
    #[display(fmt = "the search failed without producing a move")]
    Fault,
    #[display(fmt = "invalid request")]
    InvalidRequest { source: RequestError },
}

impl From<RequestError> for EngineError {
    fn from(source: RequestError) -> Self {
        Self::InvalidRequest { source }
    }
}

pub struct Engine {
    searcher: Searcher,
    busy: Arc<AtomicBool>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the busy flag when the search finishes, however it finishes.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A search running in the background.
///
/// Dropping the handle does not cancel the search; the engine stays busy until it
/// completes.
pub struct SearchHandle {
    task: JoinHandle<Option<SearchResult>>,
}

impl SearchHandle {
    /// Wait for the raw search result.
    pub async fn result(self) -> Result<SearchResult, EngineError> {
        self.task.await.ok_or(EngineError::Fault)
    }

    /// Wait for the result in wire form.
    pub async fn response(self) -> Result<SearchResponse, EngineError> {
        self.result().await.map(SearchResponse::from)
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_searcher(search_root)
    }

    pub fn with_searcher(searcher: Searcher) -> Self {
        Self {
            searcher,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Validate `request` and start searching it.
    ///
    /// Fails with [`EngineError::Busy`] if an earlier search has not finished.
    pub fn submit(&self, request: &SearchRequest) -> Result<SearchHandle, EngineError> {
        let query = request.validate()?;
        self.start(query)
    }

    /// Start searching an already validated query.
    pub fn start(&self, query: Query) -> Result<SearchHandle, EngineError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(EngineError::Busy);
        }

        let guard = BusyGuard(self.busy.clone());
        let searcher = self.searcher;
        let task = task::spawn_blocking(move || {
            let _guard = guard;
            let start = Instant::now();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                searcher(query.board, query.depth, query.ai_player, query.total_pieces)
            }));

            match outcome {
                Ok(result) => {
                    debug!(
                        "search for {} at depth {} finished in {:?}",
                        query.ai_player,
                        query.depth,
                        start.elapsed()
                    );
                    Some(result)
                }
                Err(_) => {
                    warn!(
                        "search for {} at depth {} panicked",
                        query.ai_player, query.depth
                    );
                    None
                }
            }
        });

        Ok(SearchHandle { task })
    }

    /// Submit `request` and wait for its response, retrying once if the search faults.
    pub async fn request(&self, request: &SearchRequest) -> Result<SearchResponse, EngineError> {
        let query = request.validate()?;
        match self.start(query)?.response().await {
            Err(EngineError::Fault) => {
                warn!("retrying faulted search");
                self.start(query)?.response().await
            }
            other => other,
        }
    }
}
