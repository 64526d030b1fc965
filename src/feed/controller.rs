//! Feed controller handle and worker
//!
//! The controller is split into a cheap handle and a worker task. The
//! handle sends commands over an mpsc channel and observes state through
//! a watch channel; the worker owns every mutable field (accumulated
//! items, page cache, cursor, in-flight guard) and is the only writer.
//!
//! Fetches run as spawned subtasks that post their outcome back onto the
//! worker's channel, so results are always reconciled on the worker's
//! turn. Dropping the handle aborts the worker; an outcome delivered
//! after teardown lands on a closed channel and mutates nothing.

use super::state::{FeedState, PageCache};
use crate::config::{DEFAULT_PAGE_SIZE, FeedConfig};
use crate::error::Result;
use crate::source::PageSource;
use crate::types::{GridItem, PageRequest};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

// ============================================================================
// Controller Config
// ============================================================================

/// Page sizes used by the controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Page size for the initial load
    pub initial_page_size: u32,
    /// Page size for every subsequent load
    pub page_size: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_page_size: DEFAULT_PAGE_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&FeedConfig> for ControllerConfig {
    fn from(config: &FeedConfig) -> Self {
        Self {
            initial_page_size: config.initial_page_size,
            page_size: config.page_size,
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Commands accepted by the worker
#[derive(Debug, Clone, Copy)]
enum Command {
    LoadInitial,
    LoadMore,
}

/// Which fetch a completed outcome belongs to
#[derive(Debug, Clone, Copy)]
enum FetchKind {
    Initial,
    More { page: u32 },
}

/// Everything that flows through the worker's channel
enum Msg {
    Command(Command),
    FetchDone {
        kind: FetchKind,
        result: Result<Vec<GridItem>>,
    },
}

// ============================================================================
// Controller Handle
// ============================================================================

/// Handle to the feed controller.
///
/// Commands are fire-and-forget; observers watch the published
/// [`FeedState`] for the outcome. Dropping the handle tears the
/// controller down and cancels any in-flight reconciliation.
#[derive(Debug)]
pub struct FeedController {
    commands: mpsc::UnboundedSender<Msg>,
    state: watch::Receiver<FeedState>,
    worker: JoinHandle<()>,
}

impl FeedController {
    /// Create a controller over the given page source and spawn its
    /// worker task. Must be called within a tokio runtime.
    pub fn new(source: Arc<dyn PageSource>, config: ControllerConfig) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(FeedState::Loading);

        let worker = FeedWorker {
            source,
            config,
            commands: command_tx.clone(),
            state: state_tx,
            cache: PageCache::new(),
            items: Vec::new(),
            next_page_index: 0,
            has_more: true,
            in_flight: false,
        };
        let worker = tokio::spawn(worker.run(command_rx));

        Self {
            commands: command_tx,
            state: state_rx,
            worker,
        }
    }

    /// Subscribe to the feed state (replay-latest)
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.clone()
    }

    /// Snapshot of the latest published state
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Load the first page, replacing any prior accumulation.
    ///
    /// A no-op while any fetch is in flight.
    pub fn load_initial(&self) {
        self.send(Command::LoadInitial);
    }

    /// Load the next page, appending to the accumulation.
    ///
    /// A no-op while a fetch is in flight, once the feed is exhausted,
    /// or from the `Loading`/`Error` states.
    pub fn load_more(&self) {
        self.send(Command::LoadMore);
    }

    /// Restart from page 0 after an error. Equivalent to
    /// [`load_initial`](Self::load_initial).
    pub fn retry(&self) {
        self.send(Command::LoadInitial);
    }

    /// 1-based position of the item with the given id in the visible
    /// accumulated list, or 0 when absent.
    pub fn index_of(&self, id: &str) -> usize {
        self.state.borrow().index_of(id)
    }

    fn send(&self, command: Command) {
        // Fails only after teardown, where dropping the command is fine.
        let _ = self.commands.send(Msg::Command(command));
    }
}

impl Drop for FeedController {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

// ============================================================================
// Worker
// ============================================================================

/// Owns all mutable controller state; runs as a single task.
struct FeedWorker {
    source: Arc<dyn PageSource>,
    config: ControllerConfig,
    /// Sender handed to fetch subtasks for posting outcomes back
    commands: mpsc::UnboundedSender<Msg>,
    state: watch::Sender<FeedState>,
    cache: PageCache,
    /// Accumulated items since the last reset, in page order
    items: Vec<GridItem>,
    next_page_index: u32,
    has_more: bool,
    /// In-flight guard: set when a fetch is dispatched, cleared on its
    /// outcome. Only this task reads or writes it.
    in_flight: bool,
}

impl FeedWorker {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Msg>) {
        while let Some(msg) = rx.recv().await {
            match msg {
                Msg::Command(Command::LoadInitial) => self.handle_load_initial(),
                Msg::Command(Command::LoadMore) => self.handle_load_more(),
                Msg::FetchDone { kind, result } => self.reconcile(kind, result),
            }
        }
    }

    fn handle_load_initial(&mut self) {
        if self.in_flight {
            debug!("load_initial ignored: fetch already in flight");
            return;
        }

        self.next_page_index = 0;
        self.has_more = true;
        self.publish(FeedState::Loading);
        self.spawn_fetch(
            FetchKind::Initial,
            PageRequest::for_page(0, self.config.initial_page_size),
        );
    }

    fn handle_load_more(&mut self) {
        if self.in_flight {
            debug!("load_more ignored: fetch already in flight");
            return;
        }
        if !self.has_more {
            debug!("load_more ignored: feed exhausted");
            return;
        }
        {
            let state = self.state.borrow();
            if !state.is_success() && !state.is_paginating() {
                debug!("load_more ignored: no accumulated items to extend");
                return;
            }
        }

        self.publish(FeedState::Paginating(self.items.clone()));

        let page = self.next_page_index;
        if let Some(cached) = self.cache.get(page) {
            // Cached page: append without any network I/O.
            debug!("load_more served page {page} from cache");
            let cached = cached.to_vec();
            self.items.extend(cached);
            self.next_page_index = page + 1;
            self.publish(FeedState::Success(self.items.clone()));
            return;
        }

        self.spawn_fetch(
            FetchKind::More { page },
            PageRequest::for_page(page, self.config.page_size),
        );
    }

    fn reconcile(&mut self, kind: FetchKind, result: Result<Vec<GridItem>>) {
        self.in_flight = false;

        match (kind, result) {
            (FetchKind::Initial, Ok(items)) => {
                debug!("initial load fetched {} items", items.len());
                if items.is_empty() {
                    self.has_more = false;
                }
                self.cache.insert(0, items.clone());
                self.items = items;
                self.next_page_index = 1;
                self.publish(FeedState::Success(self.items.clone()));
            }
            (FetchKind::More { page }, Ok(items)) => {
                if items.is_empty() {
                    // Exhausted: keep the accumulation, do not advance.
                    debug!("page {page} empty, feed exhausted");
                    self.has_more = false;
                    self.publish(FeedState::Success(self.items.clone()));
                } else {
                    debug!("page {page} fetched {} items", items.len());
                    self.cache.insert(page, items.clone());
                    self.items.extend(items);
                    self.next_page_index = page + 1;
                    self.publish(FeedState::Success(self.items.clone()));
                }
            }
            (_, Err(err)) => {
                warn!("fetch failed: {err}");
                self.publish(FeedState::from_failure(&err));
            }
        }
    }

    fn spawn_fetch(&mut self, kind: FetchKind, request: PageRequest) {
        self.in_flight = true;
        let source = Arc::clone(&self.source);
        let outcomes = self.commands.clone();
        tokio::spawn(async move {
            let result = source.fetch_page(request).await;
            // The channel is closed after teardown; the outcome is
            // discarded and no state is mutated.
            let _ = outcomes.send(Msg::FetchDone { kind, result });
        });
    }

    fn publish(&self, state: FeedState) {
        self.state.send_replace(state);
    }
}
