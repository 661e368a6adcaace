//! List View Module
//!
//! Drives the product list: debounced search input, pagination controls and
//! last-dispatched-wins application of responses.
//!
//! Everything runs on one spawned task. Each dispatched request takes a token
//! from a counter; a response is applied only while its token is still the
//! latest one, so a slow superseded request can never overwrite newer state.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::client::api::{search_or_list, CatalogApi};
use crate::client::error::{ClientError, Result};
use crate::config::ClientConfig;
use crate::models::{Product, ProductPage};

/// Snapshot of what the list shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub products: Vec<Product>,
    /// Term whose results are currently shown
    pub search_term: String,
    pub current_page: u64,
    pub items_per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    /// Set when the latest request failed; previous results stay visible
    pub error: Option<String>,
}

impl ListState {
    fn new(items_per_page: u64) -> Self {
        Self {
            products: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            items_per_page,
            total_items: 0,
            total_pages: 0,
            error: None,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

#[derive(Debug)]
enum Command {
    Input(String),
    NextPage,
    PreviousPage,
}

#[derive(Debug)]
struct PageRequest {
    term: String,
    page: u64,
}

type InFlight = FuturesUnordered<BoxFuture<'static, (u64, PageRequest, Result<ProductPage>)>>;

// == List View Handle ==
/// Handle to a running list view. Dropping it stops the view.
pub struct ListView {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<ListState>,
    task: JoinHandle<()>,
}

impl ListView {
    /// Starts the view and dispatches the initial unfiltered load.
    pub fn spawn<A: CatalogApi>(api: Arc<A>, config: &ClientConfig) -> Self {
        let (commands, rx) = mpsc::unbounded_channel();
        let initial = ListState::new(config.items_per_page.max(1));
        let (state_tx, state) = watch::channel(initial.clone());

        let event_loop = EventLoop {
            api,
            debounce: config.debounce,
            commands: rx,
            state_tx,
            state: initial,
            pending_input: None,
            deadline: None,
            active_term: String::new(),
            target_page: 1,
            latest_token: 0,
            in_flight: FuturesUnordered::new(),
        };
        let task = tokio::spawn(event_loop.run());

        Self {
            commands,
            state,
            task,
        }
    }

    /// Feeds one keystroke's worth of search box content.
    pub fn input(&self, term: impl Into<String>) {
        self.send(Command::Input(term.into()));
    }

    pub fn next_page(&self) {
        self.send(Command::NextPage);
    }

    pub fn previous_page(&self) {
        self.send(Command::PreviousPage);
    }

    /// Current snapshot.
    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Receiver notified whenever a response is applied.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.clone()
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!("list view has stopped; command dropped");
        }
    }
}

impl Drop for ListView {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// == Event Loop ==
struct EventLoop<A> {
    api: Arc<A>,
    debounce: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    state_tx: watch::Sender<ListState>,
    state: ListState,
    /// Latest input not yet past the quiescence window
    pending_input: Option<String>,
    deadline: Option<Instant>,
    /// Term of the most recent dispatch
    active_term: String,
    /// Page of the most recent dispatch
    target_page: u64,
    latest_token: u64,
    in_flight: InFlight,
}

impl<A: CatalogApi> EventLoop<A> {
    async fn run(mut self) {
        info!("list view started");
        self.dispatch(String::new(), 1);

        loop {
            let deadline = self.deadline;
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.flush_input();
                }
                Some((token, request, result)) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.apply(token, request, result);
                }
            }
        }

        debug!("list view stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Input(term) => {
                self.pending_input = Some(term);
                self.deadline = Some(Instant::now() + self.debounce);
            }
            Command::NextPage => {
                if self.term_in_flight() {
                    debug!("next page ignored; {:?} not loaded yet", self.active_term);
                } else if self.target_page < self.state.total_pages {
                    self.dispatch(self.active_term.clone(), self.target_page + 1);
                }
            }
            Command::PreviousPage => {
                if self.term_in_flight() {
                    debug!("previous page ignored; {:?} not loaded yet", self.active_term);
                } else if self.target_page > 1 {
                    self.dispatch(self.active_term.clone(), self.target_page - 1);
                }
            }
        }
    }

    /// True while the latest dispatch is for a term whose page count is not
    /// known yet. Page bounds only hold for the term on screen.
    fn term_in_flight(&self) -> bool {
        self.active_term != self.state.search_term
    }

    /// Quiescence window elapsed: dispatch unless the term is unchanged.
    fn flush_input(&mut self) {
        self.deadline = None;
        let Some(raw) = self.pending_input.take() else {
            return;
        };

        let term = raw.trim().to_string();
        if term == self.active_term {
            debug!("search term {:?} unchanged; suppressed", term);
            return;
        }
        self.dispatch(term, 1);
    }

    fn dispatch(&mut self, term: String, page: u64) {
        self.latest_token += 1;
        let token = self.latest_token;
        self.active_term = term.clone();
        self.target_page = page;

        let api = Arc::clone(&self.api);
        let limit = self.state.items_per_page;
        debug!("dispatch #{} term={:?} page={}", token, term, page);

        self.in_flight.push(Box::pin(async move {
            let result = search_or_list(api.as_ref(), &term, page, limit).await;
            (token, PageRequest { term, page }, result)
        }));
    }

    fn apply(&mut self, token: u64, request: PageRequest, result: Result<ProductPage>) {
        if token != self.latest_token {
            debug!(
                "discarding response #{} for {:?}; #{} is newer",
                token, request.term, self.latest_token
            );
            return;
        }

        match result {
            Ok(page) => {
                self.state.total_pages = page.total_pages(self.state.items_per_page);
                self.state.total_items = page.total_count;
                self.state.products = page.products;
                self.state.current_page = request.page;
                self.state.search_term = request.term;
                self.state.error = None;
            }
            Err(err) => {
                warn!("catalog request for {:?} failed: {}", request.term, err);
                // roll back so the same term or page can be retried
                self.target_page = self.state.current_page;
                self.active_term = self.state.search_term.clone();
                self.state.error = Some(match err {
                    ClientError::NotFound(_) => "Not found.".to_string(),
                    other => other.to_string(),
                });
            }
        }

        self.state_tx.send_replace(self.state.clone());
    }
}
