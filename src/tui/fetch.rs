// Background fetches for the TUI
//
// The App never awaits the network. It queues `Command`s; the event loop
// hands them to the `Fetcher`, which runs each request on its own tokio task
// and reports back over a channel. At most one list fetch and one detail
// fetch run at a time: starting a new one aborts its predecessor.

use crate::catalog::{CatalogClient, CatalogError, ListQuery, Product, ProductPage};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Work requested by the App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchList { generation: u64, query: ListQuery },
    FetchDetail { generation: u64, id: String },
    /// Detail screen closed; drop any request still running for it
    CancelDetail,
}

/// A finished request, tagged with the generation it was issued under
#[derive(Debug)]
pub enum FetchResult {
    List {
        generation: u64,
        result: Result<ProductPage, CatalogError>,
    },
    Detail {
        generation: u64,
        result: Result<Product, CatalogError>,
    },
}

pub struct Fetcher {
    client: CatalogClient,
    tx: mpsc::Sender<FetchResult>,
    list_task: Option<JoinHandle<()>>,
    detail_task: Option<JoinHandle<()>>,
}

impl Fetcher {
    /// Create a fetcher and the receiver its results arrive on
    pub fn new(client: CatalogClient) -> (Self, mpsc::Receiver<FetchResult>) {
        let (tx, rx) = mpsc::channel(64);
        let fetcher = Self {
            client,
            tx,
            list_task: None,
            detail_task: None,
        };
        (fetcher, rx)
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::FetchList { generation, query } => self.fetch_list(generation, query),
            Command::FetchDetail { generation, id } => self.fetch_detail(generation, id),
            Command::CancelDetail => abort(&mut self.detail_task),
        }
    }

    fn fetch_list(&mut self, generation: u64, query: ListQuery) {
        abort(&mut self.list_task);

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.list_task = Some(tokio::spawn(async move {
            let result = client.list_products(&query).await;
            if let Ok(page) = &result {
                tracing::info!(
                    page = query.page,
                    shown = page.items.len(),
                    total = page.total,
                    "Loaded products"
                );
            }
            let _ = tx.send(FetchResult::List { generation, result }).await;
        }));
    }

    fn fetch_detail(&mut self, generation: u64, id: String) {
        abort(&mut self.detail_task);

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.detail_task = Some(tokio::spawn(async move {
            let result = client.get_product(&id).await;
            if let Ok(product) = &result {
                tracing::info!(id = %product.id, "Loaded product");
            }
            let _ = tx.send(FetchResult::Detail { generation, result }).await;
        }));
    }

    /// Abort everything still running
    pub fn shutdown(&mut self) {
        abort(&mut self.list_task);
        abort(&mut self.detail_task);
    }
}

fn abort(task: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = task.take() {
        if !handle.is_finished() {
            tracing::debug!("Aborting superseded fetch");
        }
        handle.abort();
    }
}
