//! Runtime that wires the screens to a [`RecipeSource`] and a [`LinkOpener`].
//!
//! Views are pure: they take a message and may hand back an action. The
//! runtime executes that action and never blocks on it. Fetches run on
//! spawned tasks and report back over a channel as [`AppMsg`]s, so the front
//! end can redraw the loading and refreshing states while a request is out.
//! Call [`App::process_next`] to apply the next result, or [`App::settle`] to
//! drain everything in flight.

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::mpsc;

use crate::client::RecipeSource;
use crate::link::LinkOpener;
use crate::navigation::{Navigator, Route};
use crate::views::{CatalogAction, CatalogMsg, CatalogView, DetailAction, DetailMsg, DetailView};

const CHANNEL_CAPACITY: usize = 32;

/// Results flowing back from spawned fetches
#[derive(Debug)]
pub enum AppMsg {
    Catalog(CatalogMsg),
    /// `mount` identifies the detail screen that asked; results for a screen
    /// that has since been popped are dropped.
    Detail { mount: u64, msg: DetailMsg },
}

pub struct App<S, L> {
    source: Arc<S>,
    opener: L,
    navigator: Navigator,
    catalog: CatalogView,
    detail: Option<(u64, DetailView)>,
    next_mount: u64,
    in_flight: usize,
    tx: mpsc::Sender<AppMsg>,
    rx: mpsc::Receiver<AppMsg>,
}

impl<S: RecipeSource + 'static, L: LinkOpener> App<S, L> {
    pub fn new(source: S, opener: L) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            source: Arc::new(source),
            opener,
            navigator: Navigator::new(),
            catalog: CatalogView::new(),
            detail: None,
            next_mount: 0,
            in_flight: 0,
            tx,
            rx,
        }
    }

    /// Mount the root catalog screen and kick off its first fetch
    pub fn start(&mut self) {
        info!("Starting on {:?}", self.navigator.current());
        self.dispatch_catalog(CatalogMsg::Mount);
    }

    pub fn dispatch_catalog(&mut self, msg: CatalogMsg) {
        match self.catalog.update(msg) {
            Some(CatalogAction::Fetch) => self.spawn_catalog_fetch(),
            Some(CatalogAction::Navigate(route)) => self.navigate(route),
            None => {}
        }
    }

    /// Send a message to the mounted detail screen; ignored on the catalog.
    pub fn dispatch_detail(&mut self, msg: DetailMsg) {
        let Some((mount, detail)) = self.detail.as_mut() else {
            debug!("No detail screen mounted, dropping {:?}", msg);
            return;
        };

        match detail.update(msg) {
            Some(DetailAction::Fetch { meal_id }) => {
                let mount = *mount;
                self.spawn_lookup(mount, meal_id);
            }
            Some(DetailAction::OpenLink(url)) => self.opener.open(&url),
            None => {}
        }
    }

    fn spawn_catalog_fetch(&mut self) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = source.fetch_catalog().await;
            if tx.send(AppMsg::Catalog(CatalogMsg::Fetched(result))).await.is_err() {
                debug!("App gone before the catalog fetch finished");
            }
        });
    }

    fn spawn_lookup(&mut self, mount: u64, meal_id: String) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = source.lookup_recipe(&meal_id).await;
            let msg = AppMsg::Detail {
                mount,
                msg: DetailMsg::Fetched(result),
            };
            if tx.send(msg).await.is_err() {
                debug!("App gone before the lookup of {} finished", meal_id);
            }
        });
    }

    /// Wait for the next fetch result and apply it.
    ///
    /// Returns `false` once the channel is closed. Safe to use as a
    /// `tokio::select!` branch: nothing is lost if it is cancelled.
    pub async fn process_next(&mut self) -> bool {
        let Some(msg) = self.rx.recv().await else {
            return false;
        };
        self.in_flight = self.in_flight.saturating_sub(1);
        self.apply(msg);
        true
    }

    /// Apply results until no fetch is in flight
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            if !self.process_next().await {
                break;
            }
        }
    }

    fn apply(&mut self, msg: AppMsg) {
        match msg {
            AppMsg::Catalog(msg) => self.dispatch_catalog(msg),
            AppMsg::Detail { mount, msg } => {
                let current = self.detail.as_ref().map(|(id, _)| *id);
                if current == Some(mount) {
                    self.dispatch_detail(msg);
                } else {
                    debug!("Dropping result for unmounted detail screen #{}", mount);
                }
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        self.navigator.push(route.clone());
        if let Route::Detail { meal_id } = route {
            self.next_mount += 1;
            self.detail = Some((self.next_mount, DetailView::new(meal_id)));
            self.dispatch_detail(DetailMsg::Mount);
        }
    }

    /// Pop back to the catalog. The catalog is not refetched.
    pub fn back(&mut self) -> bool {
        match self.navigator.back() {
            Some(_) => {
                self.detail = None;
                true
            }
            None => false,
        }
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref().map(|(_, view)| view)
    }

    /// Number of fetches whose result has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
