use std::{fmt, sync::Arc};

use chrono::{Local, NaiveDateTime};
use futures::channel::oneshot;
use futures_locks::Mutex;

use super::MenuCache;
use crate::{error::Error, fetch::Transport, menu::Menu};

type Waiter = oneshot::Sender<crate::Result<Menu>>;

#[derive(Debug, Default)]
struct State {
    cache: MenuCache,
    /// non-empty exactly while a fetch is in flight
    waiters: Vec<Waiter>,
}

/// Serves the day's menu from cache, fetching it at most once at a time.
///
/// Callers that miss the cache while a fetch is already running queue up
/// behind it and all receive its outcome. A failed fetch leaves the previous
/// menu in place.
pub struct Multithreaded<T> {
    state: Arc<Mutex<State>>,
    transport: Arc<T>,
}

impl<T> fmt::Debug for Multithreaded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multithreaded").finish_non_exhaustive()
    }
}

impl<T: Transport> Multithreaded<T> {
    pub fn new(transport: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            transport: Arc::new(transport),
        }
    }

    pub async fn get(&self) -> crate::Result<Menu> {
        self.get_at(Local::now().naive_local()).await
    }

    pub async fn get_at(&self, now: NaiveDateTime) -> crate::Result<Menu> {
        let receiver = {
            let mut state = self.state.lock().await;
            if let Some(menu) = state.cache.get(now.date()) {
                log::debug!("cached menu for {} returned", menu.date);
                return Ok(menu.clone());
            }
            let (sender, receiver) = oneshot::channel();
            state.waiters.push(sender);
            if state.waiters.len() == 1 {
                log::info!("cache invalid, requesting new menu");
                self.spawn_fetch(now);
            } else {
                log::debug!("joining fetch in flight ({} waiting)", state.waiters.len());
            }
            receiver
        };
        receiver
            .await
            .unwrap_or_else(|_| Err(Error::Transport("menu fetch was abandoned".to_string())))
    }

    /// Runs on its own task so the fetch completes even if every caller is dropped.
    fn spawn_fetch(&self, now: NaiveDateTime) {
        let state = Arc::clone(&self.state);
        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            let outcome = match transport.fetch().await {
                Ok(page) => Menu::from_bytes(&page, now).map_err(Error::from),
                Err(e) => Err(e),
            };
            let mut state = state.lock().await;
            match &outcome {
                Ok(menu) => state.cache.store(menu.clone()),
                Err(e) => log::warn!("menu fetch failed, keeping previous menu: {e}"),
            }
            let waiters = std::mem::take(&mut state.waiters);
            log::info!("resolving {} waiters", waiters.len());
            for waiter in waiters {
                if waiter.send(outcome.clone()).is_err() {
                    log::debug!("waiter went away before the menu arrived");
                }
            }
        });
    }
}
