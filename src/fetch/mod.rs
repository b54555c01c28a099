use std::future::Future;

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

/// Whatever produces the raw menu page. Any `Fn() -> impl Future` closure
/// returning the page bytes qualifies, which is how tests fake the network.
pub trait Transport: Send + Sync + 'static {
    type Fut: Future<Output = crate::Result<Vec<u8>>> + Send + 'static;

    fn fetch(&self) -> Self::Fut;
}

impl<F, Fut> Transport for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = crate::Result<Vec<u8>>> + Send + 'static,
{
    type Fut = Fut;

    fn fetch(&self) -> Self::Fut {
        self()
    }
}

pub fn make_client() -> reqwest::Result<Client> {
    Client::builder().gzip(true).build()
}

#[instrument(skip(client, url), fields(url = %url), level = Level::DEBUG)]
pub async fn menu_page(client: &Client, url: Url) -> crate::Result<Vec<u8>> {
    let start = std::time::Instant::now();
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    log::debug!(
        "Got {} bytes of menu page in \t {:?}",
        bytes.len(),
        start.elapsed()
    );
    Ok(bytes.to_vec())
}

/// The live transport: one GET of the menu page per fetch, no retries.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    url: Url,
}

impl Http {
    pub const fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

impl Transport for Http {
    type Fut = BoxFuture<'static, crate::Result<Vec<u8>>>;

    fn fetch(&self) -> Self::Fut {
        let client = self.client.clone();
        let url = self.url.clone();
        async move { menu_page(&client, url).await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_closure_transport() {
        let transport = || async { Ok::<_, Error>(b"<p>menu</p>".to_vec()) };
        assert_eq!(transport.fetch().await, Ok(b"<p>menu</p>".to_vec()));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // bind then release a port so nothing is listening on it
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = make_client().expect("client creation should succeed");
        let url: Url = format!("http://{addr}/bistro/")
            .parse()
            .expect("url should be valid");
        let result = Http::new(client, url).fetch().await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
