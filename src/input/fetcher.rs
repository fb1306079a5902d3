use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::runtime::{Builder, Runtime};

use crate::error::{Error, ErrorKind, Result};

pub trait Fetcher {
    fn fetch(&self) -> Result<Vec<u8>>;
}

/// Single-shot HTTP GET of a status page. The timeout bounds the whole
/// exchange, from connecting until the last body byte; `None` waits forever.
pub struct HttpFetcher {
    runtime: Runtime,
    client: Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                Error::with_kind(ErrorKind::Config, "couldn't start HTTP runtime").with_source(e)
            })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = {
            let _guard = runtime.enter();
            builder.build().map_err(|e| {
                Error::with_kind(ErrorKind::Config, "couldn't build HTTP client").with_source(e)
            })?
        };

        Ok(Self {
            runtime,
            client,
            url: url.to_owned(),
        })
    }

    async fn get(&self) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| transport_error(e, ErrorKind::Connect, "request failed"))?;

        if resp.status() != StatusCode::OK {
            let code = resp.status().as_u16();
            return Err(Error::with_kind(
                ErrorKind::Status(code),
                format!("invalid nginx status code: {}", code),
            ));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| transport_error(e, ErrorKind::Body, "error reading body content"))?;

        Ok(body.to_vec())
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self) -> Result<Vec<u8>> {
        self.runtime.block_on(self.get())
    }
}

fn transport_error(err: reqwest::Error, kind: ErrorKind, message: &str) -> Error {
    if err.is_timeout() {
        Error::with_kind(ErrorKind::Timeout, "request timed out").with_source(err)
    } else {
        Error::with_kind(kind, message).with_source(err)
    }
}
