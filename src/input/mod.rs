mod fetcher;

pub use fetcher::{Fetcher, HttpFetcher};
