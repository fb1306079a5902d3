//! Metrics check for the NGINX `stub_status` page.
//!
//! One run fetches the page, parses its seven numbers and renders them as
//! labeled counters and gauges:
//!
//! ```text
//! Fetcher -> StatusParser -> Encoder -> Writer
//! ```

pub mod check;
pub mod cliopt;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod parse;
pub mod target;
