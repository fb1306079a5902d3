use std::fmt;
use std::time::Duration;

use log::{debug, error};

use crate::error::{Error, ErrorKind, Result};
use crate::input::{Fetcher, HttpFetcher};
use crate::model::{Clock, MetricRecord};
use crate::output::{Encoder, Writer};
use crate::parse::StatusParser;

/// Outcome of a check, doubling as the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Ok = 0,
    Critical = 2,
}

impl CheckState {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_uppercase())
    }
}

/// Fetches the status page at `url` and turns it into metric records.
pub fn get_metrics(
    url: &str,
    hostname: &str,
    port: &str,
    timeout: Option<Duration>,
    clock: &dyn Clock,
) -> Result<Vec<MetricRecord>> {
    let fetcher = HttpFetcher::new(url, timeout)?;
    let parser = StatusParser::new(hostname, port);
    collect(&fetcher, &parser, clock)
}

fn collect(
    fetcher: &dyn Fetcher,
    parser: &StatusParser,
    clock: &dyn Clock,
) -> Result<Vec<MetricRecord>> {
    let content = fetcher.fetch()?;
    parser.parse(&content, clock)
}

// Fetcher -> StatusParser -> Encoder -> Writer
pub struct Check {
    fetcher: Box<dyn Fetcher>,
    parser: StatusParser,
    encoder: Box<dyn Encoder>,
    clock: Box<dyn Clock>,
}

impl Check {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        parser: StatusParser,
        encoder: Box<dyn Encoder>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            fetcher,
            parser,
            encoder,
            clock,
        }
    }

    /// Runs one check. Metrics are written only when every step succeeded;
    /// otherwise the writer gets the error message instead.
    pub fn execute(&self, writer: &mut dyn Writer) -> CheckState {
        let records = match collect(self.fetcher.as_ref(), &self.parser, self.clock.as_ref()) {
            Ok(records) => records,
            Err(e) => {
                error!("check failed at {} stage: {}", e.kind().stage(), e);
                return report(
                    writer,
                    &format!("error generating nginx metrics: {}", e),
                );
            }
        };
        debug!("collected {} metrics", records.len());

        let written = self.encoder.encode(&records).and_then(|buf| {
            writer
                .write(&buf)
                .map_err(|e| Error::with_kind(ErrorKind::Output, "writer failed").with_source(e))
        });

        match written {
            Ok(()) => CheckState::Ok,
            Err(e) => {
                error!("check output failed: {}", e);
                report(writer, &format!("error printing metrics: {}", e))
            }
        }
    }
}

/// Hands a failure message to the writer in place of metrics.
pub fn report(writer: &mut dyn Writer, message: &str) -> CheckState {
    if let Err(e) = writer.write(message.as_bytes()) {
        error!("couldn't report check failure: {}", e);
    }
    CheckState::Critical
}
