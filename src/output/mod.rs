mod encoder;
mod writer;

use std::str::FromStr;

pub use encoder::{Encoder, JsonEncoder, PromTextEncoder};
pub use writer::{LineWriter, Writer};

use crate::error::{Error, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Prometheus,
    Json,
}

impl Format {
    pub fn encoder(&self) -> Box<dyn Encoder> {
        match self {
            Format::Prometheus => Box::new(PromTextEncoder::new()),
            Format::Json => Box::new(JsonEncoder::new()),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prometheus" | "prom" => Ok(Format::Prometheus),
            "json" => Ok(Format::Json),
            _ => Err(Error::with_kind(
                ErrorKind::Config,
                format!("unsupported output format '{}'", s),
            )),
        }
    }
}
