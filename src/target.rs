use std::time::Duration;

use url::{Host, Url};

use crate::error::{Error, ErrorKind, Result};

/// Where the status page lives and how its metrics get labeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub hostname: String,
    pub port: String,
}

impl Target {
    /// An explicit URL wins over hostname, port and status path; its host
    /// and port then become the labels.
    pub fn resolve(url: &str, hostname: &str, port: u32, status_path: &str) -> Result<Self> {
        let url = url.trim();
        if !url.is_empty() {
            return Self::from_url(url);
        }

        let url = format!(
            "http://{}:{}/{}",
            hostname,
            port,
            status_path.trim_start_matches('/')
        );
        if let Err(e) = Url::parse(&url) {
            return Err(Error::with_kind(
                ErrorKind::Config,
                format!(
                    "invalid url built from hostname, port and status-path: {}",
                    url
                ),
            )
            .with_source(e));
        }

        Ok(Self {
            url,
            hostname: hostname.to_owned(),
            port: port.to_string(),
        })
    }

    fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| {
            Error::with_kind(ErrorKind::Config, "invalid url provided").with_source(e)
        })?;

        let hostname = match parsed.host() {
            Some(Host::Domain(domain)) => domain.to_owned(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Ipv6(addr)) => addr.to_string(),
            None => {
                return Err(Error::with_kind(
                    ErrorKind::Config,
                    format!("invalid url provided: no host in {}", url),
                ))
            }
        };

        let port = match parsed.port() {
            Some(port) => port.to_string(),
            None => written_port(url).unwrap_or_default().to_owned(),
        };

        Ok(Self {
            url: url.to_owned(),
            hostname,
            port,
        })
    }
}

// The url crate forgets a port that equals the scheme default, so the
// written one is read back from the authority.
fn written_port(url: &str) -> Option<&str> {
    let rest = &url[url.find("://")? + 3..];
    let authority = rest.split(|c| c == '/' || c == '?' || c == '#').next()?;
    let host_port = authority.rsplit('@').next()?;
    let after_host = match host_port.rfind(']') {
        Some(i) => &host_port[i + 1..],
        None => host_port,
    };
    let port = &after_host[after_host.rfind(':')? + 1..];
    if port.is_empty() {
        None
    } else {
        Some(port)
    }
}

/// Zero seconds means no timeout at all.
pub fn timeout_from_secs(secs: u32) -> Option<Duration> {
    match secs {
        0 => None,
        secs => Some(Duration::from_secs(secs as u64)),
    }
}
