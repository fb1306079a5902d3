use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, ErrorKind, Result};
use crate::model::{
    descriptor, host_port_labels, Clock, Labels, MetricName, MetricRecord, Sample, NGINX_ACCEPTS,
    NGINX_ACTIVE, NGINX_HANDLED, NGINX_READING, NGINX_REQUESTS, NGINX_WAITING, NGINX_WRITING,
};

const EXPECTED_LINES: usize = 4;

// Separators are ASCII whitespace only (no vertical tab), numbers ASCII digits.
lazy_static! {
    static ref LINE1_RE: Regex = Regex::new(r"^Active connections: ([0-9]+)$").unwrap();
    static ref LINE3_RE: Regex =
        Regex::new(r"^([0-9]+)[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]+([0-9]+)$").unwrap();
    static ref LINE4_RE: Regex = Regex::new(
        r"^Reading:[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]+Writing:[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]+Waiting:[\t\n\f\r ]+([0-9]+)$"
    )
    .unwrap();
}

/// The seven counters of a stub_status page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub active: u64,
    pub accepts: u64,
    pub handled: u64,
    pub requests: u64,
    pub reading: u64,
    pub writing: u64,
    pub waiting: u64,
}

impl ParsedFields {
    /// Parses a stub_status page of the following form:
    ///
    /// ```text
    /// Active connections: 1
    /// server accepts handled requests
    ///  7 7 91
    /// Reading: 0 Writing: 1 Waiting: 0
    /// ```
    ///
    /// Blank lines are skipped and every line is trimmed before matching.
    /// The second line is required but its content is not checked.
    pub fn parse(content: &[u8]) -> Result<Self> {
        let content = String::from_utf8_lossy(content);
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != EXPECTED_LINES {
            return Err(Error::with_kind(
                ErrorKind::LineCount(lines.len()),
                format!(
                    "{} output lines are expected, got {}",
                    EXPECTED_LINES,
                    lines.len()
                ),
            ));
        }

        let caps = match_line(&LINE1_RE, &lines, 1)?;
        let active = parse_field(caps[0], "active")?;

        let caps = match_line(&LINE3_RE, &lines, 3)?;
        let accepts = parse_field(caps[0], "accepts")?;
        let handled = parse_field(caps[1], "handled")?;
        let requests = parse_field(caps[2], "requests")?;

        let caps = match_line(&LINE4_RE, &lines, 4)?;
        let reading = parse_field(caps[0], "reading")?;
        let writing = parse_field(caps[1], "writing")?;
        let waiting = parse_field(caps[2], "waiting")?;

        Ok(Self {
            active,
            accepts,
            handled,
            requests,
            reading,
            writing,
            waiting,
        })
    }

    pub fn values(&self) -> [(MetricName, u64); 7] {
        [
            (NGINX_ACTIVE, self.active),
            (NGINX_ACCEPTS, self.accepts),
            (NGINX_HANDLED, self.handled),
            (NGINX_REQUESTS, self.requests),
            (NGINX_READING, self.reading),
            (NGINX_WRITING, self.writing),
            (NGINX_WAITING, self.waiting),
        ]
    }
}

// Returns the capture groups of the matched line, without the whole match.
fn match_line<'a>(re: &Regex, lines: &[&'a str], line_no: usize) -> Result<Vec<&'a str>> {
    let line = lines[line_no - 1];
    let caps = re.captures(line).ok_or_else(|| {
        Error::with_kind(
            ErrorKind::Line(line_no),
            format!("unexpected input for line {}: {}", line_no, line),
        )
    })?;

    Ok(caps
        .iter()
        .skip(1)
        .map(|c| c.map_or("", |m| m.as_str()))
        .collect())
}

fn parse_field(s: &str, field: &'static str) -> Result<u64> {
    s.parse::<u64>().map_err(|e| {
        Error::with_kind(ErrorKind::Field(field), format!("invalid {} value", field)).with_source(e)
    })
}

/// Turns status pages into metric records labeled with the monitored
/// host and port.
pub struct StatusParser {
    labels: Labels,
}

impl StatusParser {
    pub fn new(hostname: &str, port: &str) -> Self {
        Self {
            labels: host_port_labels(hostname, port),
        }
    }

    /// All records of one call share a single timestamp taken from `clock`.
    /// Nothing is returned unless every field parsed.
    pub fn parse(&self, content: &[u8], clock: &dyn Clock) -> Result<Vec<MetricRecord>> {
        let fields = ParsedFields::parse(content)?;
        let timestamp = clock.now();

        let mut records = Vec::with_capacity(7);
        for (name, value) in fields.values().iter() {
            let desc = descriptor(name).ok_or_else(|| {
                Error::with_kind(ErrorKind::Field(*name), format!("unknown metric {}", name))
            })?;
            records.push(MetricRecord::new(
                desc,
                Sample::new(*value as f64, self.labels.clone(), timestamp),
            ));
        }

        Ok(records)
    }
}
