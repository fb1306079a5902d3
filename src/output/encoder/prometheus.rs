use std::fmt::Write;

use super::encoder::Encoder;
use crate::error::{Error, ErrorKind, Result};
use crate::model::{MetricRecord, SampleValue};

// Prometheus text exposition format, one block per record:
//
// # HELP nginx_active number of active connections
// # TYPE nginx_active gauge
// nginx_active{host="localhost",port="81"} 33 1622104500123
pub struct PromTextEncoder {}

impl PromTextEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn encode_record(&self, out: &mut String, record: &MetricRecord) -> std::fmt::Result {
        writeln!(out, "# HELP {} {}", record.name(), escape_help(record.help()))?;
        writeln!(out, "# TYPE {} {}", record.name(), record.kind())?;

        for sample in record.samples() {
            out.push_str(record.name());

            if !sample.labels().is_empty() {
                let labels: Vec<String> = sample
                    .labels()
                    .iter()
                    .map(|l| format!("{}=\"{}\"", l.name(), escape_label_value(l.value())))
                    .collect();
                write!(out, "{{{}}}", labels.join(","))?;
            }

            writeln!(
                out,
                " {} {}",
                format_value(sample.value()),
                sample.timestamp()
            )?;
        }

        Ok(())
    }
}

impl Default for PromTextEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for PromTextEncoder {
    fn encode(&self, records: &[MetricRecord]) -> Result<Vec<u8>> {
        let mut out = String::new();
        for record in records {
            self.encode_record(&mut out, record).map_err(|e| {
                Error::with_kind(ErrorKind::Output, "text encoding failed").with_source(e)
            })?;
        }
        Ok(out.into_bytes())
    }
}

fn escape_help(s: &str) -> String {
    s.replace('\\', r"\\").replace('\n', r"\n")
}

fn escape_label_value(s: &str) -> String {
    escape_help(s).replace('"', "\\\"")
}

// Shortest representation, in exponent form when the decimal exponent is
// below -4 or at least 6, the same way Prometheus' own text encoder does.
fn format_value(v: SampleValue) -> String {
    if v.is_nan() {
        return "NaN".to_owned();
    }
    if v.is_infinite() {
        let inf = if v > 0.0 { "+Inf" } else { "-Inf" };
        return inf.to_owned();
    }
    if v == 0.0 {
        return "0".to_owned();
    }

    let sci = format!("{:e}", v);
    let (mantissa, exp) = match sci.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
        Some((mantissa, Ok(exp))) => (mantissa, exp),
        _ => return v.to_string(),
    };

    if exp < -4 || exp >= 6 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        v.to_string()
    }
}
