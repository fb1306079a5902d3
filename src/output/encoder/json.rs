use serde::Serialize;

use super::encoder::Encoder;
use crate::error::{Error, ErrorKind, Result};
use crate::model::{MetricKind, MetricRecord, Sample};

// [
//   {
//     "name": "nginx_active",
//     "help": "number of active connections",
//     "type": "gauge",
//     "samples": [
//       {
//         "value": 33.0,
//         "labels": [{"name": "host", "value": "localhost"}, {"name": "port", "value": "81"}],
//         "timestamp": 1622104500123
//       }
//     ]
//   },
//   ...
// ]
#[derive(Serialize)]
struct RecordRepr<'a> {
    name: &'a str,
    help: &'a str,
    #[serde(rename = "type")]
    kind: MetricKind,
    samples: &'a [Sample],
}

impl<'a> From<&'a MetricRecord> for RecordRepr<'a> {
    fn from(record: &'a MetricRecord) -> Self {
        Self {
            name: record.name(),
            help: record.help(),
            kind: record.kind(),
            samples: record.samples(),
        }
    }
}

pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, records: &[MetricRecord]) -> Result<Vec<u8>> {
        let repr: Vec<RecordRepr> = records.iter().map(RecordRepr::from).collect();
        serde_json::to_vec(&repr).map_err(|e| {
            Error::with_kind(ErrorKind::Output, "JSON serialization failed").with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::model::{descriptor, host_port_labels};

    #[test]
    fn test_encode_records() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let records = vec![MetricRecord::new(
            descriptor("nginx_accepts").ok_or("unknown metric")?,
            Sample::new(1237.0, host_port_labels("localhost", "81"), 1622104500123),
        )];

        let buf = JsonEncoder::new().encode(&records)?;
        let actual: Value = serde_json::from_slice(&buf)?;

        assert_eq!(
            actual,
            json!([{
                "name": "nginx_accepts",
                "help": "accepted connections",
                "type": "counter",
                "samples": [{
                    "labels": [
                        {"name": "host", "value": "localhost"},
                        {"name": "port", "value": "81"}
                    ],
                    "value": 1237.0,
                    "timestamp": 1622104500123i64
                }]
            }])
        );
        Ok(())
    }
}
