use std::fmt;

use serde::Serialize;

use super::labels::Labels;
use super::timestamp::Timestamp;

pub type MetricName = &'static str;

pub type SampleValue = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub name: MetricName,
    pub help: &'static str,
    pub kind: MetricKind,
}

pub const NGINX_ACTIVE: MetricName = "nginx_active";
pub const NGINX_ACCEPTS: MetricName = "nginx_accepts";
pub const NGINX_HANDLED: MetricName = "nginx_handled";
pub const NGINX_REQUESTS: MetricName = "nginx_requests";
pub const NGINX_READING: MetricName = "nginx_reading";
pub const NGINX_WRITING: MetricName = "nginx_writing";
pub const NGINX_WAITING: MetricName = "nginx_waiting";

/// Every metric the check knows about, in output order.
pub static DESCRIPTORS: [MetricDescriptor; 7] = [
    MetricDescriptor {
        name: NGINX_ACTIVE,
        help: "number of active connections",
        kind: MetricKind::Gauge,
    },
    MetricDescriptor {
        name: NGINX_ACCEPTS,
        help: "accepted connections",
        kind: MetricKind::Counter,
    },
    MetricDescriptor {
        name: NGINX_HANDLED,
        help: "handled connections",
        kind: MetricKind::Counter,
    },
    MetricDescriptor {
        name: NGINX_REQUESTS,
        help: "handled requests",
        kind: MetricKind::Counter,
    },
    MetricDescriptor {
        name: NGINX_READING,
        help: "reading requests",
        kind: MetricKind::Gauge,
    },
    MetricDescriptor {
        name: NGINX_WRITING,
        help: "writing requests",
        kind: MetricKind::Gauge,
    },
    MetricDescriptor {
        name: NGINX_WAITING,
        help: "keep-alive connections",
        kind: MetricKind::Gauge,
    },
];

pub fn descriptor(name: &str) -> Option<&'static MetricDescriptor> {
    DESCRIPTORS.iter().find(|d| d.name == name)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    value: SampleValue,
    labels: Labels,
    timestamp: Timestamp,
}

impl Sample {
    pub fn new(value: SampleValue, labels: Labels, timestamp: Timestamp) -> Self {
        Self {
            value,
            labels,
            timestamp,
        }
    }

    #[inline]
    pub fn value(&self) -> SampleValue {
        self.value
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    descriptor: &'static MetricDescriptor,
    samples: Vec<Sample>,
}

impl MetricRecord {
    pub fn new(descriptor: &'static MetricDescriptor, sample: Sample) -> Self {
        Self {
            descriptor,
            samples: vec![sample],
        }
    }

    #[inline]
    pub fn name(&self) -> MetricName {
        self.descriptor.name
    }

    #[inline]
    pub fn help(&self) -> &'static str {
        self.descriptor.help
    }

    #[inline]
    pub fn kind(&self) -> MetricKind {
        self.descriptor.kind
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::host_port_labels;

    #[test]
    fn test_descriptor_table() {
        #[rustfmt::skip]
        let tests = [
            (NGINX_ACTIVE,   MetricKind::Gauge,   "number of active connections"),
            (NGINX_ACCEPTS,  MetricKind::Counter, "accepted connections"),
            (NGINX_HANDLED,  MetricKind::Counter, "handled connections"),
            (NGINX_REQUESTS, MetricKind::Counter, "handled requests"),
            (NGINX_READING,  MetricKind::Gauge,   "reading requests"),
            (NGINX_WRITING,  MetricKind::Gauge,   "writing requests"),
            (NGINX_WAITING,  MetricKind::Gauge,   "keep-alive connections"),
        ];

        assert_eq!(DESCRIPTORS.len(), tests.len());
        for (i, (name, kind, help)) in tests.iter().enumerate() {
            let desc = descriptor(name).expect("known metric");
            assert_eq!(desc.kind, *kind);
            assert_eq!(desc.help, *help);
            assert_eq!(DESCRIPTORS[i].name, *name, "output order");
        }

        assert!(descriptor("nginx_dropped").is_none());
    }

    #[test]
    fn test_metric_kind_display() {
        assert_eq!(MetricKind::Counter.to_string(), "counter");
        assert_eq!(MetricKind::Gauge.to_string(), "gauge");
    }

    #[test]
    fn test_metric_record_single_sample() {
        let desc = descriptor(NGINX_WAITING).expect("known metric");
        let record = MetricRecord::new(
            desc,
            Sample::new(1234.0, host_port_labels("localhost", "81"), 42),
        );

        assert_eq!(record.name(), "nginx_waiting");
        assert_eq!(record.kind(), MetricKind::Gauge);
        assert_eq!(record.samples().len(), 1);
        assert_eq!(record.samples()[0].value(), 1234.0);
        assert_eq!(record.samples()[0].timestamp(), 42);
    }
}
