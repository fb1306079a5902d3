use serde::Serialize;

pub type LabelName = String;

pub type LabelValue = String;

pub const LABEL_HOST: &str = "host";
pub const LABEL_PORT: &str = "port";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelPair {
    name: LabelName,
    value: LabelValue,
}

impl LabelPair {
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<LabelName>,
        V: Into<LabelValue>,
    {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

// Ordered, unlike a map: host always renders before port.
pub type Labels = Vec<LabelPair>;

pub fn host_port_labels(hostname: &str, port: &str) -> Labels {
    vec![
        LabelPair::new(LABEL_HOST, hostname),
        LabelPair::new(LABEL_PORT, port),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_port_labels_order() {
        let labels = host_port_labels("myhost.sensu.local", "3456");
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].name(), "host");
        assert_eq!(labels[0].value(), "myhost.sensu.local");
        assert_eq!(labels[1].name(), "port");
        assert_eq!(labels[1].value(), "3456");
    }
}
