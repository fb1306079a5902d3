use crate::error::Result;
use crate::model::MetricRecord;

pub trait Encoder {
    fn encode(&self, records: &[MetricRecord]) -> Result<Vec<u8>>;
}
