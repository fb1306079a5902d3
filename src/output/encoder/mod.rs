mod encoder;
mod json;
mod prometheus;

pub use encoder::Encoder;
pub use json::JsonEncoder;
pub use prometheus::PromTextEncoder;
