mod status;

pub use status::{ParsedFields, StatusParser};
