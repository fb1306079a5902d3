mod labels;
mod metric;
mod timestamp;

pub use labels::*;
pub use metric::*;
pub use timestamp::*;
