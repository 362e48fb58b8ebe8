mod error;
mod options;
mod solution;

pub mod model;
pub mod util;

pub use crate::error::ChecksumError;

pub use crate::model::CheckpointLine;
pub use crate::model::Row;

pub use crate::options::ChecksumOption;
pub use crate::options::OptionError;
pub use crate::options::DEFAULT_MAX_WORKER_ID;
pub use crate::options::MAX_SUPPORTED_WORKER_ID;

pub use crate::solution::solution;
pub use crate::solution::solution_with_option;

pub use crate::util::xor_pattern;
pub use crate::util::xor_range;
pub use crate::util::Checksum;
