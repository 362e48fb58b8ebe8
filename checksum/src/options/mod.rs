mod checksum_option;
mod error;


pub use self::checksum_option::ChecksumOption;
pub use self::checksum_option::DEFAULT_MAX_WORKER_ID;
pub use self::checksum_option::MAX_SUPPORTED_WORKER_ID;
pub use self::error::OptionError;
