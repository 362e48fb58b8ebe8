mod checksum;
mod xor;

pub use self::checksum::combine;
pub use self::checksum::Checksum;
pub use self::xor::xor_pattern;
pub use self::xor::xor_range;
