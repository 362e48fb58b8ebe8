use crate::error::ChecksumError;
use crate::model::CheckpointLine;
use crate::options::ChecksumOption;
use crate::util::Checksum;

/// Computes the security checksum of the checkpoint line that starts at
/// worker `start` and is `length` workers long.
///
/// Fails with [`ChecksumError::InvalidArgument`] unless `0 <= start <= 2_000_000_000`,
/// `length >= 1` and `start + length <= 2_000_000_000`.
///
/// The work is linear in `length`; the largest line takes two billion rows,
/// see `cargo test --release -- --ignored`.
pub fn solution(start: i64, length: i64) -> Result<i64, ChecksumError> {
    solution_with_option(start, length, &ChecksumOption::station())
}

pub fn solution_with_option(start: i64, length: i64, option: &ChecksumOption) -> Result<i64, ChecksumError> {
    let line = CheckpointLine::with_option(start, length, option)?;
    Ok(line.checksum())
}
