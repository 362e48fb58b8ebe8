use crate::error::ChecksumError;
use crate::model::Row;
use crate::options::ChecksumOption;
use crate::util::{combine, xor_pattern, Checksum};
use std::fmt::{Display, Formatter};

/// A checkpoint line: `length` workers starting at worker ID `start`.
///
/// Workers queue in `length` rows of `length` workers, numbered consecutively
/// from `start`. In row `r` only the first `length - r` workers are checked
/// before the automatic review kicks in, so the checked workers form a
/// triangle:
///
/// ```text
/// start = 0, length = 3
///   0 1 2 /
///   3 4 / 5
///   6 / 7 8
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CheckpointLine {
    start: i64,
    length: i64,
}

impl CheckpointLine {
    /// Validate the line against the bounds of the space station.
    pub fn new(start: i64, length: i64) -> Result<Self, ChecksumError> {
        Self::with_option(start, length, &ChecksumOption::station())
    }

    /// Validate the line against custom bounds. Bounds that fail
    /// [`ChecksumOption::validate`] reject every line.
    pub fn with_option(start: i64, length: i64, option: &ChecksumOption) -> Result<Self, ChecksumError> {
        let max_worker_id = option.max_worker_id;
        let reason = if let Err(e) = option.validate() {
            Some(format!("invalid checksum option: {}", e))
        } else if start < 0 || start > max_worker_id {
            Some(format!("the first worker ID must be between 0 and {} inclusive", max_worker_id))
        } else if length < option.min_length {
            Some(format!("the checkpoint line must be at least {} worker long", option.min_length))
        } else if length > max_worker_id - start {
            Some(format!("the last worker ID must not exceed {}", max_worker_id))
        } else {
            None
        };
        match reason {
            Some(reason) => {
                tracing::warn!("rejected checkpoint line (start={}, length={}): {}", start, length, reason);
                Err(ChecksumError::invalid_argument(reason, start, length))
            }
            None => Ok(CheckpointLine { start, length }),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Exclusive end of the first row.
    pub fn end(&self) -> i64 {
        self.start + self.length
    }

    /// Number of workers that are checked across all rows.
    pub fn worker_count(&self) -> i64 {
        self.length * (self.length + 1) / 2
    }

    pub fn row(&self, index: i64) -> Option<Row> {
        if index < 0 || index >= self.length {
            return None;
        }
        let first = self.start + self.length * index;
        Some(Row::new(index, first, first + self.length - index - 1))
    }

    /// Iterate over the rows of the grid, from the first to the last.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.length).filter_map(move |index| self.row(index))
    }
}

impl Checksum for CheckpointLine {
    /// Iterates over the end values of the rows and assembles the checksum
    /// row-wise with `xor_pattern`, O(length) instead of O(worker_count).
    fn checksum(&self) -> i64 {
        let start = self.start;
        let length = self.length;

        // checkpoint right after the first worker.
        if length == 1 {
            tracing::debug!("checksum of {}: {}", self, start);
            return start;
        }

        // rows 0 and 1 are adjacent and form one range.
        let mut checksum = xor_pattern(start + 2 * (length - 1));
        if start > 1 {
            checksum = combine(checksum, xor_pattern(start - 1));
        }

        for row in 0..length - 2 {
            let row_length = length - 2 - row;
            let prior_row = start + length * (2 + row) - 1;
            checksum = combine(checksum, xor_pattern(prior_row + row_length) ^ xor_pattern(prior_row));
            tracing::trace!("row {} (last={}): checksum={}", row + 2, prior_row + row_length, checksum);
        }

        tracing::debug!("checksum of {}: {}", self, checksum);
        checksum
    }
}

impl Display for CheckpointLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CheckpointLine[start={}, length={}]", self.start, self.length)
    }
}
