use crate::util::{xor_range, Checksum};
use std::fmt::{Display, Formatter};

/// One row of the checkpoint grid.
///
/// index: 0-based row number
/// first: ID of the first worker checked in this row
/// last: ID of the last worker checked in this row, inclusive
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub index: i64,
    pub first: i64,
    pub last: i64,
}

impl Row {
    pub fn new(index: i64, first: i64, last: i64) -> Self {
        Self { index, first, last }
    }

    /// Number of workers checked in this row.
    pub fn len(&self) -> i64 {
        self.last - self.first + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }

    pub fn contains(&self, worker_id: i64) -> bool {
        self.first <= worker_id && worker_id <= self.last
    }

    pub fn xor(&self) -> i64 {
        xor_range(self.first, self.last)
    }
}

impl Checksum for Row {
    fn checksum(&self) -> i64 {
        self.xor()
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row[index={}, first={}, last={}]", self.index, self.first, self.last)
    }
}
