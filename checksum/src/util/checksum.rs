pub trait Checksum {
    /// XOR of every worker ID covered by `self`.
    fn checksum(&self) -> i64;
}

pub fn combine(value1: i64, value2: i64) -> i64 {
    value1 ^ value2
}
