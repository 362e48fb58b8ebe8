/// Computes the XOR of every integer from 0 to `value` inclusively.
///
/// Consecutive XOR repeats with a period of 4: depending on `value % 4` the
/// result is `value`, `1`, `value + 1` or `0`. Negative values use their
/// non-negative residue.
pub fn xor_pattern(value: i64) -> i64 {
    match value.rem_euclid(4) {
        0 => value,
        1 => 1,
        2 => value + 1,
        _ => 0,
    }
}

/// XOR of every integer in `[low, high]`, `0` when the range is empty.
pub fn xor_range(low: i64, high: i64) -> i64 {
    if high < low {
        return 0;
    }
    if low <= 0 {
        return xor_pattern(high);
    }
    xor_pattern(high) ^ xor_pattern(low - 1)
}
