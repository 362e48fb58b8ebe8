mod checkpoint_line;
mod row;

pub use self::checkpoint_line::CheckpointLine;
pub use self::row::Row;
