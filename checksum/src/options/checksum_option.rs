use crate::options::error::OptionError;
use anyerror::AnyError;
use clap::Parser;

/// Largest `max_worker_id` for which every row boundary still fits in an `i64`.
pub const MAX_SUPPORTED_WORKER_ID: i64 = 3_000_000_000;

pub const DEFAULT_MAX_WORKER_ID: i64 = 2_000_000_000;
pub const DEFAULT_MIN_LENGTH: i64 = 1;

fn parse_worker_id(src: &str) -> Result<i64, OptionError> {
    let digits: String = src.trim().chars().filter(|c| *c != '_').collect();
    digits.parse::<i64>().map_err(|e| OptionError::InvalidStr {
        reason: e.to_string(),
        parse_str: String::from(src),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Parser)]
pub struct ChecksumOption {
    /// Highest worker ID on the station. Both `start` and `start + length`
    /// must not exceed it.
    /// Default 2_000_000_000
    #[clap(long, env = "QUEUE_CHECKSUM_MAX_WORKER_ID", default_value = "2_000_000_000", value_parser = parse_worker_id)]
    pub max_worker_id: i64,

    /// Shortest checkpoint line accepted.
    #[clap(long, env = "QUEUE_CHECKSUM_MIN_LENGTH", default_value = "1")]
    pub min_length: i64,
}

impl Default for ChecksumOption {
    fn default() -> Self {
        Self::parse_from(Vec::<&'static str>::new())
    }
}

impl ChecksumOption {
    /// The bounds of the space station, same as `ChecksumOption::default()` without parsing.
    pub const fn station() -> Self {
        ChecksumOption {
            max_worker_id: DEFAULT_MAX_WORKER_ID,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Parse options from command line style arguments, the first one being the program name.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let option = Self::try_parse_from(&args).map_err(|e| OptionError::ParseError {
            source: AnyError::new(&e),
            args: args.clone(),
        })?;
        option.validate()?;
        Ok(option)
    }

    pub fn validate(&self) -> Result<(), OptionError> {
        if self.max_worker_id < 0 || self.max_worker_id > MAX_SUPPORTED_WORKER_ID {
            return Err(OptionError::OutOfRange {
                name: "max_worker_id",
                value: self.max_worker_id,
                min: 0,
                max: MAX_SUPPORTED_WORKER_ID,
            });
        }
        if self.min_length < 1 || self.min_length > self.max_worker_id {
            return Err(OptionError::OutOfRange {
                name: "min_length",
                value: self.min_length,
                min: 1,
                max: self.max_worker_id,
            });
        }
        Ok(())
    }
}
