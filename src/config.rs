use std::time::Duration;

use clap::Parser;

use crate::data::loader::DataSource;
use crate::rotation::{RotationPolicy, DEFAULT_HOLD};

/// Where the dataset is looked for when `--data` is not given.
pub const DEFAULT_DATA: &str = "times.json";

/// Literwatch – the current time, told by literature
#[derive(Parser, Debug)]
#[command(name = "literwatch", version, about)]
pub struct Args {
    /// Dataset to load: a path to a times.json file or an http(s) URL
    #[arg(short, long, default_value = DEFAULT_DATA, value_name = "PATH|URL")]
    pub data: DataSource,

    /// Seconds a quote stays up before another is drawn for the same minute
    #[arg(long, default_value_t = DEFAULT_HOLD.as_secs(), value_name = "SECONDS")]
    pub hold_secs: u64,
}

/// Runtime settings for the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_source: DataSource,
    pub rotation: RotationPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DataSource::File(DEFAULT_DATA.into()),
            rotation: RotationPolicy::default(),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            data_source: args.data,
            rotation: RotationPolicy {
                hold: Duration::from_secs(args.hold_secs),
            },
        }
    }
}
