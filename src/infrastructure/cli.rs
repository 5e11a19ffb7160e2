use clap::{Parser, ValueEnum};
use strum::{Display, EnumIter};

use crate::utils::version;

/// Which views the host mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ViewSelection {
    Analytics,
    Dashboard,
    #[default]
    All,
}

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_enum,
        help = "Views to mount",
        default_value_t = ViewSelection::All
    )]
    pub view: ViewSelection,
}
