use std::path::PathBuf;

use clap::Parser;

use crate::{domain::theme::Theme, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 16.0
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
        value_name = "PATH",
        help = "Content document to show instead of the configured one"
    )]
    pub content: Option<PathBuf>,

    #[arg(long, value_enum, help = "Initial theme")]
    pub theme: Option<Theme>,

    #[arg(long, help = "Print the whole page as plain text and exit")]
    pub print: bool,

    #[arg(
        long,
        value_name = "COLUMNS",
        default_value_t = 100,
        requires = "print",
        help = "Page width used by --print"
    )]
    pub width: u16,

    #[arg(
        long,
        conflicts_with = "print",
        help = "Validate the content document and exit"
    )]
    pub check: bool,
}
