use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "samtally-rs",
    about = "Summarise mapping status, chromosome and mapping-quality distributions of a SAM file",
    version
)]
pub struct Args {
    /// Input SAM file (text)
    pub in_sam: PathBuf,

    /// Minimum mapping quality for the grouped counts [default: 30].
    /// An invalid value is reported and the default is kept.
    #[arg(short = 'm', long = "min-mapq", value_name = "MAPQ")]
    pub min_mapq: Option<String>,

    /// Leave unmapped reads out of the grouped counts
    #[arg(long)]
    pub only_fully_mapped: bool,

    /// Write the report here instead of stdout
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Set logging level to WARN
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
