use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["input_file", "table_prefix"])))]
pub struct Cli {
    /// Instance in JSON format
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,
    /// Instance as three comma-separated tables: <PREFIX>-items.txt, <PREFIX>-bins.txt and <PREFIX>-alloc-constraint.txt
    #[arg(short, long, value_name = "PREFIX")]
    pub table_prefix: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
