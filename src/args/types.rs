use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding qb_stats.csv, rb_stats.csv, wr_stats.csv and te_stats.csv.
    #[arg(
        short = 'd',
        long,
        value_name = "DATA_DIR",
        default_value = "Data",
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub data_dir: PathBuf,
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Served under /static.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub data_dir: PathBuf,
    pub bind_addr: (String, u16),
    pub static_dir: PathBuf,
}
