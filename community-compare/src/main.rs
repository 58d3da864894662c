use clap::Parser;
use community_compare::{CommunityComparison, CompareError, FileFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing one membership file per method
    #[arg(long, default_value = "./data")]
    data_dir: String,

    /// Directory the report files are written to (created if absent)
    #[arg(long, default_value = "./report")]
    report_dir: String,

    /// File format of the membership files (csv or parquet)
    #[arg(long, default_value = "csv")]
    format: FileFormat,
}

fn main() -> Result<(), CompareError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let cc = CommunityComparison::new(&args.data_dir, &args.report_dir, args.format)?;
    cc.create_all_reports()
}
