mod error;
mod filter;
mod metadata;
mod report;
mod scanner;
mod types;

use clap::Parser;
use error::{AppError, MAX_PATH_LEN};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use types::FilterConfig;

#[derive(Parser, Debug)]
#[command(version, about = "List a directory with per-file metadata, filtered by age and size", long_about = None)]
struct Args {
    /// Only list entries modified less than DAYS days ago
    #[arg(short = 'y', long = "younger", value_name = "DAYS")]
    younger_than: Option<u64>,

    /// Only list entries modified more than DAYS days ago
    #[arg(short = 'o', long = "older", value_name = "DAYS")]
    older_than: Option<u64>,

    /// Only list entries smaller than BYTES
    #[arg(short = 's', long = "smaller", value_name = "BYTES")]
    smaller_than: Option<u64>,

    /// Only list entries larger than BYTES
    #[arg(short = 'l', long = "larger", value_name = "BYTES")]
    larger_than: Option<u64>,

    /// Directory to list (defaults to the current directory)
    path: Option<PathBuf>,
}

impl Args {
    fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            younger_than: self.younger_than,
            older_than: self.older_than,
            larger_than: self.larger_than,
            smaller_than: self.smaller_than,
        }
    }

    fn target_dir(&self) -> Result<PathBuf, AppError> {
        match &self.path {
            Some(path) => {
                let len = path.as_os_str().len();
                if len > MAX_PATH_LEN {
                    return Err(AppError::PathTooLong { len });
                }
                Ok(path.clone())
            }
            None => {
                log::info!("no path given, assuming the current directory");
                Ok(PathBuf::from("."))
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = args.filter_config();
    let dir = args.target_dir()?;

    let now = filter::capture_now();
    let filter = filter::Filter::new(&config, now);
    if config.is_empty() {
        log::debug!("scan time {now}, no filters");
    } else {
        log::debug!("scan time {now}, predicates {:?}", filter.predicates());
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = scanner::list_directory(&dir, &filter, &mut stdout.lock(), &mut stderr.lock())?;

    log::info!(
        "{}: {} listed, {} filtered out, {} failed",
        dir.display(),
        summary.listed,
        summary.filtered_out,
        summary.failed
    );
    Ok(())
}
