use log::{debug, warn};
use simplelog::{ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use structopt::StructOpt;

use eta_logger::{Config, ErrorKind, RoutesErrorKind, RunOutcome};

const DEFAULT_ORIGIN: &'static str = "267 Princeton St, Boston, MA";
const DEFAULT_DESTINATION: &'static str = "425 Waverley Oaks Rd #250, Waltham, MA 02452";
const DEFAULT_TIMEZONE: &'static str = "America/New_York";
const DEFAULT_LOG_FILE: &'static str = "eta_log.csv";

// Distinct exit codes so an external scheduler can tell outcomes apart.
const EXIT_LOGGED: i32 = 0;
const EXIT_FATAL: i32 = 1;
const EXIT_SKIPPED: i32 = 2;
const EXIT_TRANSIENT: i32 = 3;

fn main() {
    let log_config = ConfigBuilder::new().set_time_to_local(true).build();
    if let Err(e) = TermLogger::init(LevelFilter::Info, log_config, TerminalMode::Mixed) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(EXIT_FATAL);
    }
    debug!("logger initialized");

    let args = Cli::from_args();

    let config = match Config::new(
        args.api_key,
        args.origin,
        args.destination,
        &args.timezone,
        args.log_file,
        args.window_start_hour,
        args.window_end_hour,
        Duration::from_secs(args.request_timeout_secs),
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(EXIT_FATAL);
        }
    };

    process::exit(match eta_logger::run(&config) {
        Ok(RunOutcome::Logged(row)) => {
            let summary =
                serde_json::to_string_pretty(&row).unwrap_or_else(|_| format!("{:?}", row));
            println!("{}", summary);
            EXIT_LOGGED
        }
        Ok(RunOutcome::Skipped { local_time }) => {
            println!("[{}] Outside time window; skipping.", local_time);
            EXIT_SKIPPED
        }
        Err(e) => report_failure(&e),
    });
}

fn report_failure(e: &eta_logger::Error) -> i32 {
    match e.kind() {
        ErrorKind::Routes(err) => match err.kind() {
            RoutesErrorKind::Http { status, body } => {
                warn!("transient failure: HTTP status {}", status);
                eprintln!("HTTP error status: {}", status);
                eprintln!("Response text: {}", body);
                EXIT_TRANSIENT
            }
            RoutesErrorKind::Transport(_) => {
                warn!("transient failure: {}", err);
                eprintln!("Transport failure: {}", err);
                EXIT_TRANSIENT
            }
            RoutesErrorKind::NoRoutes => {
                warn!("transient failure: no routes returned");
                eprintln!("No routes returned.");
                EXIT_TRANSIENT
            }
            _ => {
                eprintln!("Route fetch failed: {}", err);
                EXIT_FATAL
            }
        },
        _ => {
            eprintln!("Run failed: {}", e);
            EXIT_FATAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eta_logger::{Error, RoutesError};

    #[test]
    fn test_report_failure_http_is_transient() -> Result<(), Box<dyn std::error::Error>> {
        let response = ureq::Response::new(403, "Forbidden", "PERMISSION_DENIED")?;
        let err = Error::from(RoutesError::from(ureq::Error::Status(403, response)));
        assert_eq!(report_failure(&err), EXIT_TRANSIENT);

        Ok(())
    }
}

#[derive(StructOpt)]
struct Cli {
    #[structopt(long, env = "ROUTES_API_KEY", hide_env_values = true)]
    api_key: String,

    #[structopt(long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    #[structopt(long, default_value = DEFAULT_DESTINATION)]
    destination: String,

    #[structopt(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    #[structopt(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    #[structopt(long, default_value = "5")]
    window_start_hour: u32,

    #[structopt(long, default_value = "20")]
    window_end_hour: u32,

    #[structopt(long, default_value = "15")]
    request_timeout_secs: u64,
}
