mod config;
mod logbook;
mod routes;

use chrono::{SecondsFormat, Timelike, Utc};
use log::info;
use std::fmt;

pub use config::{Config, Error as ConfigError, ErrorKind as ConfigErrorKind};
pub use logbook::{Error as LogbookError, ErrorKind as LogbookErrorKind, LogRow};
pub use routes::{Error as RoutesError, ErrorKind as RoutesErrorKind, RouteResult};

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl std::error::Error for Error {}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Routes(routes::Error),
    Logbook(logbook::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Routes(ref err) => err.fmt(f),
            ErrorKind::Logbook(ref err) => err.fmt(f),
        }
    }
}

impl From<routes::Error> for Error {
    fn from(e: routes::Error) -> Self {
        Error {
            kind: ErrorKind::Routes(e),
        }
    }
}

impl From<logbook::Error> for Error {
    fn from(e: logbook::Error) -> Self {
        Error {
            kind: ErrorKind::Logbook(e),
        }
    }
}

/// The result of one pass of the pipeline.
#[derive(Debug)]
pub enum RunOutcome {
    /// A row was fetched, converted, and appended to the log.
    Logged(LogRow),
    /// The local time fell outside the allowed window; nothing was fetched
    /// or written.
    Skipped { local_time: String },
}

/// Runs the pipeline once: window gate, route fetch, log append.
pub fn run(config: &Config) -> Result<RunOutcome, Error> {
    let local_time = Utc::now().with_timezone(&config.timezone);

    if !within_window(
        local_time.hour(),
        config.window_start_hour,
        config.window_end_hour,
    ) {
        return Ok(RunOutcome::Skipped {
            local_time: local_time.format("%H:%M").to_string(),
        });
    }

    info!(
        "fetching route from {:?} to {:?}",
        config.origin, config.destination
    );

    let route = routes::compute_route(
        &config.api_key,
        &config.origin,
        &config.destination,
        config.request_timeout,
    )?;

    let timestamp = local_time.to_rfc3339_opts(SecondsFormat::Secs, false);
    let row = build_row(timestamp, config, &route);
    logbook::append_row(&config.log_path, &row)?;

    Ok(RunOutcome::Logged(row))
}

/// True iff `hour` falls in the inclusive-exclusive interval
/// `[start_hour, end_hour)`. Hour-granular: minute 59 of the hour before
/// `start_hour` is out, minute 0 of `end_hour` is out.
fn within_window(hour: u32, start_hour: u32, end_hour: u32) -> bool {
    start_hour <= hour && hour < end_hour
}

fn build_row(timestamp: String, config: &Config, route: &RouteResult) -> LogRow {
    LogRow {
        timestamp,
        origin: config.origin.clone(),
        destination: config.destination.clone(),
        distance_mi: routes::units::meters_to_miles(route.distance_meters),
        eta_min: routes::units::seconds_to_minutes(route.eta_seconds),
        freeflow_min: routes::units::seconds_to_minutes(route.freeflow_seconds),
        route_description: route.description.clone(),
    }
}
