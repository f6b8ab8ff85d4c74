use std::{env, path::Path};

use geo_tour_derive::{CliOptions, CliValue, KvDisplay};
use log::LevelFilter;

use crate::{Error, Result, constants::DEFAULT_OUTLIER_FACTOR};

/// Command line options for the `geo-tour` binary.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct TourOptions {
    /// Point file, one `lat,lng[,label]` per line. Empty means stdin.
    #[cli(long = "input")]
    pub input: String,
    /// Where to write the tour. Empty means stdout.
    #[cli(long = "output")]
    pub output: String,
    /// Output layout.
    #[cli(long = "format", parse_with = "OutputFormat::parse")]
    pub format: OutputFormat,
    /// Legs longer than `average * outlier_threshold` are reported as spikes.
    #[cli(long = "outlier-threshold")]
    pub outlier_threshold: f64,
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    /// Prefix log lines with a millisecond timestamp.
    #[cli(long = "log-timestamp", flag)]
    pub log_timestamp: bool,
    /// Log file. Empty means stderr.
    #[cli(long = "log-output")]
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "format")]
pub enum OutputFormat {
    /// Closed path, one `lat,lng` per line.
    Route,
    Csv,
    #[cli(alias = "text")]
    Summary,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for TourOptions {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            format: OutputFormat::Route,
            outlier_threshold: DEFAULT_OUTLIER_FACTOR,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: false,
            log_output: String::new(),
        }
    }
}

impl TourOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);
            if !options.apply_cli_option(&name, value)? {
                return Err(Error::invalid_input(format!(
                    "Unknown option: --{name}\n\n{}",
                    Self::usage()
                )));
            }
        }

        if !options.outlier_threshold.is_finite() || options.outlier_threshold <= 0.0 {
            return Err(Error::invalid_input("outlier-threshold must be > 0"));
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  geo-tour [options] [--input points.txt]\n",
            "  geo-tour [options] < points.txt\n\n",
            "Input: one point per line as lat,lng[,label]; blank and # lines are skipped.\n\n",
            "Options:\n",
            "  --input <path>\n",
            "  --output <path>\n",
            "  --format <route|csv|summary>\n",
            "  --outlier-threshold <f64>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  geo-tour --format summary < stops.txt\n",
            "  geo-tour --input stops.txt --output route.csv --format csv\n",
            "  geo-tour --log-level=info --log-output run.log < stops.txt\n",
        )
    }

    pub fn input_path(&self) -> Option<&Path> {
        stream_path(&self.input)
    }

    pub fn output_path(&self) -> Option<&Path> {
        stream_path(&self.output)
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        stream_path(&self.log_output)
    }
}

/// Empty or `-` selects the standard stream.
fn stream_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use log::LevelFilter;

    use super::{LogFormat, LogLevel, OutputFormat, TourOptions};

    #[test]
    fn defaults() {
        let options = TourOptions::default();
        assert_eq!(options.format, OutputFormat::Route);
        assert_eq!(options.log_level, LogLevel::Warn);
        assert_eq!(options.outlier_threshold, 10.0);
        assert!(!options.log_timestamp);
        assert!(options.input_path().is_none());
        assert!(options.output_path().is_none());
        assert!(options.log_output_path().is_none());
    }

    #[test]
    fn parse_from_iter_applies_known_cli_options() {
        let options = TourOptions::parse_from_iter([
            "--input=stops.txt",
            "--output",
            "route.csv",
            "--format=csv",
            "--outlier-threshold=4.5",
            "--log-level=debug",
            "--log-format=pretty",
            "--log-timestamp",
            "--log-output=run.log",
        ])
        .expect("parse options");

        assert_eq!(options.input_path(), Some(Path::new("stops.txt")));
        assert_eq!(options.output_path(), Some(Path::new("route.csv")));
        assert_eq!(options.format, OutputFormat::Csv);
        assert_eq!(options.outlier_threshold, 4.5);
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.log_format, LogFormat::Pretty);
        assert!(options.log_timestamp);
        assert_eq!(options.log_output_path(), Some(Path::new("run.log")));
    }

    #[test]
    fn enum_values_accept_aliases_and_any_case() {
        let options = TourOptions::parse_from_iter(["--format=TEXT", "--log-level", "Warning"])
            .expect("parse options");
        assert_eq!(options.format, OutputFormat::Summary);
        assert_eq!(options.log_level, LogLevel::Warn);
    }

    #[test]
    fn enum_values_reject_unknown_names() {
        let err = TourOptions::parse_from_iter(["--format=json"]).expect_err("unknown format");
        assert!(
            err.to_string()
                .contains("Invalid value for --format: json (expected route|csv|summary)")
        );
    }

    #[test]
    fn flags_take_optional_bool_and_negation() {
        let options =
            TourOptions::parse_from_iter(["--log-timestamp=off"]).expect("parse options");
        assert!(!options.log_timestamp);

        let options = TourOptions::parse_from_iter(["--log-timestamp", "--no-log-timestamp"])
            .expect("parse options");
        assert!(!options.log_timestamp);

        let err = TourOptions::parse_from_iter(["--log-timestamp=maybe"])
            .expect_err("invalid bool should fail");
        assert!(
            err.to_string()
                .contains("Invalid boolean for --log-timestamp: maybe")
        );

        let err = TourOptions::parse_from_iter(["--no-log-timestamp=true"])
            .expect_err("negated flag takes no value");
        assert!(err.to_string().contains("does not take a value"));
    }

    #[test]
    fn numeric_options_report_parse_errors() {
        let err = TourOptions::parse_from_iter(["--outlier-threshold=wide"])
            .expect_err("non-numeric threshold");
        assert!(
            err.to_string()
                .contains("Invalid value for --outlier-threshold: wide")
        );

        let err = TourOptions::parse_from_iter(["--outlier-threshold=0"])
            .expect_err("zero threshold");
        assert!(err.to_string().contains("outlier-threshold must be > 0"));
    }

    #[test]
    fn missing_value_is_reported() {
        let err = TourOptions::parse_from_iter(["--input"]).expect_err("missing value");
        assert!(err.to_string().contains("Missing value for --input"));
    }

    #[test]
    fn rejects_unknown_and_positional_arguments() {
        let err = TourOptions::parse_from_iter(["--unknown-opt=1"]).expect_err("unknown");
        assert!(err.to_string().contains("Unknown option: --unknown-opt"));

        let err = TourOptions::parse_from_iter(["stops.txt"]).expect_err("positional");
        assert!(err.to_string().contains("Unexpected argument: stops.txt"));
    }

    #[test]
    fn help_returns_usage_error() {
        let err = TourOptions::parse_from_iter(["-h"]).expect_err("help should short-circuit");
        assert!(err.to_string().contains("Usage:"));
    }

    #[test]
    fn dash_selects_standard_streams() {
        let options = TourOptions::parse_from_iter(["--input=-", "--output=-"])
            .expect("parse options");
        assert!(options.input_path().is_none());
        assert!(options.output_path().is_none());
    }

    #[test]
    fn log_level_maps_to_expected_filter() {
        assert_eq!(LogLevel::Error.to_filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Warn.to_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Trace.to_filter(), LevelFilter::Trace);
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
    }

    #[test]
    fn display_lists_every_option() {
        let text = TourOptions::default().to_string();
        assert!(text.contains("\n\tformat            = route"));
        assert!(text.contains("\n\toutlier_threshold = 10"));
        assert!(text.contains("\n\tlog_timestamp     = false"));
    }
}
