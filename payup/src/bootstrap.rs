use crate::{
    cli::{self, CliError, Invocation, Mode},
    infrastructure::{
        parser::PayupSheetReader,
        sinks::{ConsoleSink, ExportSink, ReportFormat},
    },
};
use payup_application::{MAX_PARTICIPANTS, ReportSink, SettlementProcessor};
use payup_i18n as i18n;
use std::{env, fs, io, path::PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_PEOPLE: u32 = 5;
const DEFAULT_PEOPLE_VAR: &str = "PAYUP_DEFAULT_PEOPLE";
const EXPORT_PATH_VAR: &str = "PAYUP_EXPORT_PATH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_people: u32,
    pub export_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_people = match lookup(DEFAULT_PEOPLE_VAR) {
            None => DEFAULT_PEOPLE,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(people) if (1..=MAX_PARTICIPANTS).contains(&people) => people,
                _ => {
                    tracing::warn!(
                        variable = DEFAULT_PEOPLE_VAR,
                        value = %raw,
                        fallback = DEFAULT_PEOPLE,
                        "Ignoring invalid default participant count"
                    );
                    DEFAULT_PEOPLE
                }
            },
        };
        let export_path = lookup(EXPORT_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            default_people,
            export_path,
        }
    }
}

/// Initialize logging and tracing
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the application with proper error handling
pub fn run() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    init_logging();

    let invocation = cli::parse_args(env::args_os()).unwrap_or_else(|err| err.exit());

    let config = AppConfig::from_env();
    execute(&invocation, &config)
}

fn execute(invocation: &Invocation, config: &AppConfig) -> Result<(), CliError> {
    let format = if invocation.copy_only {
        ReportFormat::Clipboard
    } else {
        ReportFormat::Full
    };

    let mut sinks: Vec<Box<dyn ReportSink>> = vec![Box::new(ConsoleSink::stdout(format))];
    if let Some(path) = &config.export_path {
        sinks.push(Box::new(ExportSink::new(path.clone())));
    }

    let reader = PayupSheetReader;
    let processor = SettlementProcessor::new(&reader, &sinks);

    match &invocation.mode {
        Mode::Sheet(path) => {
            let content = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            let prepared = processor.prepare_sheet(&content)?;
            processor.settle(prepared.headcount, &prepared.entries)?;
        }
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let form = cli::prompt_form(&mut input, &mut output, config.default_people)?;
            let entries = form.normalized();
            processor.settle(form.headcount(), &entries)?;
        }
    }

    if let Some(path) = &config.export_path {
        eprintln!("{}", i18n::exported_to(path.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[rstest]
    #[case::unset(&[], 5)]
    #[case::custom(&[("PAYUP_DEFAULT_PEOPLE", "8")], 8)]
    #[case::zero_falls_back(&[("PAYUP_DEFAULT_PEOPLE", "0")], 5)]
    #[case::garbage_falls_back(&[("PAYUP_DEFAULT_PEOPLE", "many")], 5)]
    #[case::huge_falls_back(&[("PAYUP_DEFAULT_PEOPLE", "4000000000")], 5)]
    fn default_people_from_environment(#[case] vars: &[(&str, &str)], #[case] expected: u32) {
        assert_eq!(config_from(vars).default_people, expected);
    }

    #[rstest]
    #[case::unset(&[], None)]
    #[case::blank(&[("PAYUP_EXPORT_PATH", "  ")], None)]
    #[case::set(&[("PAYUP_EXPORT_PATH", "out.txt")], Some(PathBuf::from("out.txt")))]
    fn export_path_from_environment(
        #[case] vars: &[(&str, &str)],
        #[case] expected: Option<PathBuf>,
    ) {
        assert_eq!(config_from(vars).export_path, expected);
    }
}
