//! Validation command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::schema_store;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use soacheck_schemas::{UniqueInstanceNames, ValidationRunner};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Handle the validate command
#[instrument(skip_all, fields(service = ?args.service))]
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let timer = Timer::with_details(
        "validate_command",
        &format!("service: {}", args.service.as_deref().unwrap_or("<working dir>")),
    );

    let store = schema_store(args.schemas_dir.as_deref(), config);
    // A broken schema is a packaging defect; fail before touching any file
    let available = store.preload()?;
    debug!(schemas = available, "Schemas loaded");

    let base_dir = base_dir(&args, config);
    let mut runner = ValidationRunner::for_filesystem(store)?;
    if config.checks.unique_instance_names {
        runner = runner.with_check(UniqueInstanceNames);
    }
    debug!(checks = ?runner.check_names(), base_dir = ?base_dir, "Starting validation run");

    let report = {
        let _entered = timer.span().enter();
        runner.run(args.service.as_deref(), base_dir.as_deref())?
    };
    output.run_report(&report)?;

    if report.passed() {
        info!(files = report.files.len(), "All configuration files passed");
        Ok(())
    } else {
        Err(Error::ValidationFailed {
            failures: report.failures().max(1),
        })
    }
}

/// Base directory for the run: the command line wins, and the configured
/// SOA directory only applies to a named service
fn base_dir(args: &ValidateArgs, config: &Config) -> Option<PathBuf> {
    args.soa_dir.clone().or_else(|| {
        args.service
            .as_ref()
            .and(config.paths.soa_dir.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn args(service: Option<&str>, soa_dir: Option<&str>) -> ValidateArgs {
        ValidateArgs {
            service: service.map(str::to_string),
            soa_dir: soa_dir.map(PathBuf::from),
            schemas_dir: None,
        }
    }

    fn config_with_soa_dir() -> Config {
        let mut config = Config::default();
        config.paths.soa_dir = Some(PathBuf::from("/nail/etc/services"));
        config
    }

    #[test]
    fn test_base_dir_from_args() {
        let base = base_dir(&args(Some("web"), Some("/soa")), &config_with_soa_dir());
        assert_eq!(base, Some(PathBuf::from("/soa")));
    }

    #[test]
    fn test_base_dir_from_config_for_named_service() {
        let base = base_dir(&args(Some("web"), None), &config_with_soa_dir());
        assert_eq!(base, Some(PathBuf::from("/nail/etc/services")));
    }

    #[test]
    fn test_config_soa_dir_ignored_without_service() {
        assert_eq!(base_dir(&args(None, None), &config_with_soa_dir()), None);
    }

    #[test]
    fn test_unresolved_service_reported_once() {
        let stdout = Captured::default();
        let logs = Captured::default();
        let log_sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || log_sink.clone())
            .finish();

        let mut output =
            OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(stdout.clone()));
        let result = tracing::subscriber::with_default(subscriber, || {
            handle_validate(args(Some("ghost"), None), &Config::default(), &mut output)
        });

        assert!(matches!(result, Err(Error::ValidationFailed { failures: 1 })));
        assert_eq!(stdout.contents().matches("UNKNOWN SERVICE").count(), 1);
        assert!(!logs.contents().contains("UNKNOWN SERVICE"), "{}", logs.contents());
    }
}
