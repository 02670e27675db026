use anyhow::Error;
use intake_config::ConfigError;
use intake_core::time::TimeParseError;
use intake_core::CoreError;
use intake_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            });
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if cause.downcast_ref::<CoreError>().is_some()
            || cause.downcast_ref::<TimeParseError>().is_some()
        {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::Core
        | StoreErrorKind::InvalidBackupPath
        | StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::Io
        | StoreErrorKind::Sql
        | StoreErrorKind::Decode
        | StoreErrorKind::Encode
        | StoreErrorKind::UpdateSkipped
        | StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidDatetimeFormat(_)
        | ConfigError::InvalidTakenBy
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_code_for, invalid_input, not_found};
    use anyhow::Context as _;
    use intake_core::CoreError;
    use intake_store::error::StoreError;
    use std::process::ExitCode;

    #[test]
    fn validation_errors_map_to_invalid_input() {
        let err: anyhow::Error = StoreError::Core(CoreError::EmptyName).into();
        assert_eq!(exit_code_for(&err), ExitCode::from(3));
        assert_eq!(exit_code_for(&invalid_input("bad")), ExitCode::from(3));
    }

    #[test]
    fn not_found_survives_context() {
        let err = Err::<(), _>(not_found("inquiry not found"))
            .context("show inquiry")
            .unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::from(2));
    }
}
