use anyhow::Error;
use areacode_config::ConfigError;
use areacode_core::{CoreError, ResolveError};
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
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            };
        }
        if let Some(resolve_err) = cause.downcast_ref::<ResolveError>() {
            return resolve_exit_code(*resolve_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

pub fn resolve_exit_code(err: ResolveError) -> u8 {
    match err {
        ResolveError::NotFound => EXIT_NOT_FOUND,
        ResolveError::InvalidNumber => EXIT_INVALID_INPUT,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidAreaCode(_)
        | ConfigError::InvalidArea { .. }
        | ConfigError::UnexpectedAreaField { .. }
        | ConfigError::DuplicateArea(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        exit_status_for, invalid_input, not_found, EXIT_FAILURE, EXIT_INVALID_INPUT,
        EXIT_NOT_FOUND,
    };
    use anyhow::{Context as _, Error};
    use areacode_core::ResolveError;

    #[test]
    fn exit_codes_follow_error_chain() {
        assert_eq!(exit_status_for(&not_found("area code 555")), EXIT_NOT_FOUND);
        assert_eq!(exit_status_for(&invalid_input("bad")), EXIT_INVALID_INPUT);

        let wrapped = Err::<(), _>(ResolveError::InvalidNumber)
            .context("resolve number")
            .unwrap_err();
        assert_eq!(exit_status_for(&wrapped), EXIT_INVALID_INPUT);

        let missing = Error::new(ResolveError::NotFound);
        assert_eq!(exit_status_for(&missing), EXIT_NOT_FOUND);

        let other = Error::msg("boom");
        assert_eq!(exit_status_for(&other), EXIT_FAILURE);
    }
}
