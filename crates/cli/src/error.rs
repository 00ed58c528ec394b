//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: engine error (unknown engine, bad params, bad dimensions)
//! - 11: I/O error (recipe read, PNG write)
//! - 12: input error (bad ramp, bad JSON params, bad recipe)
//! - 13: serialization error

use gradient_noise_core::EngineError;
use thiserror::Error;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// An engine-level error (unknown engine, invalid parameter).
    #[error("{0}")]
    Engine(EngineError),
    /// Reading a recipe or writing the PNG failed.
    #[error("{0}")]
    Io(String),
    /// Unusable user input: ramp name, params JSON, or recipe contents.
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Io(msg) => CliError::Io(msg),
            other => CliError::Engine(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_exit_code_is_10() {
        let err = CliError::Engine(EngineError::InvalidDimensions);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("cannot read recipe.json".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("unknown ramp".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("key must be a string".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_engine_error_io_routes_to_cli_io() {
        let engine_err = EngineError::Io("permission denied".into());
        let cli_err = CliError::from(engine_err);
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("permission denied"));
    }

    #[test]
    fn from_engine_error_non_io_routes_to_cli_engine() {
        let engine_err = EngineError::UnknownEngine("simplex".into());
        let cli_err = CliError::from(engine_err);
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("simplex"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
