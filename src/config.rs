use std::env;

use crate::error::DistanceError;
use crate::text::tokenizer::TokenizerKind;

/// Decimal places used for the angle when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Upper bound on decimal places; f64 carries no more than this.
pub const MAX_PRECISION: usize = 15;

/// How the final report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored, human-readable text (default)
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags
/// override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Splitting policy (DOCDIST_TOKENIZER, default alnum)
    pub tokenizer: TokenizerKind,
    /// Decimal places for the angle (DOCDIST_PRECISION, default 6)
    pub precision: usize,
    /// Report format (DOCDIST_FORMAT, default text)
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::default(),
            precision: DEFAULT_PRECISION,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set but invalid ones are errors.
    pub fn load() -> Result<Self, DistanceError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DistanceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("DOCDIST_TOKENIZER") {
            config.tokenizer = value.parse()?;
        }
        if let Some(value) = lookup("DOCDIST_PRECISION") {
            config.precision = parse_precision(&value)?;
        }
        if let Some(value) = lookup("DOCDIST_FORMAT") {
            config.format = match value.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => {
                    return Err(DistanceError::InvalidConfig(format!(
                        "DOCDIST_FORMAT must be 'text' or 'json', got '{other}'"
                    )))
                }
            };
        }

        Ok(config)
    }

    /// Check a precision supplied from the command line.
    pub fn set_precision(&mut self, precision: usize) -> Result<(), DistanceError> {
        if precision > MAX_PRECISION {
            return Err(DistanceError::InvalidConfig(format!(
                "precision must be at most {MAX_PRECISION}, got {precision}"
            )));
        }
        self.precision = precision;
        Ok(())
    }
}

fn parse_precision(value: &str) -> Result<usize, DistanceError> {
    let precision: usize = value.trim().parse().map_err(|_| {
        DistanceError::InvalidConfig(format!(
            "DOCDIST_PRECISION must be a non-negative integer, got '{value}'"
        ))
    })?;
    if precision > MAX_PRECISION {
        return Err(DistanceError::InvalidConfig(format!(
            "DOCDIST_PRECISION must be at most {MAX_PRECISION}, got {precision}"
        )));
    }
    Ok(precision)
}
