use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum BatteryError {
    InvalidThreshold {
        min: f64,
        max: f64,
        reason: String,
    },
    SelfTestFailed {
        failed: usize,
        total: usize,
    },
    Other(anyhow::Error),
}

impl BatteryError {
    pub fn invalid_threshold(min: f64, max: f64, reason: impl Into<String>) -> Self {
        Self::InvalidThreshold {
            min,
            max,
            reason: reason.into(),
        }
    }

    pub fn self_test_failed(failed: usize, total: usize) -> Self {
        Self::SelfTestFailed { failed, total }
    }
}

impl fmt::Display for BatteryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold { min, max, reason } => {
                writeln!(f, "{} Invalid threshold", "✗".red().bold())?;
                writeln!(f, "  {} Bounds: [{}, {}]", "→".blue(), min, max)?;
                writeln!(f, "  {} Error: {}", "→".blue(), reason)?;
                Ok(())
            }
            Self::SelfTestFailed { failed, total } => {
                writeln!(
                    f,
                    "{} Self-test failed: {} of {} scenarios did not match",
                    "✗".red().bold(),
                    failed.to_string().yellow(),
                    total
                )?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for BatteryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Other(err) => err.source(),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for BatteryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, BatteryError>;
