//! Output format value object

use serde::{Deserialize, Serialize};

/// How a decoded result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled card with every field (default)
    #[default]
    Full,
    /// Hidden meaning only
    Brief,
    /// JSON object
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "brief" => Ok(OutputFormat::Brief),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(OutputFormat::default(), OutputFormat::Full);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Brief).unwrap();
        assert_eq!(json, "\"brief\"");
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("FULL".parse::<OutputFormat>(), Ok(OutputFormat::Full));
        assert!("synthesis".parse::<OutputFormat>().is_err());
    }
}
