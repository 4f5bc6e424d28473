use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported film gauge/format keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilmFormatKey {
    Super8,
    Normal8,
    Std16mm,
    Super16,
    #[default]
    Unknown,
}

impl FilmFormatKey {
    pub const ALL: &'static [FilmFormatKey] = &[
        FilmFormatKey::Super8,
        FilmFormatKey::Normal8,
        FilmFormatKey::Std16mm,
        FilmFormatKey::Super16,
        FilmFormatKey::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilmFormatKey::Super8 => "super8",
            FilmFormatKey::Normal8 => "normal8",
            FilmFormatKey::Std16mm => "std16mm",
            FilmFormatKey::Super16 => "super16",
            FilmFormatKey::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FilmFormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilmFormatKey {
    type Err = FilmFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "super8" => Ok(FilmFormatKey::Super8),
            "normal8" => Ok(FilmFormatKey::Normal8),
            "std16mm" => Ok(FilmFormatKey::Std16mm),
            "super16" => Ok(FilmFormatKey::Super16),
            "unknown" => Ok(FilmFormatKey::Unknown),
            _ => Err(FilmFormatParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown film format: {0}")]
pub struct FilmFormatParseError(String);

/// A film stock format with its display name and the frame rates it is
/// commonly shot at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilmFormat {
    pub key: FilmFormatKey,
    pub name: String,
    pub framerates: Vec<f64>,
}

impl FilmFormat {
    /// The built-in format catalogue served by the device.
    pub fn builtin() -> Vec<FilmFormat> {
        vec![
            FilmFormat {
                key: FilmFormatKey::Super8,
                name: "Super8".to_string(),
                framerates: vec![18.0, 24.0],
            },
            FilmFormat {
                key: FilmFormatKey::Normal8,
                name: "8mm Regular".to_string(),
                framerates: vec![18.0, 24.0],
            },
            FilmFormat {
                key: FilmFormatKey::Std16mm,
                name: "16mm Standard".to_string(),
                framerates: vec![24.0],
            },
            FilmFormat {
                key: FilmFormatKey::Super16,
                name: "Super 16".to_string(),
                framerates: vec![24.0],
            },
            FilmFormat {
                key: FilmFormatKey::Unknown,
                name: "Unknown".to_string(),
                framerates: vec![16.0, 18.0, 20.0, 24.0],
            },
        ]
    }
}

/// Descriptive metadata for the film being scanned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilmData {
    /// Date the footage was shot, when known
    pub date: Option<NaiveDate>,
    pub author: String,
    pub description: String,
    pub format: FilmFormat,
    /// Frame rate the footage was shot at
    pub fps: f64,
    /// Film stock name (e.g. Kodachrome 40)
    pub stock: String,
    pub tags: Vec<String>,
}

impl Default for FilmData {
    fn default() -> Self {
        Self {
            date: None,
            author: String::new(),
            description: String::new(),
            format: FilmFormat::builtin().remove(0),
            fps: 18.0,
            stock: String::new(),
            tags: Vec::new(),
        }
    }
}
