use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Placeholder body for calls that carry no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(rename = "str")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uid {
    #[serde(rename = "str")]
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReports {
    pub running_jobs: i32,
}

impl JobReports {
    pub fn from_count(count: usize) -> Self {
        Self {
            running_jobs: i32::try_from(count).unwrap_or(i32::MAX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopScanRequest {
    pub scan_id: String,
}

/// Outcome of a stop request. `success` reports delivery of the stop
/// signal, not termination of the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopScanResult {
    pub success: bool,
    pub description: String,
}

/// What a scan should inspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanInput {
    Path(PathBuf),
    Image(String),
    Container(String),
}

impl ScanInput {
    pub fn kind(&self) -> &'static str {
        match self {
            ScanInput::Path(_) => "path",
            ScanInput::Image(_) => "image",
            ScanInput::Container(_) => "container",
        }
    }
}

/// Start-scan request. Both fields default so that validation happens in
/// the dispatcher rather than as a deserialization rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindRequest {
    #[serde(default)]
    pub scan_id: String,
    #[serde(default)]
    pub input: Option<ScanInput>,
}

impl FindRequest {
    pub fn for_path(scan_id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            scan_id: scan_id.into(),
            input: Some(ScanInput::Path(path.into())),
        }
    }
}

/// Empty acknowledgement; results are reported out of band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindResult {}
