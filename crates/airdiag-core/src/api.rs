//! Payloads consumed from the change-tracker API.
//!
//! Every endpoint may answer with `{ "error": "..." }` instead of its normal
//! body; [`ApiResponse`] captures that and [`ApiResponse::into_result`] turns
//! it into a [`ModelError::Upstream`].

use crate::changes::{GeometryChange, RunwayChange, TaxiwayChange};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading API payloads.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Invalid payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for payload operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// An API body, or the error object the server sent instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Failure { error: String },
    Success(T),
}

impl<T> ApiResponse<T> {
    /// Short-circuit on the upstream error field.
    pub fn into_result(self) -> ModelResult<T> {
        match self {
            ApiResponse::Failure { error } => Err(ModelError::Upstream(error)),
            ApiResponse::Success(value) => Ok(value),
        }
    }
}

/// Parse a JSON body, failing on an upstream `error` field.
pub fn parse_response<T: DeserializeOwned>(json: &str) -> ModelResult<T> {
    serde_json::from_str::<ApiResponse<T>>(json)?.into_result()
}

/// Read and parse a saved JSON response.
pub fn load_response<T: DeserializeOwned>(path: &Path) -> ModelResult<T> {
    let json = fs::read_to_string(path)
        .map_err(|e| ModelError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    log::debug!("Loaded {} bytes from {}", json.len(), path.display());
    parse_response(&json)
}

/// AIRAC cycle identifier. The API sends either `"2602"` or `2602`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CycleId {
    Number(i64),
    Text(String),
}

impl Default for CycleId {
    fn default() -> Self {
        CycleId::Text("UNKNOWN".to_string())
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleId::Number(n) => write!(f, "{n}"),
            CycleId::Text(s) => f.write_str(s),
        }
    }
}

/// One configured airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub faa_number: Option<String>,
}

/// `GET /api/airports`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirportList {
    #[serde(default)]
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub current_cycle: Option<CycleId>,
}

/// `GET /api/cycles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleInfo {
    pub current: CycleId,
    pub previous: CycleId,
}

/// Change counts reported alongside a comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSummary {
    pub total_changes: u32,
    pub taxiways_added: u32,
    pub taxiways_removed: u32,
    pub taxiways_renamed: u32,
    pub runway_changes: u32,
    pub runway_length_changes: u32,
    pub runway_width_changes: u32,
    pub geometry_changes: u32,
    pub old_label_count: u32,
    pub new_label_count: u32,
    pub old_runway_count: u32,
    pub new_runway_count: u32,
}

/// `GET /api/compare/<airport>`: everything the overlay needs for one
/// airport, passed explicitly to the renderers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(default)]
    pub airport_code: String,
    #[serde(default)]
    pub old_cycle: CycleId,
    #[serde(default)]
    pub new_cycle: CycleId,
    #[serde(default)]
    pub summary: ComparisonSummary,
    #[serde(default)]
    pub taxiway_changes: Vec<TaxiwayChange>,
    #[serde(default)]
    pub runway_changes: Vec<RunwayChange>,
    #[serde(default)]
    pub geometry_changes: Vec<GeometryChange>,
    /// Set when the server compared against synthetic data.
    #[serde(default)]
    pub test_mode: bool,
    #[serde(default)]
    pub test_description: Option<String>,
}

impl ComparisonResult {
    /// Number of change records of every kind.
    pub fn change_count(&self) -> usize {
        self.taxiway_changes.len() + self.runway_changes.len() + self.geometry_changes.len()
    }

    /// True when the comparator found nothing.
    pub fn is_unchanged(&self) -> bool {
        self.change_count() == 0
    }
}

/// `GET /api/historical/<airport>`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalLookup {
    pub found: bool,
    pub current_cycle: Option<CycleId>,
    pub last_change_cycle: Option<CycleId>,
    pub taxiways_added: Vec<String>,
    pub taxiways_removed: Vec<String>,
    /// One line per runway difference, e.g. `10/28 length: 7200 → 7499 ft`.
    pub runway_changes: Vec<String>,
    pub message: Option<String>,
    pub cycles_searched: u32,
}
