use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::workstation::errors::WorkstationStatusError;

/// A physical workstation on the floor grid.
#[derive(Debug, Clone)]
pub struct Workstation {
    pub id: WorkstationId,
    pub name: String,
    pub status: WorkstationStatus,
    pub grid_x: i32,
    pub grid_y: i32,
    pub created_at: DateTime<Utc>,
}

/// Workstation fields known before the store assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewWorkstation {
    pub name: String,
    pub status: WorkstationStatus,
    pub grid_x: i32,
    pub grid_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkstationId(pub i32);

impl fmt::Display for WorkstationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkstationStatus {
    Operational,
    UnderMaintenance,
    Retired,
}

impl WorkstationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkstationStatus::Operational => "OPERATIONAL",
            WorkstationStatus::UnderMaintenance => "UNDER_MAINTENANCE",
            WorkstationStatus::Retired => "RETIRED",
        }
    }
}

impl FromStr for WorkstationStatus {
    type Err = WorkstationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPERATIONAL" => Ok(WorkstationStatus::Operational),
            "UNDER_MAINTENANCE" => Ok(WorkstationStatus::UnderMaintenance),
            "RETIRED" => Ok(WorkstationStatus::Retired),
            other => Err(WorkstationStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for WorkstationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
