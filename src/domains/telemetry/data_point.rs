use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::DomainResult;

/// One pre-formatted telemetry record. The transmission loop treats it as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPoint(String);

impl DataPoint {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DataPoint {
    fn from(line: String) -> Self {
        Self(line)
    }
}

impl From<&str> for DataPoint {
    fn from(line: &str) -> Self {
        Self(line.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    #[default]
    Csv,
    Json,
}

/// A single GPS position sample from one collar.
#[derive(Debug, Clone, PartialEq)]
pub struct GpsFix {
    pub elk_id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct GpsFixRecord<'a> {
    elk_id: &'a str,
    latitude: f64,
    longitude: f64,
    recorded_at: &'a str,
}

impl GpsFix {
    pub fn collar_name(&self) -> String {
        format!("elk-{}", self.elk_id)
    }

    pub fn to_data_point(&self, format: RecordFormat) -> DomainResult<DataPoint> {
        let name = self.collar_name();
        let timestamp = self.recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true);
        let line = match format {
            RecordFormat::Csv => format!(
                "{},{:.6},{:.6},{}",
                name, self.latitude, self.longitude, timestamp
            ),
            RecordFormat::Json => serde_json::to_string(&GpsFixRecord {
                elk_id: &name,
                latitude: self.latitude,
                longitude: self.longitude,
                recorded_at: &timestamp,
            })?,
        };
        Ok(DataPoint(line))
    }
}
