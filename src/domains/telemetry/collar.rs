use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{DomainError, DomainResult};
use crate::domains::telemetry::{BulkDataGenerator, DataPoint, GpsFix, RecordFormat};

/// Longest accepted gap between two sample rounds.
pub const MAX_SAMPLE_SPACING_SECS: i64 = 7 * 24 * 60 * 60;

/// Parameters of the simulated herd.
#[derive(Debug, Clone, PartialEq)]
pub struct CollarSettings {
    /// Samples produced for every animal in one batch.
    pub fixes_per_elk: usize,
    pub center_latitude: f64,
    pub center_longitude: f64,
    /// Maximum initial offset from the herd center, in degrees.
    pub spread_degrees: f64,
    /// Maximum random-walk step between two samples, in degrees.
    pub step_degrees: f64,
    pub sample_spacing: Duration,
    pub seed: Option<u64>,
    pub format: RecordFormat,
}

impl Default for CollarSettings {
    fn default() -> Self {
        Self {
            fixes_per_elk: 1,
            center_latitude: 44.6,
            center_longitude: -110.5,
            spread_degrees: 0.05,
            step_degrees: 0.001,
            sample_spacing: Duration::seconds(20),
            seed: None,
            format: RecordFormat::Csv,
        }
    }
}

impl CollarSettings {
    pub fn validate(&self) -> DomainResult<()> {
        let invalid = |reason: &str| {
            Err(DomainError::InvalidSettings {
                reason: reason.to_string(),
            })
        };
        if self.fixes_per_elk == 0 {
            return invalid("fixes_per_elk must be at least 1");
        }
        if !(-90.0..=90.0).contains(&self.center_latitude) {
            return invalid("center_latitude must lie within [-90, 90]");
        }
        if !(-180.0..=180.0).contains(&self.center_longitude) {
            return invalid("center_longitude must lie within [-180, 180]");
        }
        if !self.spread_degrees.is_finite() || self.spread_degrees < 0.0 {
            return invalid("spread_degrees must be a non-negative number");
        }
        if !self.step_degrees.is_finite() || self.step_degrees < 0.0 {
            return invalid("step_degrees must be a non-negative number");
        }
        if self.sample_spacing < Duration::zero() {
            return invalid("sample_spacing must not be negative");
        }
        if self.sample_spacing.num_seconds() > MAX_SAMPLE_SPACING_SECS {
            return invalid("sample_spacing must not exceed one week");
        }
        Ok(())
    }
}

/// Built-in bulk data generator: scatters the herd around a center point and
/// random-walks every collar for `fixes_per_elk` rounds.
pub struct CollarDataGenerator {
    settings: CollarSettings,
    start_time: Option<DateTime<Utc>>,
}

impl CollarDataGenerator {
    pub fn new(settings: CollarSettings) -> DomainResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            start_time: None,
        })
    }

    /// Pin the timestamp of the first sample round instead of using the wall clock.
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn generate_fixes(&self, count: usize) -> DomainResult<Vec<GpsFix>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let herd_size = u32::try_from(count).map_err(|_| DomainError::InvalidSettings {
            reason: format!("cannot simulate {} animals", count),
        })?;

        let mut rng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let s = &self.settings;
        let start = self.start_time.unwrap_or_else(Utc::now);

        let mut positions: Vec<(f64, f64)> = (0..herd_size)
            .map(|_| {
                (
                    clamp_latitude(s.center_latitude + rng.gen_range(-s.spread_degrees..=s.spread_degrees)),
                    wrap_longitude(s.center_longitude + rng.gen_range(-s.spread_degrees..=s.spread_degrees)),
                )
            })
            .collect();

        let mut fixes = Vec::with_capacity(count * s.fixes_per_elk);
        for round in 0..s.fixes_per_elk {
            let rounds = i32::try_from(round).map_err(|_| DomainError::InvalidSettings {
                reason: format!("too many fixes per elk: {}", s.fixes_per_elk),
            })?;
            let recorded_at = s
                .sample_spacing
                .checked_mul(rounds)
                .and_then(|offset| start.checked_add_signed(offset))
                .ok_or_else(|| DomainError::InvalidSettings {
                    reason: format!("sample round {} falls outside the representable time range", round),
                })?;
            for (idx, position) in positions.iter_mut().enumerate() {
                if round > 0 {
                    position.0 = clamp_latitude(position.0 + rng.gen_range(-s.step_degrees..=s.step_degrees));
                    position.1 = wrap_longitude(position.1 + rng.gen_range(-s.step_degrees..=s.step_degrees));
                }
                fixes.push(GpsFix {
                    elk_id: idx as u32 + 1,
                    latitude: position.0,
                    longitude: position.1,
                    recorded_at,
                });
            }
        }
        Ok(fixes)
    }
}

impl BulkDataGenerator for CollarDataGenerator {
    fn generate_bulk_data(&self, count: usize) -> DomainResult<Vec<DataPoint>> {
        self.generate_fixes(count)?
            .iter()
            .map(|fix| fix.to_data_point(self.settings.format))
            .collect()
    }
}

fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}

fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}
