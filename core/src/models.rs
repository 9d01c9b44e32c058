use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ett telemetri-punkt etter inntak. Immutabelt videre i pipelinen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,  // grader [-90, 90]
    pub longitude: f64, // grader [-180, 180]
    pub speed_kph: f64, // km/t, >= 0 (devicerapportert eller avledet)
}

/// En sammenhengende serie TrackPoints identifisert som én bølge (ride).
/// Invariant: punktene er en kontinuerlig delsekvens av sporet, tidsordnet,
/// lengde >= 2.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveInterval {
    pub points: Vec<TrackPoint>,
}

impl WaveInterval {
    pub fn start(&self) -> &TrackPoint {
        &self.points[0]
    }

    pub fn end(&self) -> &TrackPoint {
        &self.points[self.points.len() - 1]
    }

    /// Varighet i sekunder (siste - første timestamp).
    pub fn duration_secs(&self) -> f64 {
        let ms = (self.end().timestamp - self.start().timestamp).num_milliseconds();
        ms as f64 / 1000.0
    }
}

/// Lat/lon-par for visning av bølgebanen nedstrøms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,  // grader
    pub longitude: f64, // grader
}

/// Beregnet sammendrag for én bølge. Persisteres av ekstern collaborator,
/// muteres aldri (korreksjon = erstatning).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_secs: f64,     // sek, >= 0
    pub top_speed_kph: f64,     // km/t, maks segmentfart
    pub average_speed_kph: f64, // km/t, snitt av segmentfarter
    pub total_distance_km: f64, // km, sum av gyldige segmenter
    /// Full bane for kartvisning; None når kallsiden ikke trenger den.
    pub coordinates: Option<Vec<Coordinate>>,
}

/// Aggregat over alle bølger i én økt.
/// total_duration_secs er sum av bølgevarigheter, ikke veggklokke-spennet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionSummary {
    pub wave_count: usize,
    pub total_duration_secs: f64,
    pub longest_wave_secs: f64,
    pub max_speed_kph: f64,
    pub start_latitude: f64,  // første punkt i første bølge, ev. sporstart
    pub start_longitude: f64,
}

/// Aggregat over alle økter for én bruker.
/// Alle snitt er definert som 0 når nevneren er 0 — aldri NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LifetimeSummary {
    pub total_sessions: usize,
    pub total_waves: usize,
    pub total_time_secs: f64,
    pub avg_speed_kph: f64,
    pub longest_wave_secs: f64,
    pub best_speed_kph: f64,
    pub avg_waves_per_session: f64,
}
