// core/src/aggregate.rs
use ordered_float::OrderedFloat;

use crate::models::{LifetimeSummary, SessionSummary, TrackPoint, WaveStats};

/// Maks over en f64-projeksjon; 0.0 for tom samling.
fn max_or_zero<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    items
        .iter()
        .map(|x| OrderedFloat(f(x)))
        .max()
        .map(|m| m.0)
        .unwrap_or(0.0)
}

/// Aggregat for én økt. Ren fold over bølgestatistikken — tåler tom liste
/// og gir da et null-sammendrag i stedet for å feile.
pub fn session_summary(waves: &[WaveStats], track: &[TrackPoint]) -> SessionSummary {
    let total_duration_secs: f64 = waves.iter().map(|w| w.duration_secs).sum();

    // Startposisjon: første punkt i første bølge, ellers sporstart
    let (start_latitude, start_longitude) = waves
        .first()
        .and_then(|w| w.coordinates.as_ref())
        .and_then(|c| c.first())
        .map(|c| (c.latitude, c.longitude))
        .or_else(|| track.first().map(|p| (p.latitude, p.longitude)))
        .unwrap_or((0.0, 0.0));

    SessionSummary {
        wave_count: waves.len(),
        total_duration_secs,
        longest_wave_secs: max_or_zero(waves, |w| w.duration_secs),
        max_speed_kph: max_or_zero(waves, |w| w.top_speed_kph),
        start_latitude,
        start_longitude,
    }
}

/// Livstidsaggregat over allerede-hentede, komplette samlinger fra
/// dokumentlageret (én samling økter, én samling bølger — kjernen vet
/// ingenting om queries eller collections). Alle snitt er 0 når nevneren
/// er 0.
pub fn lifetime_summary(sessions: &[SessionSummary], waves: &[WaveStats]) -> LifetimeSummary {
    let total_sessions = sessions.len();
    let total_waves = waves.len();

    let total_time_secs: f64 = waves.iter().map(|w| w.duration_secs).sum();

    let avg_speed_kph = if total_waves > 0 {
        waves.iter().map(|w| w.average_speed_kph).sum::<f64>() / total_waves as f64
    } else {
        0.0
    };

    let avg_waves_per_session = if total_sessions > 0 {
        total_waves as f64 / total_sessions as f64
    } else {
        0.0
    };

    LifetimeSummary {
        total_sessions,
        total_waves,
        total_time_secs,
        avg_speed_kph,
        longest_wave_secs: max_or_zero(waves, |w| w.duration_secs),
        best_speed_kph: max_or_zero(waves, |w| w.top_speed_kph),
        avg_waves_per_session,
    }
}
