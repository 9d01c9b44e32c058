// core/src/stats.rs
use crate::geodesy::{distance_km, speed_from_distance_time};
use crate::models::{Coordinate, WaveInterval, WaveStats};

/// Kinematikk for én bølge: varighet fra endepunktene, segmentfart per
/// nabopar via geodesi. Par med medgått tid <= 0 er degenererte og hoppes
/// over i sin helhet — de teller hverken i fart eller distanse, og
/// aborterer aldri bølgen.
///
/// Garanti: alle felter er endelige og ikke-negative uansett input
/// (duplikatpunkter, null-lengde-segmenter). NB: `average_speed_kph` <=
/// `top_speed_kph` er IKKE garantert eksakt — ulikt beregningsgrunnlag.
pub fn compute_wave_stats(wave: &WaveInterval) -> WaveStats {
    let duration_secs = wave.duration_secs().max(0.0);

    let mut top_speed = 0.0f64;
    let mut speed_sum = 0.0f64;
    let mut valid_pairs = 0usize;
    let mut total_distance = 0.0f64;

    for pair in wave.points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let dt = (b.timestamp - a.timestamp).num_milliseconds() as f64 / 1000.0;
        if dt <= 0.0 {
            // degenerert segment — stille hopp
            continue;
        }

        let dist = distance_km(a.latitude, a.longitude, b.latitude, b.longitude);
        let v = speed_from_distance_time(dist, dt);

        total_distance += dist;
        speed_sum += v;
        valid_pairs += 1;
        if v > top_speed {
            top_speed = v;
        }
    }

    let average_speed = if valid_pairs > 0 {
        speed_sum / valid_pairs as f64
    } else {
        0.0
    };

    let coordinates = wave
        .points
        .iter()
        .map(|p| Coordinate {
            latitude: p.latitude,
            longitude: p.longitude,
        })
        .collect();

    WaveStats {
        start_time: wave.start().timestamp,
        end_time: wave.end().timestamp,
        duration_secs,
        top_speed_kph: top_speed,
        average_speed_kph: average_speed,
        total_distance_km: total_distance,
        coordinates: Some(coordinates),
    }
}
