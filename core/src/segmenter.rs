// core/src/segmenter.rs
//
// Hysterese-tilstandsmaskinen som deler et rent punktsett i bølger.
// Uttrykt som en ren step-funksjon prosessert venstre→høyre; ingen
// indeks-spoling. Ved gap-utløp revurderes utløserpunktet i Searching
// i samme kall — det kan selv starte neste bølge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{TrackPoint, WaveInterval};

/// Tuning for segmenteringen. Alt er eksternt styrbart; `Default` bærer
/// referanseverdiene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// km/t — over denne regnes punktet som "mulig ride".
    /// Må være strengt større enn `end_speed_kph` (hysterese mot flapping).
    pub start_speed_kph: f64,
    /// km/t — under denne regnes punktet som "mulig stopp".
    pub end_speed_kph: f64,
    /// sek — maks tid under `end_speed_kph` før bølgen endelig avsluttes.
    /// Absorberer korte GPS-dips uten å splitte én ride i to.
    pub gap_tolerance_secs: f64,
    /// sek — kortere bølger forkastes som støy, ikke reelle rides.
    pub min_wave_duration_secs: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            start_speed_kph: 10.5,
            end_speed_kph: 3.0,
            gap_tolerance_secs: 2.0,
            min_wave_duration_secs: 3.0,
        }
    }
}

/// Tilstand mellom punkter. Kandidatpunktene eies av tilstanden selv —
/// maskinen har ingen skjult tilstand utover dette.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SegmenterState {
    /// Ikke i bølge.
    #[default]
    Searching,
    /// Aktiv ride; `points` er kandidaten så langt.
    InWave { points: Vec<TrackPoint> },
    /// Fart falt under end-terskelen; venter på gap-utløp eller recovery.
    /// `kept` = antall punkter t.o.m. første fallpunkt (bølgens slutt hvis
    /// gapet utløper), `drop_time` = tidspunktet fallet skjedde.
    PotentialEnd {
        points: Vec<TrackPoint>,
        kept: usize,
        drop_time: DateTime<Utc>,
    },
}

#[inline]
fn secs_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (b - a).num_milliseconds() as f64 / 1000.0
}

/// Slippfilter: kandidat blir bølge bare med >= 2 punkter og varighet over
/// minimum. For korte kandidater forkastes stille (ingen feil).
fn finalize_candidate(points: Vec<TrackPoint>, cfg: &SegmenterConfig) -> Option<WaveInterval> {
    if points.len() < 2 {
        return None;
    }
    let wave = WaveInterval { points };
    if wave.duration_secs() >= cfg.min_wave_duration_secs {
        Some(wave)
    } else {
        None
    }
}

/// Én overgang: konsumerer ett punkt i timestamp-orden og gir ny tilstand
/// pluss eventuelt en ferdig bølge.
pub fn step(
    state: SegmenterState,
    point: &TrackPoint,
    cfg: &SegmenterConfig,
) -> (SegmenterState, Option<WaveInterval>) {
    match state {
        SegmenterState::Searching => {
            if point.speed_kph > cfg.start_speed_kph {
                // Punktet blir første punkt i en ny kandidat
                (
                    SegmenterState::InWave {
                        points: vec![*point],
                    },
                    None,
                )
            } else {
                (SegmenterState::Searching, None)
            }
        }

        SegmenterState::InWave { mut points } => {
            points.push(*point);
            if point.speed_kph < cfg.end_speed_kph {
                // Fall under end-terskel: husk hvor — etterfølgende
                // lavfartspunkter tilhører gapet, ikke riden
                let kept = points.len();
                (
                    SegmenterState::PotentialEnd {
                        points,
                        kept,
                        drop_time: point.timestamp,
                    },
                    None,
                )
            } else {
                (SegmenterState::InWave { points }, None)
            }
        }

        SegmenterState::PotentialEnd {
            mut points,
            kept,
            drop_time,
        } => {
            let elapsed = secs_between(drop_time, point.timestamp);

            // Strengt større-enn: elapsed == gap er "ikke utløpt ennå".
            // Duplikate timestamps (elapsed 0) kan dermed aldri finalisere
            // på egen hånd.
            if elapsed > cfg.gap_tolerance_secs {
                // Gapet utløp før dette punktet: bølgen slutter ved første
                // fallpunkt. Utløserpunktet revurderes fra Searching — det
                // kan selv starte neste bølge.
                points.truncate(kept);
                let wave = finalize_candidate(points, cfg);
                let (next, _) = step(SegmenterState::Searching, point, cfg);
                (next, wave)
            } else if point.speed_kph > cfg.end_speed_kph {
                // Dippen var støy — bølgen fortsetter uavbrutt,
                // dip-punktene inkludert
                points.push(*point);
                (SegmenterState::InWave { points }, None)
            } else {
                points.push(*point);
                (
                    SegmenterState::PotentialEnd {
                        points,
                        kept,
                        drop_time,
                    },
                    None,
                )
            }
        }
    }
}

/// Slutt på strøm: finaliser eventuell kandidat med samme sluttpunktsregel.
pub fn finish(state: SegmenterState, cfg: &SegmenterConfig) -> Option<WaveInterval> {
    match state {
        SegmenterState::Searching => None,
        SegmenterState::InWave { points } => finalize_candidate(points, cfg),
        SegmenterState::PotentialEnd {
            mut points, kept, ..
        } => {
            points.truncate(kept);
            finalize_candidate(points, cfg)
        }
    }
}

/// Full segmentering: fold av `step` over punktsettet + `finish`.
/// Emitterte bølger er ikke-overlappende og ordnet etter starttid.
pub fn segment_waves(points: &[TrackPoint], cfg: &SegmenterConfig) -> Vec<WaveInterval> {
    let mut state = SegmenterState::Searching;
    let mut waves = Vec::new();

    for p in points {
        let (next, wave) = step(state, p, cfg);
        state = next;
        if let Some(w) = wave {
            waves.push(w);
        }
    }
    if let Some(w) = finish(state, cfg) {
        waves.push(w);
    }

    waves
}
