// core/tests/test_segmenter.rs

use chrono::{DateTime, Duration, NaiveDate, Utc};
use surfgraph_core::models::TrackPoint;
use surfgraph_core::segmenter::{finish, segment_waves, step, SegmenterConfig, SegmenterState};

fn base() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2026, 8, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

/// Punkt `secs` sekunder etter base, med litt lat-drift så geodesien har
/// noe å regne på.
fn pt(secs: i64, speed_kph: f64) -> TrackPoint {
    TrackPoint {
        timestamp: base() + Duration::seconds(secs),
        latitude: 34.0 + 0.00005 * secs as f64,
        longitude: -118.24,
        speed_kph,
    }
}

fn cfg() -> SegmenterConfig {
    // Referanseverdiene: start 10.5, end 3.0, gap 2 s, min varighet 3 s
    SegmenterConfig::default()
}

#[test]
fn flat_zero_speed_track_gives_no_waves() {
    // 60 sekunder i ro er ikke en feil — bare null bølger
    let points: Vec<TrackPoint> = (0..=60).map(|s| pt(s, 0.0)).collect();
    let waves = segment_waves(&points, &cfg());
    assert!(waves.is_empty());
}

#[test]
fn single_wave_ends_at_first_drop_point() {
    // 15 km/t i 8 sek, så 1 km/t i 5 sek (forbi 2 s gap-toleranse)
    let mut points: Vec<TrackPoint> = (0..=8).map(|s| pt(s, 15.0)).collect();
    points.extend((9..=13).map(|s| pt(s, 1.0)));

    let waves = segment_waves(&points, &cfg());

    assert_eq!(waves.len(), 1);
    // Bølgen slutter ved punktet der farten først falt (t=9);
    // etterfølgende lavfartspunkter tilhører gapet
    assert_eq!(waves[0].points.len(), 10);
    assert!((waves[0].duration_secs() - 9.0).abs() < 1e-9);
    assert_eq!(waves[0].start().timestamp, base());
}

#[test]
fn short_dip_within_gap_tolerance_is_absorbed() {
    // Over terskel, 1 sek dip under end-terskel, så 6 sek til over —
    // én bølge over hele spennet, ikke to
    let mut points: Vec<TrackPoint> = (0..=7).map(|s| pt(s, 15.0)).collect();
    points.push(pt(8, 1.0)); // dip
    points.extend((9..=14).map(|s| pt(s, 15.0)));

    let waves = segment_waves(&points, &cfg());

    assert_eq!(waves.len(), 1);
    assert!((waves[0].duration_secs() - 14.0).abs() < 1e-9);
    // Dip-punktet inngår i bølgen
    assert!(waves[0].points.iter().any(|p| p.speed_kph == 1.0));
}

#[test]
fn track_starting_above_threshold_starts_wave_at_first_point() {
    let points: Vec<TrackPoint> = (0..=5).map(|s| pt(s, 20.0)).collect();

    let waves = segment_waves(&points, &cfg());

    assert_eq!(waves.len(), 1);
    assert_eq!(waves[0].start().timestamp, base());
    assert_eq!(waves[0].points.len(), 6);
}

#[test]
fn trailing_in_wave_is_finalized_at_end_of_stream() {
    let mut points: Vec<TrackPoint> = (0..=3).map(|s| pt(s, 0.0)).collect();
    points.extend((4..=10).map(|s| pt(s, 12.0)));

    let waves = segment_waves(&points, &cfg());

    assert_eq!(waves.len(), 1);
    assert!((waves[0].duration_secs() - 6.0).abs() < 1e-9);
}

#[test]
fn gap_exactly_equal_to_tolerance_has_not_expired() {
    // Recovery ved elapsed == gap skal fortsette bølgen (strengt
    // større-enn utløser finalisering)
    let mut points: Vec<TrackPoint> = (0..=4).map(|s| pt(s, 15.0)).collect();
    points.push(pt(5, 1.0)); // drop ved t=5
    points.push(pt(6, 1.0)); // elapsed 1
    points.push(pt(7, 15.0)); // elapsed 2 == gap → ikke utløpt, recovery
    points.extend((8..=10).map(|s| pt(s, 15.0)));

    let waves = segment_waves(&points, &cfg());

    assert_eq!(waves.len(), 1);
    assert!((waves[0].duration_secs() - 10.0).abs() < 1e-9);
}

#[test]
fn duplicate_timestamps_never_expire_the_gap_alone() {
    let mut points: Vec<TrackPoint> = (0..=4).map(|s| pt(s, 15.0)).collect();
    points.push(pt(5, 1.0)); // drop
    // Tre punkter med identisk timestamp som fallet (elapsed 0)
    points.push(pt(5, 1.0));
    points.push(pt(5, 1.0));
    points.push(pt(6, 15.0)); // recovery innen gapet

    let waves = segment_waves(&points, &cfg());

    assert_eq!(waves.len(), 1, "null-varighet gap skal aldri finalisere");
    assert!((waves[0].duration_secs() - 6.0).abs() < 1e-9);
}

#[test]
fn expiry_point_is_reevaluated_and_can_start_next_wave() {
    let mut points: Vec<TrackPoint> = (0..=5).map(|s| pt(s, 15.0)).collect();
    points.push(pt(6, 1.0)); // drop ved t=6
    // Stille til t=9; punktet ved t=9 er selv raskt (elapsed 3 > gap 2)
    points.push(pt(9, 20.0));
    points.extend((10..=14).map(|s| pt(s, 20.0)));

    let waves = segment_waves(&points, &cfg());

    assert_eq!(waves.len(), 2);
    // Første bølge slutter ved fallpunktet t=6
    assert!((waves[0].duration_secs() - 6.0).abs() < 1e-9);
    // Utløserpunktet t=9 ble første punkt i neste bølge
    assert_eq!(waves[1].start().timestamp, base() + Duration::seconds(9));
    assert!((waves[1].duration_secs() - 5.0).abs() < 1e-9);
}

#[test]
fn waves_shorter_than_minimum_duration_are_discarded() {
    // Kandidat på 2 sek (< min 3 sek) forkastes stille
    let mut points: Vec<TrackPoint> = vec![pt(0, 15.0), pt(1, 15.0), pt(2, 1.0)];
    points.extend((3..=6).map(|s| pt(s, 1.0)));

    let waves = segment_waves(&points, &cfg());
    assert!(waves.is_empty());
}

#[test]
fn emitted_waves_are_nonoverlapping_ordered_and_valid() {
    // Blandet spor med to klare rides og støy imellom
    let mut points: Vec<TrackPoint> = Vec::new();
    points.extend((0..=3).map(|s| pt(s, 0.5)));
    points.extend((4..=12).map(|s| pt(s, 14.0)));
    points.extend((13..=20).map(|s| pt(s, 0.5)));
    points.extend((21..=29).map(|s| pt(s, 18.0)));
    points.extend((30..=33).map(|s| pt(s, 0.5)));

    let c = cfg();
    let waves = segment_waves(&points, &c);

    assert_eq!(waves.len(), 2);
    for w in &waves {
        assert!(w.points.len() >= 2);
        assert!(w.duration_secs() >= c.min_wave_duration_secs);
    }
    for pair in waves.windows(2) {
        assert!(
            pair[0].end().timestamp < pair[1].start().timestamp,
            "bølger skal være ikke-overlappende og ordnet etter starttid"
        );
    }
}

#[test]
fn step_transitions_unit_by_unit() {
    let c = cfg();

    // Searching + sakte punkt → fortsatt Searching
    let (state, wave) = step(SegmenterState::Searching, &pt(0, 2.0), &c);
    assert_eq!(state, SegmenterState::Searching);
    assert!(wave.is_none());

    // Searching + raskt punkt → InWave med punktet som kandidatstart
    let (state, wave) = step(SegmenterState::Searching, &pt(1, 12.0), &c);
    assert!(wave.is_none());
    match &state {
        SegmenterState::InWave { points } => assert_eq!(points.len(), 1),
        other => panic!("forventet InWave, fikk {:?}", other),
    }

    // InWave + fall under end-terskel → PotentialEnd med drop-tid
    let (state, wave) = step(state, &pt(2, 1.0), &c);
    assert!(wave.is_none());
    match &state {
        SegmenterState::PotentialEnd {
            points,
            kept,
            drop_time,
        } => {
            assert_eq!(points.len(), 2);
            assert_eq!(*kept, 2);
            assert_eq!(*drop_time, base() + Duration::seconds(2));
        }
        other => panic!("forventet PotentialEnd, fikk {:?}", other),
    }

    // finish i Searching gir ingenting
    assert!(finish(SegmenterState::Searching, &c).is_none());
}

#[test]
fn end_of_stream_in_potential_end_uses_same_end_point_rule() {
    let mut points: Vec<TrackPoint> = (0..=6).map(|s| pt(s, 15.0)).collect();
    points.push(pt(7, 1.0)); // drop
    points.push(pt(8, 1.0)); // fortsatt under — strømmen slutter her

    let waves = segment_waves(&points, &cfg());

    assert_eq!(waves.len(), 1);
    // Slutt ved fallpunktet t=7, ikke t=8
    assert_eq!(
        waves[0].end().timestamp,
        base() + Duration::seconds(7)
    );
}
