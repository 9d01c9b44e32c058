use surfgraph_core::{load_config, save_config, SegmenterConfig};
use std::fs;

#[test]
fn test_save_and_load_config() {
    let path = "tests/tmp_segmenter_config.json";

    // lag en tuning som avviker fra default
    let config = SegmenterConfig {
        start_speed_kph: 12.0,
        end_speed_kph: 4.0,
        gap_tolerance_secs: 3.5,
        min_wave_duration_secs: 2.0,
    };

    // lagre til disk
    save_config(&config, path).expect("kunne ikke lagre konfig");

    // les tilbake
    let loaded = load_config(path).expect("kunne ikke laste konfig");
    assert_eq!(loaded, config);

    // rydde opp
    fs::remove_file(path).ok();
}

#[test]
fn test_load_missing_config_returns_default() {
    let loaded = load_config("tests/does_not_exist.json").expect("default forventet");
    assert_eq!(loaded, SegmenterConfig::default());
}
