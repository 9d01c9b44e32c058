use crate::segmenter::SegmenterConfig;
use std::error::Error;
use std::path::Path;

/// Leser inn segmenteringskonfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfigen.
pub fn load_config(path: &str) -> Result<SegmenterConfig, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let config: SegmenterConfig = serde_json::from_str(&contents)?;
        Ok(config)
    } else {
        Ok(SegmenterConfig::default())
    }
}

/// Lagrer segmenteringskonfig til disk som JSON (pretty-print).
pub fn save_config(config: &SegmenterConfig, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}
