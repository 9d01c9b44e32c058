pub mod aggregate;
pub mod error;
pub mod geodesy;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod segmenter;
pub mod stats;
pub mod storage;

pub use aggregate::{lifetime_summary, session_summary};
pub use error::PipelineError;
pub use ingest::{ingest_rows, read_rows_csv, IngestReport, RawTrackRow};
pub use models::{
    Coordinate, LifetimeSummary, SessionSummary, TrackPoint, WaveInterval, WaveStats,
};
pub use pipeline::{analyze_session, AnalyzeInputs, AnalyzeOutputs};
pub use segmenter::{segment_waves, SegmenterConfig, SegmenterState};
pub use stats::compute_wave_stats;
pub use storage::{load_config, save_config};
