// core/src/pipeline.rs
use chrono::NaiveDate;
use log::{debug, warn};

use crate::aggregate::session_summary;
use crate::error::PipelineError;
use crate::ingest::{ingest_rows, RawTrackRow};
use crate::models::{SessionSummary, WaveStats};
use crate::segmenter::{segment_waves, SegmenterConfig};
use crate::stats::compute_wave_stats;

/// Eksplisitte argumenter inn — ingen ambient sesjon, tilkobling eller
/// global tilstand. Bruker-id er opak for kjernen og valideres ikke her.
#[derive(Clone)]
pub struct AnalyzeInputs<'a> {
    pub user_id: &'a str,
    /// Kalenderdato som ankrer radenes klokkeslett (øktens dato).
    pub session_date: NaiveDate,
    pub rows: &'a [RawTrackRow],
    pub config: SegmenterConfig,
}

#[derive(Debug, Clone)]
pub struct AnalyzeOutputs {
    pub user_id: String,
    pub summary: SessionSummary,
    pub waves: Vec<WaveStats>,
    /// Rader droppet under inntak — diagnostikk, aldri en brukerfeil.
    pub skipped_rows: usize,
}

/// Full pipeline: rårader → rene punkter → bølgeintervaller → per-bølge
/// statistikk → øktsammendrag. Deterministisk: samme input gir bit-identisk
/// output (ingen veggklokke utover referansedatoen).
pub fn analyze_session(inputs: AnalyzeInputs) -> Result<AnalyzeOutputs, PipelineError> {
    // 1️⃣ Inntak: valider, anker mot dato, sorter
    let report = ingest_rows(inputs.rows, inputs.session_date)?;
    if report.skipped_rows > 0 {
        warn!(
            "inntak: droppet {} malformede rader ({} gyldige punkter)",
            report.skipped_rows,
            report.points.len()
        );
    }

    // 2️⃣ Segmentering med hysterese + gap-toleranse
    let intervals = segment_waves(&report.points, &inputs.config);
    debug!(
        "segmentering: {} bølger fra {} punkter",
        intervals.len(),
        report.points.len()
    );
    if intervals.is_empty() {
        // Gyldig spor uten rides skal meldes distinkt — ikke persisteres
        // som tom økt
        return Err(PipelineError::NoWavesFound);
    }

    // 3️⃣ Kinematikk per bølge
    let waves: Vec<WaveStats> = intervals.iter().map(compute_wave_stats).collect();

    // 4️⃣ Øktsammendrag
    let summary = session_summary(&waves, &report.points);

    Ok(AnalyzeOutputs {
        user_id: inputs.user_id.to_string(),
        summary,
        waves,
        skipped_rows: report.skipped_rows,
    })
}
