// core/src/ingest.rs
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::io::Read;

use crate::error::PipelineError;
use crate::models::TrackPoint;

/// Rårad fra opplastet spor. Feltene holdes som tekst til valideringen;
/// aliasene matcher CSV-headerne fra enheten. Øvrige kolonner (høyde,
/// satellitter, akselerometer) ignoreres av deserialiseringen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrackRow {
    #[serde(alias = "Time", default)]
    pub time: String,
    #[serde(alias = "Latitude", default)]
    pub latitude: String,
    #[serde(alias = "Longitude", default)]
    pub longitude: String,
    #[serde(alias = "Speed", default)]
    pub speed: String,
}

/// Resultat av inntak: rent, tidssortert punktsett + antall droppede rader.
/// Logging av droppede rader er kallsidens ansvar (se pipeline).
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub points: Vec<TrackPoint>,
    pub skipped_rows: usize,
}

/// Leser rårader fra CSV. Records som ikke lar seg deserialisere droppes
/// her (de ville uansett blitt forkastet som malformede i `ingest_rows`).
pub fn read_rows_csv<R: Read>(reader: R) -> Vec<RawTrackRow> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    rdr.deserialize::<RawTrackRow>().flatten().collect()
}

/// Validerer én rad. None = malformet (droppes, aborterer ikke batchen).
fn parse_row(row: &RawTrackRow, reference_date: NaiveDate) -> Option<TrackPoint> {
    // Fast bredde HH:MM:SS — chrono godtar ensifrede felter, det gjør ikke vi
    if row.time.len() != 8 {
        return None;
    }
    let time_of_day = NaiveTime::parse_from_str(&row.time, "%H:%M:%S").ok()?;

    let lat: f64 = row.latitude.trim().parse().ok()?;
    let lon: f64 = row.longitude.trim().parse().ok()?;
    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }

    let speed: f64 = row.speed.trim().parse().ok()?;
    if !speed.is_finite() {
        return None;
    }

    // Referansedatoen ankrer klokkeslettet til et absolutt tidspunkt (UTC)
    let timestamp = reference_date.and_time(time_of_day).and_utc();

    Some(TrackPoint {
        timestamp,
        latitude: lat,
        longitude: lon,
        speed_kph: speed.max(0.0), // negative devicefarter clampes til 0
    })
}

/// Bygger et rent punktsett fra rårader: malformede rader droppes, resten
/// ankres mot referansedatoen og sorteres stigende på timestamp (defensivt —
/// kildeordning er ikke garantert). Færre enn 2 gyldige punkter avbryter
/// hele kjøringen.
pub fn ingest_rows(
    rows: &[RawTrackRow],
    reference_date: NaiveDate,
) -> Result<IngestReport, PipelineError> {
    let mut points = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0usize;

    for row in rows {
        match parse_row(row, reference_date) {
            Some(p) => points.push(p),
            None => skipped_rows += 1,
        }
    }

    // Stabil sort: duplikate timestamps beholder kildeordning
    points.sort_by_key(|p| p.timestamp);

    if points.len() < 2 {
        return Err(PipelineError::InsufficientData {
            valid: points.len(),
        });
    }

    Ok(IngestReport {
        points,
        skipped_rows,
    })
}
