use thiserror::Error;

/// Feil som skal opp til kallsiden. Droppede rader og degenererte segmenter
/// håndteres lokalt og dukker aldri opp her.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Færre enn 2 gyldige punkter etter inntak — ingen bølge kan avledes,
    /// hele kjøringen avbrytes uten å lage en delvis økt.
    #[error("for få gyldige punkter etter filtrering: {valid} (minimum 2)")]
    InsufficientData { valid: usize },

    /// Gyldig spor, men segmenteringen fant ingen bølger. Kallsiden skal
    /// melde "ingen rides" i stedet for å persistere en tom økt.
    #[error("ingen bølger funnet i sporet")]
    NoWavesFound,
}
