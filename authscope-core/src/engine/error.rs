use std::str::Utf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    // Malformed lines are data and are skipped; malformed encoding is a
    // structural fault and surfaces to the caller.
    #[error("input is not valid UTF-8 (first invalid byte at offset {offset}): {source}")]
    InputDecoding {
        offset: usize,
        #[source]
        source: Utf8Error,
    },
}

impl AnalyzeError {
    pub fn input_decoding(source: Utf8Error) -> Self {
        Self::InputDecoding {
            offset: source.valid_up_to(),
            source,
        }
    }
}
