use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polyline truncated at byte {offset}")]
    TruncatedPolyline { offset: usize },
    #[error("Invalid polyline byte {byte:#04x} at offset {offset}")]
    InvalidPolylineByte { byte: u8, offset: usize },
    #[error("Directions request failed: {status}: {message}")]
    Directions { status: String, message: String },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
