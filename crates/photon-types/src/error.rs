use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotonError {
    #[error("Wavelength must be finite and positive, got {value}")]
    InvalidWavelength { value: f64 },

    #[error("Photon energy must be finite and positive, got {value} J")]
    InvalidEnergy { value: f64 },

    #[error("Invalid band '{name}': {message}")]
    InvalidBand { name: String, message: String },

    #[error("Physical constant '{name}' must be finite and positive, got {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PhotonResult<T> = Result<T, PhotonError>;
