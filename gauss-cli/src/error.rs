use derive_more::From;

use gauss_core::GaussCoreError;

pub type Result<T> = core::result::Result<T, AppError>;

#[derive(Debug, From)]
pub enum AppError {
    // -- Externals
    #[from]
    Core(GaussCoreError),

    #[from]
    Json(serde_json::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for AppError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            AppError::Core(e) => write!(fmt, "{e}"),
            AppError::Json(e) => write!(fmt, "JSON serialization error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

// endregion: --- Error Boilerplate
