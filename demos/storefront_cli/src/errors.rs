// storefront_cli/src/errors.rs

use std::process::ExitCode;
use storefront::StorefrontError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storefront Error: {source}")]
  Storefront {
    #[from] // Allows `?` on library calls
    source: StorefrontError,
  },

  #[error("Output Error: {0}")]
  Output(#[from] serde_json::Error),

  #[error("Internal Error: {0}")]
  Internal(String),
}

// Demo-side glue (bundled data loading) reports through anyhow; keep the whole chain.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(format!("{:#}", err))
  }
}

impl AppError {
  /// The one-line notice shown to the user. Details go to the log.
  pub fn banner(&self) -> String {
    match self {
      AppError::Config(m) => format!("Configuration problem: {}", m),
      AppError::Storefront { source } => match source {
        StorefrontError::RemoteFetch { .. } | StorefrontError::Decode { .. } => {
          "Failed to load products. Please try again later.".to_string()
        }
        StorefrontError::NotFound { id } => format!("Product {} not found.", id),
        StorefrontError::InvalidQuantity { .. } => "Quantity must be at least 1.".to_string(),
        StorefrontError::Persistence { key, .. } => {
          format!("Could not read or save your {}. Check the data directory.", key)
        }
      },
      AppError::Output(_) => "Failed to render output.".to_string(),
      AppError::Internal(_) => "Something went wrong.".to_string(),
    }
  }

  pub fn exit_code(&self) -> ExitCode {
    let code = match self {
      AppError::Config(_) => 2,
      AppError::Storefront { source } => match source {
        StorefrontError::NotFound { .. } | StorefrontError::InvalidQuantity { .. } => 3,
        StorefrontError::RemoteFetch { .. } | StorefrontError::Decode { .. } => 4,
        StorefrontError::Persistence { .. } => 5,
      },
      AppError::Output(_) | AppError::Internal(_) => 1,
    };
    ExitCode::from(code)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
