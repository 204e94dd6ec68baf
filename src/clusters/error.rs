//! Error types for loading case data.

use thiserror::Error;

/// Result type alias for case data loading.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching case records.
#[derive(Error, Debug)]
pub enum FetchError {
	/// The request could not be sent or the body could not be read.
	#[error("request to {url} failed: {source}")]
	Request {
		/// Endpoint that was requested.
		url: String,
		/// Underlying transport error.
		source: reqwest::Error,
	},

	/// The endpoint answered with a non-success status.
	#[error("{url} answered with HTTP {status}")]
	Status {
		/// Endpoint that was requested.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The body was not the expected JSON document.
	#[error("malformed case data: {0}")]
	Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = FetchError::Status {
			url: "https://example.org/raw_data.json".to_string(),
			status: 503,
		};
		assert!(err.to_string().contains("503"));
		assert!(err.to_string().contains("raw_data.json"));

		let err: FetchError = serde_json::from_str::<serde_json::Value>("{")
			.unwrap_err()
			.into();
		assert!(err.to_string().starts_with("malformed case data"));
	}
}
