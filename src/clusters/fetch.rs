//! Case data download.

use log::{debug, info};

use super::error::{FetchError, Result};
use super::record::{CaseRecord, RawDataResponse, filter_by_state};

/// Public endpoint publishing every reported case.
pub const DEFAULT_ENDPOINT: &str = "https://api.covid19india.org/raw_data.json";

/// Parses a raw data document and keeps the records for `state_code`.
pub fn parse_case_records(body: &str, state_code: &str) -> Result<Vec<CaseRecord>> {
	let response: RawDataResponse = serde_json::from_str(body)?;
	let total = response.raw_data.len();
	let records = filter_by_state(response.raw_data, state_code);
	debug!(
		"covid-clusters: {} of {} records reported in {}",
		records.len(),
		total,
		state_code
	);
	Ok(records)
}

/// Downloads the raw data document from `url` and keeps the records for
/// `state_code`.
pub async fn fetch_case_records(url: &str, state_code: &str) -> Result<Vec<CaseRecord>> {
	info!("covid-clusters: fetching {}", url);
	let request_error = |source| FetchError::Request {
		url: url.to_string(),
		source,
	};

	let resp = reqwest::get(url).await.map_err(request_error)?;
	if !resp.status().is_success() {
		return Err(FetchError::Status {
			url: url.to_string(),
			status: resp.status().as_u16(),
		});
	}

	let body = resp.text().await.map_err(request_error)?;
	parse_case_records(&body, state_code)
}
