//! Raw case records as published by the case-tracking API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One reported patient, as found in the `raw_data` array of the API response.
///
/// Only the fields the network needs are typed; everything else is carried
/// through untouched in `extra` so it can be shown as node metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
	/// Patient identifier. The API has shipped both strings and integers here.
	#[serde(
		rename = "patientnumber",
		default,
		deserialize_with = "lenient_string"
	)]
	pub patient_number: String,
	/// Comma-separated ids of the patients this case is believed to have
	/// contracted the infection from.
	#[serde(
		rename = "contractedfromwhichpatientsuspected",
		default,
		deserialize_with = "lenient_optional_string",
		skip_serializing_if = "Option::is_none"
	)]
	pub contracted_from: Option<String>,
	/// Region code the case was reported in (e.g. `"KL"`).
	#[serde(rename = "statecode", default, deserialize_with = "lenient_string")]
	pub state_code: String,
	/// Opaque payload.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl CaseRecord {
	/// Shorthand used by tests and fixtures.
	pub fn new(patient_number: impl Into<String>, contracted_from: Option<&str>) -> Self {
		Self {
			patient_number: patient_number.into(),
			contracted_from: contracted_from.map(str::to_owned),
			..Self::default()
		}
	}
}

/// Top-level document served by the raw data endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawDataResponse {
	/// Every reported case, across all regions.
	#[serde(default)]
	pub raw_data: Vec<CaseRecord>,
}

/// Keeps only the records reported under `state_code`.
pub fn filter_by_state(records: Vec<CaseRecord>, state_code: &str) -> Vec<CaseRecord> {
	records
		.into_iter()
		.filter(|r| r.state_code == state_code)
		.collect()
}

fn scalar_text(value: Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Null | Value::Array(_) | Value::Object(_) => None,
	}
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(scalar_text(Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_numeric_patient_number() {
		let record: CaseRecord = serde_json::from_value(json!({
			"patientnumber": 42,
			"contractedfromwhichpatientsuspected": "P7",
			"statecode": "KL"
		}))
		.unwrap();
		assert_eq!(record.patient_number, "42");
		assert_eq!(record.contracted_from.as_deref(), Some("P7"));
		assert_eq!(record.state_code, "KL");
		assert!(record.extra.is_empty());
	}

	#[test]
	fn test_missing_and_null_fields() {
		let record: CaseRecord = serde_json::from_value(json!({
			"patientnumber": "3",
			"contractedfromwhichpatientsuspected": null
		}))
		.unwrap();
		assert_eq!(record.contracted_from, None);
		assert_eq!(record.state_code, "");

		let record: CaseRecord = serde_json::from_value(json!({})).unwrap();
		assert_eq!(record.patient_number, "");
		assert_eq!(record.contracted_from, None);
	}

	#[test]
	fn test_non_scalar_contraction_field_is_absent() {
		let record: CaseRecord = serde_json::from_value(json!({
			"patientnumber": "9",
			"contractedfromwhichpatientsuspected": ["P1"]
		}))
		.unwrap();
		assert_eq!(record.contracted_from, None);
	}

	#[test]
	fn test_extra_fields_survive_round_trip() {
		let input = json!({
			"patientnumber": "5",
			"contractedfromwhichpatientsuspected": "P1",
			"statecode": "DL",
			"detectedcity": "New Delhi",
			"agebracket": "34"
		});
		let record: CaseRecord = serde_json::from_value(input.clone()).unwrap();
		assert_eq!(record.extra.get("detectedcity"), Some(&json!("New Delhi")));
		assert_eq!(serde_json::to_value(&record).unwrap(), input);
	}

	#[test]
	fn test_filter_by_state() {
		let response: RawDataResponse = serde_json::from_value(json!({
			"raw_data": [
				{ "patientnumber": "1", "statecode": "KL" },
				{ "patientnumber": "2", "statecode": "MH" },
				{ "patientnumber": "3", "statecode": "KL" }
			]
		}))
		.unwrap();
		let kerala = filter_by_state(response.raw_data, "KL");
		let ids: Vec<_> = kerala.iter().map(|r| r.patient_number.as_str()).collect();
		assert_eq!(ids, ["1", "3"]);
	}

	#[test]
	fn test_missing_raw_data_is_empty() {
		let response: RawDataResponse = serde_json::from_value(json!({})).unwrap();
		assert!(response.raw_data.is_empty());
	}
}
