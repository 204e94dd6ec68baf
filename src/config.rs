//! Page-level configuration.
//!
//! Read from an inline `<script id="clusters-config" type="application/json">`
//! element. A `state` query parameter in the page URL overrides the state code.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::clusters::fetch::DEFAULT_ENDPOINT;

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "clusters-config";

fn default_state_code() -> String {
	"MH".to_string()
}

fn default_endpoint() -> String {
	DEFAULT_ENDPOINT.to_string()
}

/// Which state to show and where its data comes from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClustersConfig {
	/// Region code records are filtered by (e.g. `"KL"`).
	#[serde(default = "default_state_code")]
	pub state_code: String,
	/// URL of the raw data document.
	#[serde(default = "default_endpoint")]
	pub endpoint: String,
}

impl Default for ClustersConfig {
	fn default() -> Self {
		Self {
			state_code: default_state_code(),
			endpoint: default_endpoint(),
		}
	}
}

impl ClustersConfig {
	/// Parses a JSON configuration, falling back to defaults when invalid.
	pub fn from_json(json_text: &str) -> Self {
		match serde_json::from_str::<ClustersConfig>(json_text) {
			Ok(config) => config,
			Err(e) => {
				warn!("covid-clusters: invalid config, using defaults: {}", e);
				Self::default()
			}
		}
	}

	/// Applies a `state=XX` override from a URL query string.
	pub fn with_query(mut self, query: &str) -> Self {
		if let Some(code) = state_from_query(query) {
			self.state_code = code;
		}
		self
	}
}

/// Extracts the `state` parameter from a query string such as `?state=KL&x=1`.
/// Codes are upper-cased; empty values are ignored.
pub fn state_from_query(query: &str) -> Option<String> {
	query
		.trim_start_matches('?')
		.split('&')
		.filter_map(|pair| pair.split_once('='))
		.find(|(key, _)| *key == "state")
		.map(|(_, value)| value.trim().to_ascii_uppercase())
		.filter(|value| !value.is_empty())
}

fn config_text(window: &Window) -> Option<String> {
	let element = window.document()?.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Loads the configuration from the current page.
pub fn load_config() -> ClustersConfig {
	let Some(window) = web_sys::window() else {
		return ClustersConfig::default();
	};

	let config = config_text(&window)
		.map(|text| ClustersConfig::from_json(&text))
		.unwrap_or_default();
	let query = window.location().search().unwrap_or_default();
	let config = config.with_query(&query);

	info!(
		"covid-clusters: showing {} from {}",
		config.state_code, config.endpoint
	);
	config
}
