//! Load state for the clusters view.
//!
//! The controller owns everything the view needs between renders: which state
//! is shown, where the data comes from, how far loading got, and the network
//! built from the last successful load.

use log::{info, warn};

use super::error::Result;
use super::network::build_network;
use super::record::CaseRecord;
use crate::components::force_graph::GraphData;

/// Loading progress of the case data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
	/// Nothing requested yet.
	#[default]
	Idle,
	/// A fetch is in flight.
	Loading,
	/// Records arrived and the network is built.
	Loaded,
	/// The fetch failed; the network stays empty.
	Failed(String),
}

/// Owns the records and the derived network for one state.
#[derive(Clone, Debug)]
pub struct ClusterController {
	state_code: String,
	endpoint: String,
	phase: LoadPhase,
	records: Vec<CaseRecord>,
	network: GraphData,
}

impl ClusterController {
	pub fn new(state_code: impl Into<String>, endpoint: impl Into<String>) -> Self {
		Self {
			state_code: state_code.into(),
			endpoint: endpoint.into(),
			phase: LoadPhase::Idle,
			records: Vec::new(),
			network: GraphData::default(),
		}
	}

	pub fn state_code(&self) -> &str {
		&self.state_code
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	pub fn phase(&self) -> &LoadPhase {
		&self.phase
	}

	/// True once records have been loaded.
	pub fn is_fetched(&self) -> bool {
		self.phase == LoadPhase::Loaded
	}

	pub fn records(&self) -> &[CaseRecord] {
		&self.records
	}

	pub fn network(&self) -> &GraphData {
		&self.network
	}

	/// Claims the right to fetch. Returns false while a fetch is in flight or
	/// after data has been loaded.
	pub fn begin_fetch(&mut self) -> bool {
		match self.phase {
			LoadPhase::Loading | LoadPhase::Loaded => false,
			LoadPhase::Idle | LoadPhase::Failed(_) => {
				self.phase = LoadPhase::Loading;
				true
			}
		}
	}

	/// Records the outcome of a fetch started with [`Self::begin_fetch`].
	pub fn finish_fetch(&mut self, result: Result<Vec<CaseRecord>>) {
		match result {
			Ok(records) => {
				self.set_records(records);
				self.phase = LoadPhase::Loaded;
			}
			Err(e) => {
				warn!("covid-clusters: failed to load case data: {}", e);
				self.phase = LoadPhase::Failed(e.to_string());
			}
		}
	}

	/// Replaces the record set and rebuilds the network from scratch.
	pub fn set_records(&mut self, records: Vec<CaseRecord>) {
		self.records = records;
		self.network = build_network(&self.records);
		info!(
			"covid-clusters: {} records in {} -> {} nodes, {} links",
			self.records.len(),
			self.state_code,
			self.network.nodes.len(),
			self.network.links.len()
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::clusters::error::FetchError;

	fn controller() -> ClusterController {
		ClusterController::new("KL", "https://example.org/raw_data.json")
	}

	#[test]
	fn test_single_fetch_in_flight() {
		let mut c = controller();
		assert_eq!(c.phase(), &LoadPhase::Idle);
		assert!(c.begin_fetch());
		assert!(!c.begin_fetch());
		assert_eq!(c.phase(), &LoadPhase::Loading);
		assert!(!c.is_fetched());
	}

	#[test]
	fn test_successful_fetch_builds_network() {
		let mut c = controller();
		assert!(c.begin_fetch());
		c.finish_fetch(Ok(vec![
			CaseRecord::new("1", Some("P2")),
			CaseRecord::new("2", None),
		]));

		assert!(c.is_fetched());
		assert_eq!(c.records().len(), 2);
		assert_eq!(c.network().nodes.len(), 2);
		assert_eq!(c.network().links.len(), 1);
		assert!(!c.begin_fetch());
	}

	#[test]
	fn test_failed_fetch_leaves_graph_empty() {
		let mut c = controller();
		assert!(c.begin_fetch());
		c.finish_fetch(Err(FetchError::Status {
			url: c.endpoint().to_string(),
			status: 500,
		}));

		assert!(matches!(c.phase(), LoadPhase::Failed(msg) if msg.contains("500")));
		assert!(!c.is_fetched());
		assert_eq!(c.network(), &GraphData::default());
		// A later attempt may try again.
		assert!(c.begin_fetch());
	}

	#[test]
	fn test_set_records_rebuilds() {
		let mut c = controller();
		c.set_records(vec![CaseRecord::new("1", Some("P2"))]);
		assert_eq!(c.network().nodes.len(), 2);

		c.set_records(vec![CaseRecord::new("3", None)]);
		assert!(c.network().nodes.is_empty());
		assert!(c.network().links.is_empty());
	}
}
