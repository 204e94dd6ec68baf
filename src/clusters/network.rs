//! Transmission network construction.
//!
//! Turns flat case records into the node/link structure consumed by the
//! force graph. A record takes part in the network only when it names at least
//! one source; sources that never show up as such a record are added as
//! inferred nodes so every link resolves.

use std::collections::HashSet;

use crate::clusters::record::CaseRecord;
use crate::components::force_graph::{GraphData, GraphLink, GraphNode, NodeGroup, NodeRaw};

/// Node id of a reported patient.
pub fn patient_node_id(patient_number: &str) -> String {
	format!("P{patient_number}")
}

/// Splits a contraction field into source ids.
///
/// All whitespace is removed first, so `"P1, P 2"` yields `["P1", "P2"]`.
/// Empty tokens are dropped; a missing field yields an empty list.
pub fn contraction_list(field: Option<&str>) -> Vec<String> {
	let compact: String = field
		.unwrap_or_default()
		.chars()
		.filter(|c| !c.is_whitespace())
		.collect();
	compact
		.split(',')
		.filter(|token| !token.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Every id referenced as a source anywhere in `records`.
pub fn source_ids(records: &[CaseRecord]) -> HashSet<String> {
	records
		.iter()
		.flat_map(|r| contraction_list(r.contracted_from.as_deref()))
		.collect()
}

/// Builds the transmission network for `records`.
///
/// Node order follows record order, followed by inferred sources in link
/// order. Links are kept as-is, duplicates included.
pub fn build_network(records: &[CaseRecord]) -> GraphData {
	let sources = source_ids(records);

	let mut nodes = Vec::new();
	let mut present: HashSet<String> = HashSet::new();
	let mut links = Vec::new();

	for record in records {
		let contracted = contraction_list(record.contracted_from.as_deref());
		if contracted.is_empty() {
			continue;
		}

		let pid = patient_node_id(&record.patient_number);
		if present.insert(pid.clone()) {
			let group = if sources.contains(&pid) {
				NodeGroup::Source
			} else {
				NodeGroup::Target
			};
			nodes.push(GraphNode {
				id: pid.clone(),
				group,
				raw: NodeRaw::Record(Box::new(record.clone())),
			});
		}

		links.extend(contracted.into_iter().map(|source| GraphLink {
			source,
			target: pid.clone(),
		}));
	}

	// Backfill sources that have no node of their own.
	for link in &links {
		if present.insert(link.source.clone()) {
			nodes.push(GraphNode {
				id: link.source.clone(),
				group: NodeGroup::Source,
				raw: NodeRaw::Source(link.source.clone()),
			});
		}
	}

	GraphData { nodes, links }
}
