//! Graph data structures for input to the force graph component.

use serde::{Deserialize, Serialize};

use crate::clusters::record::CaseRecord;

/// Whether a node infected anyone in the current record set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
	/// Referenced as the origin of at least one transmission.
	Source,
	/// Only ever on the receiving end.
	Target,
}

/// What a node was built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRaw {
	/// A reported case.
	Record(Box<CaseRecord>),
	/// A source id that never appeared as a case with its own contraction list.
	Source(String),
}

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
	/// Drives automatic coloring.
	pub group: NodeGroup,
	/// Originating record, shown as metadata.
	pub raw: NodeRaw,
}

/// A directed edge: `source` infected `target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
