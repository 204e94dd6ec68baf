//! Force-directed graph visualization component.
//!
//! Renders an interactive force-directed graph on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Nodes colored by group, with the node id shown on hover
//! - Directional particles flowing from source to target along each link
//!
//! # Example
//!
//! ```ignore
//! use covid_clusters::{ForceGraphCanvas, GraphData, GraphLink, GraphNode, NodeGroup, NodeRaw};
//!
//! let data = GraphData {
//!     nodes: vec![
//!         GraphNode { id: "P1".into(), group: NodeGroup::Target, raw: NodeRaw::Source("P1".into()) },
//!         GraphNode { id: "P2".into(), group: NodeGroup::Source, raw: NodeRaw::Source("P2".into()) },
//!     ],
//!     links: vec![
//!         GraphLink { source: "P2".into(), target: "P1".into() },
//!     ],
//! };
//!
//! view! { <ForceGraphCanvas data=data.into() /> }
//! ```

mod component;
mod particles;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode, NodeGroup, NodeRaw};
