//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata, the
//! pan/zoom transform and the hovered node. On top of the simulation's charge
//! and spring forces, every tick pulls nodes gently towards the origin and
//! pushes overlapping nodes apart.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::particles::particle_width;
use super::scale::{ScaleConfig, ScaledValues};
use super::theme::{Color, GroupColors, Theme};
use super::types::GraphData;

/// Fraction of its distance to the origin a free node travels per second.
const CENTER_PULL: f32 = 0.2;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	/// Shown as the hover tooltip.
	pub id: String,
	pub color: Color,
	/// Size multiplier (1.0 = normal).
	pub size: f64,
}

/// A link resolved to simulation indices.
#[derive(Clone, Copy, Debug)]
pub struct LinkInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	/// Width of this link's directional particle; 0 hides it.
	pub particle_width: f64,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Displacements that separate overlapping discs `(x, y, radius)`.
///
/// Each overlapping pair is pushed apart along the line joining their centers,
/// both discs moving by half the overlap. Coincident discs are split
/// horizontally.
pub fn collision_offsets(discs: &[(f64, f64, f64)]) -> Vec<(f64, f64)> {
	let mut offsets = vec![(0.0, 0.0); discs.len()];
	for (i, &(xi, yi, ri)) in discs.iter().enumerate() {
		for (j, &(xj, yj, rj)) in discs.iter().enumerate().skip(i + 1) {
			let (dx, dy) = (xj - xi, yj - yi);
			let dist = (dx * dx + dy * dy).sqrt();
			let min_dist = ri + rj;
			if dist >= min_dist {
				continue;
			}
			let (ux, uy) = if dist > 1e-6 {
				(dx / dist, dy / dist)
			} else {
				(1.0, 0.0)
			};
			let push = (min_dist - dist) / 2.0;
			offsets[i].0 -= ux * push;
			offsets[i].1 -= uy * push;
			offsets[j].0 += ux * push;
			offsets[j].1 += uy * push;
		}
	}
	offsets
}

/// Core graph state combining physics simulation with interaction tracking.
///
/// Rebuilt whenever the graph data changes, then mutated each frame by the
/// animation loop.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	links: Vec<LinkInfo>,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 50.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut group_colors = GroupColors::default();

		let mut degree: HashMap<&str, usize> = HashMap::new();
		for link in &data.links {
			*degree.entry(link.source.as_str()).or_insert(0) += 1;
			*degree.entry(link.target.as_str()).or_insert(0) += 1;
		}
		let max_degree = degree.values().copied().max().unwrap_or(1).max(1);

		let count = data.nodes.len().max(1) as f64;
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / count;
			let ring = 10.0 * count.sqrt();
			let node_degree = degree.get(node.id.as_str()).copied().unwrap_or(0);

			let idx = graph.add_node(NodeData {
				x: (ring * angle.cos()) as f32,
				y: (ring * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					color: group_colors.color_for(node.group, &theme.palette),
					// Busy spreaders grow a little: 1.0x to 1.5x.
					size: 1.0 + 0.5 * (node_degree as f64 / max_degree as f64).sqrt(),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		let mut links = Vec::with_capacity(data.links.len());
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				links.push(LinkInfo {
					source: src,
					target: tgt,
					particle_width: particle_width(&link.source),
				});
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			links,
			id_to_idx,
		}
	}

	pub fn links(&self) -> &[LinkInfo] {
		&self.links
	}

	pub fn node_index(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.id_to_idx.get(id).copied()
	}

	pub fn node_count(&self) -> usize {
		self.id_to_idx.len()
	}

	/// Current simulation position of every node.
	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::with_capacity(self.id_to_idx.len());
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Closest node under the screen position, if any.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = (dx * dx + dy * dy).sqrt();
			let hit_radius = scale.hit_radius * node.data.user_data.size;
			if dist < hit_radius && found.is_none_or(|(_, best)| dist < best) {
				found = Some((node.index(), dist));
			}
		});
		found.map(|(idx, _)| idx)
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.hovered = node;
	}

	/// Advances the simulation by `dt` seconds. `node_radius` is the world-space
	/// radius used for collisions.
	pub fn tick(&mut self, dt: f32, node_radius: f64) {
		self.graph.update(dt);
		self.pull_to_center(dt);
		self.resolve_collisions(node_radius);
		self.flow_time += dt as f64;
	}

	fn pull_to_center(&mut self, dt: f32) {
		let pull = (CENTER_PULL * dt).min(1.0);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x -= node.data.x * pull;
				node.data.y -= node.data.y * pull;
			}
		});
	}

	fn resolve_collisions(&mut self, node_radius: f64) {
		let mut order = Vec::with_capacity(self.id_to_idx.len());
		let mut discs = Vec::with_capacity(self.id_to_idx.len());
		self.graph.visit_nodes(|node| {
			order.push(node.index());
			discs.push((
				node.x() as f64,
				node.y() as f64,
				node_radius * node.data.user_data.size,
			));
		});

		let offsets: HashMap<DefaultNodeIdx, (f64, f64)> =
			order.into_iter().zip(collision_offsets(&discs)).collect();
		self.graph.visit_nodes_mut(|node| {
			if node.data.is_anchor {
				return;
			}
			if let Some(&(dx, dy)) = offsets.get(&node.index()) {
				node.data.x += dx as f32;
				node.data.y += dy as f32;
			}
		});
	}

	/// Keeps the graph origin centered in the resized canvas.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::clusters::network::build_network;
	use crate::clusters::record::CaseRecord;
	use crate::components::force_graph::particles::PATIENT_PARTICLE_WIDTH;
	use crate::components::force_graph::{GraphLink, GraphNode, NodeGroup, NodeRaw};

	fn sample_state() -> ForceGraphState {
		let records = [
			CaseRecord::new("1", Some("P2, Cluster")),
			CaseRecord::new("3", Some("P1")),
		];
		ForceGraphState::new(&build_network(&records), 400.0, 400.0, &Theme::default())
	}

	#[test]
	fn test_nodes_and_links_resolve() {
		let state = sample_state();
		assert_eq!(state.node_count(), 4);
		assert_eq!(state.links().len(), 3);
		for id in ["P1", "P3", "P2", "Cluster"] {
			assert!(state.node_index(id).is_some(), "missing {id}");
		}
	}

	#[test]
	fn test_particle_width_by_source() {
		let state = sample_state();
		let cluster = state.node_index("Cluster").unwrap();
		for link in state.links() {
			let expected = if link.source == cluster {
				0.0
			} else {
				PATIENT_PARTICLE_WIDTH
			};
			assert_eq!(link.particle_width, expected);
		}
	}

	#[test]
	fn test_unresolved_links_are_skipped() {
		let data = GraphData {
			nodes: vec![GraphNode {
				id: "P1".to_string(),
				group: NodeGroup::Target,
				raw: NodeRaw::Source("P1".to_string()),
			}],
			links: vec![GraphLink {
				source: "P9".to_string(),
				target: "P1".to_string(),
			}],
		};
		let state = ForceGraphState::new(&data, 100.0, 100.0, &Theme::default());
		assert_eq!(state.node_count(), 1);
		assert!(state.links().is_empty());
	}

	#[test]
	fn test_empty_graph() {
		let state = ForceGraphState::new(&GraphData::default(), 100.0, 100.0, &Theme::default());
		assert_eq!(state.node_count(), 0);
		assert!(state.positions().is_empty());
	}

	#[test]
	fn test_screen_to_graph_centers_origin() {
		let mut state = sample_state();
		assert_eq!(state.screen_to_graph(200.0, 200.0), (0.0, 0.0));
		state.transform.k = 2.0;
		assert_eq!(state.screen_to_graph(210.0, 190.0), (5.0, -5.0));
	}

	#[test]
	fn test_resize_keeps_origin_centered() {
		let mut state = sample_state();
		state.resize(600.0, 300.0);
		assert_eq!((state.transform.x, state.transform.y), (300.0, 150.0));
	}

	#[test]
	fn test_collision_offsets() {
		let offsets = collision_offsets(&[(0.0, 0.0, 2.0), (3.0, 0.0, 2.0), (20.0, 0.0, 2.0)]);
		assert_eq!(offsets[0], (-0.5, 0.0));
		assert_eq!(offsets[1], (0.5, 0.0));
		assert_eq!(offsets[2], (0.0, 0.0));

		let coincident = collision_offsets(&[(1.0, 1.0, 1.0), (1.0, 1.0, 1.0)]);
		assert_eq!(coincident[0], (-1.0, 0.0));
		assert_eq!(coincident[1], (1.0, 0.0));
	}

	#[test]
	fn test_tick_keeps_positions_finite() {
		let mut state = sample_state();
		for _ in 0..120 {
			state.tick(0.016, 4.0);
		}
		assert!(state.flow_time > 1.9);
		for (x, y) in state.positions().into_values() {
			assert!(x.is_finite() && y.is_finite());
		}
	}
}
