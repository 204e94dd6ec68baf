//! Visual theming for the force graph.
//!
//! Nodes are colored automatically by their group; links carry a directional
//! particle in a single accent color.

use super::types::NodeGroup;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Mix towards white (0.0 = unchanged, 1.0 = white).
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		let mix = |c: u8| (c as f64 + (255.0 - c as f64) * f) as u8;
		Self {
			r: mix(self.r),
			g: mix(self.g),
			b: mix(self.b),
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors handed out to node groups, in order of first appearance.
#[derive(Clone, Debug)]
pub struct GroupPalette {
	pub colors: Vec<Color>,
}

impl GroupPalette {
	/// Categorical palette close to d3's `schemePaired`.
	pub fn paired() -> Self {
		Self {
			colors: vec![
				Color::rgb(166, 206, 227),
				Color::rgb(31, 120, 180),
				Color::rgb(178, 223, 138),
				Color::rgb(51, 160, 44),
				Color::rgb(251, 154, 153),
				Color::rgb(227, 26, 28),
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Assigns palette colors to groups in the order they are first seen, so the
/// first group in the data always gets the first color.
#[derive(Clone, Debug, Default)]
pub struct GroupColors {
	seen: Vec<NodeGroup>,
}

impl GroupColors {
	pub fn color_for(&mut self, group: NodeGroup, palette: &GroupPalette) -> Color {
		let index = match self.seen.iter().position(|&g| g == group) {
			Some(i) => i,
			None => {
				self.seen.push(group);
				self.seen.len() - 1
			}
		};
		palette.get(index)
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: Color,
	pub link: Color,
	pub particle: Color,
	pub label: Color,
	pub label_background: Color,
	pub palette: GroupPalette,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(255, 255, 255),
			link: Color::rgba(153, 153, 153, 0.6),
			particle: Color::rgb(255, 0, 0),
			label: Color::rgb(34, 34, 34),
			label_background: Color::rgba(255, 255, 255, 0.85),
			palette: GroupPalette::paired(),
		}
	}
}
