//! Zoom-dependent sizing of graph visuals.
//!
//! Drawing happens in world space after the canvas transform, so anything that
//! should keep a fixed pixel size has to be divided by the zoom factor `k`.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels).
	Screen,
	/// World-space size, kept within `[min_screen, max_screen]` pixels.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Base sizes and their zoom behavior.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node radius in world units.
	pub node_radius: f64,
	pub node_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	pub hit_behavior: ScaleBehavior,
	/// Link line width in pixels.
	pub link_width: f64,
	/// Arrow length in world units.
	pub arrow_size: f64,
	pub arrow_behavior: ScaleBehavior,
	/// Tooltip font size in pixels.
	pub label_size: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node_radius: 4.0,
			node_behavior: ScaleBehavior::World,
			hit_radius: 8.0,
			hit_behavior: ScaleBehavior::Clamped {
				min_screen: 6.0,
				max_screen: f64::INFINITY,
			},
			link_width: 1.0,
			arrow_size: 3.5,
			arrow_behavior: ScaleBehavior::Clamped {
				min_screen: 0.0,
				max_screen: 12.0,
			},
			label_size: 12.0,
		}
	}
}

/// Scale values resolved for one zoom level. Built once per frame.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub node_radius: f64,
	pub hit_radius: f64,
	pub link_width: f64,
	pub arrow_size: f64,
	pub label_font: String,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		Self {
			node_radius: config.node_behavior.apply(config.node_radius, k),
			hit_radius: config.hit_behavior.apply(config.hit_radius, k),
			link_width: config.link_width / k,
			arrow_size: config.arrow_behavior.apply(config.arrow_size, k),
			label_font: format!("{}px sans-serif", config.label_size),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scale_behaviors() {
		assert_eq!(ScaleBehavior::World.apply(4.0, 2.0), 4.0);
		assert_eq!(ScaleBehavior::Screen.apply(4.0, 2.0), 2.0);

		let clamped = ScaleBehavior::Clamped {
			min_screen: 6.0,
			max_screen: 12.0,
		};
		// Zoomed far out: 4 world units would be 1px, so grow to 6px.
		assert_eq!(clamped.apply(4.0, 0.25), 24.0);
		// Zoomed far in: 4 world units would be 40px, so shrink to 12px.
		assert_eq!(clamped.apply(4.0, 10.0), 1.2);
	}

	#[test]
	fn test_link_width_is_constant_on_screen() {
		let config = ScaleConfig::default();
		for k in [0.5, 1.0, 4.0] {
			let scaled = ScaledValues::new(&config, k);
			assert!((scaled.link_width * k - config.link_width).abs() < 1e-9);
		}
	}
}
