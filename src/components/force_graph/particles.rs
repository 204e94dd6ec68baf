//! Directional particles travelling along links from source to target.

/// Particle width for links leaving a reported patient. Links from any other
/// source get no visible particle.
pub const PATIENT_PARTICLE_WIDTH: f64 = 2.0;

/// Width of the particle on a link whose source node is `source_id`.
///
/// Reported patients carry ids of the form `P<number>`; other sources (named
/// clusters, travel history, ...) are left without a particle.
pub fn particle_width(source_id: &str) -> f64 {
	if source_id.starts_with('P') {
		PATIENT_PARTICLE_WIDTH
	} else {
		0.0
	}
}

/// Timing shared by every link's particles.
#[derive(Clone, Debug)]
pub struct LinkParticles {
	/// Particles per link, spread evenly along it.
	pub per_link: usize,
	/// Fraction of a link travelled per second.
	pub speed: f64,
}

impl Default for LinkParticles {
	fn default() -> Self {
		Self {
			per_link: 1,
			speed: 0.6,
		}
	}
}

impl LinkParticles {
	/// Progress in `[0, 1)` of each particle along its link at `time` seconds.
	pub fn offsets(&self, time: f64) -> impl Iterator<Item = f64> + '_ {
		let base = time * self.speed;
		(0..self.per_link).map(move |i| (base + i as f64 / self.per_link as f64).rem_euclid(1.0))
	}
}

/// Point at `t` along the segment from `(x1, y1)` to `(x2, y2)`.
pub fn along(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> (f64, f64) {
	(x1 + (x2 - x1) * t, y1 + (y2 - y1) * t)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_particle_width() {
		assert_eq!(particle_width("P12"), PATIENT_PARTICLE_WIDTH);
		assert_eq!(particle_width("12"), 0.0);
		assert_eq!(particle_width("Delhi-Cluster"), 0.0);
		assert_eq!(particle_width(""), 0.0);
	}

	#[test]
	fn test_offsets_wrap() {
		let particles = LinkParticles {
			per_link: 2,
			speed: 0.5,
		};
		let at: Vec<f64> = particles.offsets(3.0).collect();
		assert_eq!(at.len(), 2);
		assert!((at[0] - 0.5).abs() < 1e-9);
		assert!(at[1].abs() < 1e-9);
		assert!(particles.offsets(123.4).all(|t| (0.0..1.0).contains(&t)));
	}

	#[test]
	fn test_along() {
		assert_eq!(along(0.0, 0.0, 10.0, -4.0, 0.5), (5.0, -2.0));
		assert_eq!(along(1.0, 1.0, 3.0, 3.0, 0.0), (1.0, 1.0));
	}
}
