//! Canvas rendering for the force graph.
//!
//! Draws in passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Links with arrow heads, then their particles (world space)
//! 3. Nodes (world space)
//! 4. Tooltip for the hovered node (screen space)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{LinkParticles, along};
use super::scale::{ScaleConfig, ScaledValues};
use super::state::ForceGraphState;
use super::theme::Theme;

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
	particles: &LinkParticles,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_links(state, ctx, &scale, theme, particles);
	draw_nodes(state, ctx, &scale);

	ctx.restore();

	draw_tooltip(state, ctx, &scale, theme);
}

fn draw_links(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	particles: &LinkParticles,
) {
	let positions = state.positions();
	let link_css = theme.link.to_css();
	ctx.set_stroke_style_str(&link_css);
	ctx.set_fill_style_str(&link_css);
	ctx.set_line_width(scale.link_width);

	for link in state.links() {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&link.source), positions.get(&link.target))
		else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		let (tip_x, tip_y) = (x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);
		let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
		let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}

	ctx.set_fill_style_str(&theme.particle.to_css());
	for link in state.links() {
		if link.particle_width <= 0.0 {
			continue;
		}
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&link.source), positions.get(&link.target))
		else {
			continue;
		};
		for t in particles.offsets(state.flow_time) {
			let (x, y) = along(x1, y1, x2, y2, t);
			ctx.begin_path();
			let _ = ctx.arc(x, y, link.particle_width / 2.0, 0.0, 2.0 * PI);
			ctx.fill();
		}
	}
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, scale: &ScaledValues) {
	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let info = &node.data.user_data;
		let radius = scale.node_radius * info.size;
		let color = if state.hovered == Some(node.index()) {
			info.color.lighten(0.3)
		} else {
			info.color
		};

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&color.to_css());
		ctx.fill();
	});
}

fn draw_tooltip(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let Some(hovered) = state.hovered else {
		return;
	};
	let mut anchor = None;
	state.graph.visit_nodes(|node| {
		if node.index() == hovered {
			anchor = Some((node.x() as f64, node.y() as f64, node.data.user_data.id.clone()));
		}
	});
	let Some((gx, gy, label)) = anchor else {
		return;
	};

	let (sx, sy) = (
		gx * state.transform.k + state.transform.x,
		gy * state.transform.k + state.transform.y,
	);
	ctx.set_font(&scale.label_font);
	let text_width = ctx
		.measure_text(&label)
		.map(|m| m.width())
		.unwrap_or(label.len() as f64 * 7.0);
	let (pad, height) = (4.0, 18.0);
	let (left, top) = (sx - text_width / 2.0 - pad, sy - 28.0);

	ctx.set_fill_style_str(&theme.label_background.to_css());
	ctx.fill_rect(left, top, text_width + pad * 2.0, height);
	ctx.set_fill_style_str(&theme.label.to_css());
	let _ = ctx.fill_text(&label, left + pad, top + height - 5.0);
}
