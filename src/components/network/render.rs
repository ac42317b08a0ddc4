use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;
use super::surface::SurfaceSize;

const NODE_COLOR: &str = "#00D2D3";
const GLOW_COLOR: &str = "rgba(0, 210, 211, 0.3)";
const LINK_COLOR: &str = "rgba(0, 210, 211, 0.15)";

/// Drawing operations the network pass needs, in logical pixels.
pub trait Painter {
	fn clear(&self, width: f64, height: f64);
	fn link(&self, from: (f64, f64), to: (f64, f64), opacity: f64);
	fn node(&self, x: f64, y: f64, radius: f64, glow_radius: f64);
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn link(&self, from: (f64, f64), to: (f64, f64), opacity: f64) {
		self.set_global_alpha(opacity);
		self.set_stroke_style_str(LINK_COLOR);
		self.set_line_width(1.0);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn node(&self, x: f64, y: f64, radius: f64, glow_radius: f64) {
		self.set_global_alpha(1.0);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(NODE_COLOR);
		self.fill();

		self.begin_path();
		let _ = self.arc(x, y, glow_radius, 0.0, 2.0 * PI);
		self.set_stroke_style_str(GLOW_COLOR);
		self.set_line_width(2.0);
		self.stroke();
	}
}

/// Run one animation frame. Returns `false` once the simulation has been
/// stopped, in which case nothing is moved or drawn.
pub fn frame(state: &mut NetworkState, size: SurfaceSize, painter: &impl Painter) -> bool {
	if !state.animation_running {
		return false;
	}
	state.resize(size.width, size.height);
	state.step();
	render(state, painter);
	true
}

pub fn render(state: &NetworkState, painter: &impl Painter) {
	painter.clear(state.width, state.height);

	// links go underneath the nodes
	for edge in state.edges() {
		let (a, b) = (&state.nodes[edge.from], &state.nodes[edge.to]);
		painter.link((a.x, a.y), (b.x, b.y), edge.opacity);
	}

	let glow = state.params.glow_offset;
	for node in &state.nodes {
		painter.node(node.x, node.y, node.radius, node.radius + glow);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::network::types::{NetworkParams, Node};

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Link(f64),
		Node(f64, f64),
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Painter for Recorder {
		fn clear(&self, width: f64, height: f64) {
			self.0.borrow_mut().push(Op::Clear(width, height));
		}

		fn link(&self, _from: (f64, f64), _to: (f64, f64), opacity: f64) {
			self.0.borrow_mut().push(Op::Link(opacity));
		}

		fn node(&self, _x: f64, _y: f64, radius: f64, glow_radius: f64) {
			self.0.borrow_mut().push(Op::Node(radius, glow_radius));
		}
	}

	fn still(x: f64, y: f64) -> Node {
		Node {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.5,
		}
	}

	fn size(width: f64, height: f64) -> SurfaceSize {
		SurfaceSize {
			width,
			height,
			pixel_ratio: 1.0,
		}
	}

	#[test]
	fn render_order_is_clear_links_nodes() {
		let mut state = NetworkState::new(NetworkParams::default(), 300.0, 300.0, 1);
		state.nodes = vec![still(0.0, 0.0), still(75.0, 0.0), still(290.0, 290.0)];
		let recorder = Recorder::default();

		render(&state, &recorder);

		let ops = recorder.0.into_inner();
		assert_eq!(
			ops,
			vec![
				Op::Clear(300.0, 300.0),
				Op::Link(0.5),
				Op::Node(2.5, 6.5),
				Op::Node(2.5, 6.5),
				Op::Node(2.5, 6.5),
			]
		);
	}

	#[test]
	fn frame_applies_latest_size_before_stepping() {
		let mut state = NetworkState::new(NetworkParams::default(), 400.0, 400.0, 1);
		state.nodes = vec![still(390.0, 390.0)];
		let recorder = Recorder::default();

		assert!(frame(&mut state, size(800.0, 300.0), &recorder));
		assert_eq!((state.width, state.height), (800.0, 300.0));
		assert_eq!((state.nodes[0].x, state.nodes[0].y), (390.0, 300.0));
		assert_eq!(recorder.0.borrow()[0], Op::Clear(800.0, 300.0));
	}

	#[test]
	fn stopped_state_neither_moves_nor_draws() {
		let mut state = NetworkState::new(NetworkParams::default(), 400.0, 400.0, 8);
		let recorder = Recorder::default();
		assert!(frame(&mut state, size(400.0, 400.0), &recorder));
		let drawn = recorder.0.borrow().len();

		state.stop();
		let before = state.nodes.clone();
		for _ in 0..10 {
			assert!(!frame(&mut state, size(400.0, 400.0), &recorder));
		}

		assert_eq!(state.nodes, before);
		assert_eq!(state.frame_count, 1);
		assert_eq!(recorder.0.borrow().len(), drawn);
	}
}
