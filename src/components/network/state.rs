use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{Edge, NetworkParams, Node};

/// Smallest radius a node is ever drawn with.
pub const MIN_NODE_RADIUS: f64 = 0.5;

/// Opacity of a link between two nodes `distance` apart, or `None` when they
/// are too far apart to be connected.
pub fn link_opacity(distance: f64, link_distance: f64) -> Option<f64> {
	if distance < link_distance {
		Some((1.0 - distance / link_distance).max(0.0))
	} else {
		None
	}
}

pub struct NetworkState {
	pub nodes: Vec<Node>,
	pub params: NetworkParams,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub frame_count: u64,
}

impl NetworkState {
	pub fn new(params: NetworkParams, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let (width, height) = (width.max(0.0), height.max(0.0));
		// f64::max also maps NaN to the floor
		let min_radius = params.min_radius.max(MIN_NODE_RADIUS);
		let radius_span = (params.max_radius - min_radius).max(0.0);

		let nodes = (0..params.node_count)
			.map(|_| Node {
				x: rng.r#gen::<f64>() * width,
				y: rng.r#gen::<f64>() * height,
				vx: (rng.r#gen::<f64>() - 0.5) * 2.0 * params.max_speed,
				vy: (rng.r#gen::<f64>() - 0.5) * 2.0 * params.max_speed,
				radius: min_radius + rng.r#gen::<f64>() * radius_span,
			})
			.collect();

		Self {
			nodes,
			params,
			width,
			height,
			animation_running: true,
			frame_count: 0,
		}
	}

	/// Update the logical bounds. Nodes are left where they are and get pulled
	/// back inside on the next [`step`](Self::step).
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
	}

	/// Advance every node by one frame: move, reflect off crossed edges, clamp.
	pub fn step(&mut self) {
		let (width, height) = (self.width, self.height);
		for node in &mut self.nodes {
			node.x += node.vx;
			node.y += node.vy;

			if node.x < 0.0 || node.x > width {
				node.vx = -node.vx;
			}
			if node.y < 0.0 || node.y > height {
				node.vy = -node.vy;
			}

			node.x = node.x.clamp(0.0, width);
			node.y = node.y.clamp(0.0, height);
		}
		self.frame_count += 1;
	}

	/// All node pairs `i < j` closer than the link distance.
	pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
		let link_distance = self.params.link_distance;
		self.nodes.iter().enumerate().flat_map(move |(i, a)| {
			self.nodes[i + 1..]
				.iter()
				.enumerate()
				.filter_map(move |(offset, b)| {
					let (dx, dy) = (a.x - b.x, a.y - b.y);
					let distance = (dx * dx + dy * dy).sqrt();
					link_opacity(distance, link_distance).map(|opacity| Edge {
						from: i,
						to: i + 1 + offset,
						opacity,
					})
				})
		})
	}

	pub fn stop(&mut self) {
		self.animation_running = false;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(x: f64, y: f64, vx: f64, vy: f64) -> Node {
		Node {
			x,
			y,
			vx,
			vy,
			radius: 3.0,
		}
	}

	fn state_with(nodes: Vec<Node>, width: f64, height: f64) -> NetworkState {
		let mut state = NetworkState::new(NetworkParams::default(), width, height, 0);
		state.nodes = nodes;
		state
	}

	#[test]
	fn initial_nodes_respect_params() {
		let params = NetworkParams::default();
		let state = NetworkState::new(params.clone(), 400.0, 300.0, 7);

		assert_eq!(state.nodes.len(), 12);
		for n in &state.nodes {
			assert!((0.0..=400.0).contains(&n.x));
			assert!((0.0..=300.0).contains(&n.y));
			assert!(n.vx.abs() <= params.max_speed);
			assert!(n.vy.abs() <= params.max_speed);
			assert!(n.radius >= params.min_radius && n.radius < params.max_radius);
		}
	}

	#[test]
	fn radius_is_always_positive() {
		for (min_radius, max_radius) in [(0.0, 0.0), (-3.0, 1.0), (f64::NAN, 4.0), (2.0, -1.0)] {
			let state = NetworkState::new(
				NetworkParams {
					min_radius,
					max_radius,
					..NetworkParams::default()
				},
				200.0,
				200.0,
				17,
			);
			for n in &state.nodes {
				assert!(n.radius >= MIN_NODE_RADIUS, "radius {} from {min_radius}..{max_radius}", n.radius);
			}
		}
	}

	#[test]
	fn nodes_stay_inside_bounds() {
		let mut state = NetworkState::new(
			NetworkParams {
				max_speed: 40.0,
				..NetworkParams::default()
			},
			120.0,
			80.0,
			99,
		);
		for _ in 0..500 {
			state.step();
			for n in &state.nodes {
				assert!((0.0..=state.width).contains(&n.x), "x = {}", n.x);
				assert!((0.0..=state.height).contains(&n.y), "y = {}", n.y);
			}
		}
	}

	#[test]
	fn reflection_flips_only_the_crossed_axis() {
		let mut state = state_with(vec![node(399.9, 200.0, 0.25, -0.1)], 400.0, 400.0);
		state.step();

		let n = &state.nodes[0];
		assert_eq!(n.vx, -0.25);
		assert_eq!(n.vy, -0.1);
		assert_eq!(n.x, 400.0);
	}

	#[test]
	fn corner_crossing_reflects_both_axes() {
		let mut state = state_with(vec![node(0.1, 0.1, -0.2, -0.2)], 100.0, 100.0);
		state.step();

		let n = &state.nodes[0];
		assert_eq!((n.vx, n.vy), (0.2, 0.2));
		assert_eq!((n.x, n.y), (0.0, 0.0));
	}

	#[test]
	fn reflection_keeps_speed() {
		let mut state = NetworkState::new(NetworkParams::default(), 30.0, 30.0, 3);
		let speeds: Vec<_> = state.nodes.iter().map(|n| (n.vx.abs(), n.vy.abs())).collect();
		for _ in 0..1000 {
			state.step();
		}
		let after: Vec<_> = state.nodes.iter().map(|n| (n.vx.abs(), n.vy.abs())).collect();
		assert_eq!(speeds, after);
	}

	#[test]
	fn edges_follow_link_distance() {
		// 3-4-5 triangles: 100 apart, exactly 150 apart
		let state = state_with(
			vec![
				node(0.0, 0.0, 0.0, 0.0),
				node(60.0, 80.0, 0.0, 0.0),
				node(90.0, 120.0, 0.0, 0.0),
			],
			500.0,
			500.0,
		);
		let edges: Vec<_> = state.edges().collect();

		assert_eq!(edges.len(), 2);
		assert_eq!((edges[0].from, edges[0].to), (0, 1));
		assert!((edges[0].opacity - (1.0 - 100.0 / 150.0)).abs() < 1e-12);
		assert_eq!((edges[1].from, edges[1].to), (1, 2));
		assert!((edges[1].opacity - (1.0 - 50.0 / 150.0)).abs() < 1e-12);
	}

	#[test]
	fn link_opacity_bounds() {
		assert_eq!(link_opacity(0.0, 150.0), Some(1.0));
		assert_eq!(link_opacity(150.0, 150.0), None);
		assert_eq!(link_opacity(151.0, 150.0), None);
		let near = link_opacity(149.999, 150.0).unwrap();
		assert!(near >= 0.0 && near < 0.001);
	}

	#[test]
	fn node_count_is_constant() {
		let mut state = NetworkState::new(NetworkParams::default(), 400.0, 400.0, 11);
		for _ in 0..200 {
			state.step();
		}
		state.resize(10.0, 10.0);
		state.step();
		assert_eq!(state.nodes.len(), 12);
		assert_eq!(state.frame_count, 201);
	}

	#[test]
	fn same_seed_same_trajectory() {
		let mut a = NetworkState::new(NetworkParams::default(), 640.0, 480.0, 2024);
		let mut b = NetworkState::new(NetworkParams::default(), 640.0, 480.0, 2024);
		for _ in 0..300 {
			a.step();
			b.step();
			assert_eq!(a.nodes, b.nodes);
		}

		let c = NetworkState::new(NetworkParams::default(), 640.0, 480.0, 2024);
		let d = NetworkState::new(NetworkParams::default(), 640.0, 480.0, 2025);
		assert_ne!(c.nodes, d.nodes);
	}

	#[test]
	fn shrink_clamps_on_next_step() {
		let mut state = state_with(
			vec![node(350.0, 350.0, 0.0, 0.0), node(700.0, 100.0, 0.0, 0.0)],
			800.0,
			400.0,
		);
		state.resize(800.0, 300.0);
		assert_eq!(state.nodes[0].y, 350.0);

		state.step();
		assert_eq!(state.nodes[0].y, 300.0);
		assert_eq!(state.nodes[1].x, 700.0);
	}

	#[test]
	fn empty_surface_pins_nodes_to_origin() {
		let mut state = NetworkState::new(NetworkParams::default(), 0.0, 0.0, 5);
		state.step();
		assert!(state.nodes.iter().all(|n| n.x == 0.0 && n.y == 0.0));
	}
}
