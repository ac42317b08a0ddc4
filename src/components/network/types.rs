/// A single moving point of the mesh, in surface-local logical pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

/// Connection between two nodes closer than the link distance.
///
/// Edges are derived from node positions every frame and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	pub from: usize,
	pub to: usize,
	pub opacity: f64,
}

/// Tunables for the network animation.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkParams {
	pub node_count: usize,
	/// Pairs at or beyond this distance are not connected.
	pub link_distance: f64,
	/// Velocity components are drawn from `[-max_speed, max_speed]`, in units per frame.
	pub max_speed: f64,
	pub min_radius: f64,
	pub max_radius: f64,
	/// Extra radius of the glow ring drawn around each node.
	pub glow_offset: f64,
}

impl Default for NetworkParams {
	fn default() -> Self {
		Self {
			node_count: 12,
			link_distance: 150.0,
			max_speed: 0.25,
			min_radius: 2.0,
			max_radius: 5.0,
			glow_offset: 4.0,
		}
	}
}
