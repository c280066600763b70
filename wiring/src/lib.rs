//! Split a component wiring diagram into two groups by cutting the fewest wires.
//!
//! - [`diagram`]: parse `name: other other ...` lines into an undirected graph.
//! - [`cut`]: global minimum cut (Stoer–Wagner) and the group-size product.

pub mod cut;
pub mod diagram;
