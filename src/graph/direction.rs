//! Direction markers selecting whether edge mutations are mirrored.

use std::fmt::Debug;

/// Marker trait for the direction parameter of [`Graph`](crate::graph::Graph).
pub trait Direction: Copy + Default + Debug + 'static {
    /// Whether every edge is stored once per direction.
    const MIRRORED: bool;
}

/// Edges go from source to target only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Every logical edge is stored as two mirrored directed edges sharing payload and weight.
///
/// Adding or removing an edge touches both directions or neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Direction for Directed {
    const MIRRORED: bool = false;
}

impl Direction for Undirected {
    const MIRRORED: bool = true;
}
