/// Cellular automaton generation, fill and upscale transforms
pub mod automaton;
/// Flood fill partitioning into connected sections
pub mod flood_fill;
/// Prim's and depth-first maze carving
pub mod maze;
/// Tunnel carving that connects isolated sections
pub mod stitching;
/// Disjoint-set structure for section merging
pub mod union_find;
