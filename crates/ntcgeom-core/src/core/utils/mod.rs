pub mod geometry;
pub mod superposition;
