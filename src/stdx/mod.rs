//! Small, self-contained data structures used across the project.

pub mod byte_ring;

pub use byte_ring::ByteRing;
