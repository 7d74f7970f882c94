//! The weighted, matrix-backed digraph.
mod matrix;
pub use self::matrix::*;

#[cfg(test)]
pub use self::tests::*;
