pub mod encoding;
pub mod generation;
