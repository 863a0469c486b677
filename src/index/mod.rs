pub mod inverted;
pub mod loader;
pub mod posting;
