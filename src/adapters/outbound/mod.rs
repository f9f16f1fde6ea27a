/// Outbound adapters - implementations of the outbound ports
pub mod classifier;
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod go;
