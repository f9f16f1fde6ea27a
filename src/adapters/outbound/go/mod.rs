/// Go toolchain adapters
mod go_mod_resolver;

pub use go_mod_resolver::GoModResolver;
