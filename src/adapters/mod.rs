/// Adapters layer - infrastructure implementations of the ports
///
/// Concrete integrations with the go toolchain, the filesystem, the
/// license matcher and the console.
pub mod outbound;
