/// Ports module defining the interfaces of the hexagonal architecture
///
/// The compliance core only talks to the outside world (go toolchain,
/// filesystem, license matcher, console) through the traits in `outbound`.
pub mod outbound;
