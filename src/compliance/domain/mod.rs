pub mod license;
pub mod license_file;
pub mod license_type;
pub mod module;
pub mod taxonomy;
pub mod violation;

pub use license::License;
pub use license_file::LicenseFile;
pub use license_type::LicenseType;
pub use module::Module;
pub use taxonomy::Taxonomy;
pub use violation::Violation;
