pub mod license_file_name;

pub use license_file_name::LicenseFileName;
