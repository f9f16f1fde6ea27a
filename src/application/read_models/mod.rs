//! Read models for the compliance report
//!
//! View-optimized, denormalized structs built from the aggregated license
//! files. Formatters only ever see these.

mod report_read_model;
mod report_read_model_builder;

pub use report_read_model::{LicenseEntryView, ReportMetadataView, ReportReadModel, SummaryView};
pub use report_read_model_builder::ReportReadModelBuilder;
