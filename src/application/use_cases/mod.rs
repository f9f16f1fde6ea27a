/// Use cases module containing application business logic orchestration
mod aggregate_licenses;
mod generate_report;

pub use aggregate_licenses::Aggregator;
pub use generate_report::GenerateReportUseCase;
