use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Version of the JSON document layout, bumped on incompatible changes
const REPORT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    report_format_version: u32,
    #[serde(flatten)]
    report: &'a ReportReadModel,
}

/// JsonFormatter adapter serializing the read model with serde_json
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let document = Document {
            report_format_version: REPORT_FORMAT_VERSION,
            report: model,
        };
        let mut output = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
