use crate::application::read_models::{LicenseEntryView, ReportReadModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the manifest
const TABLE_HEADER: &str = "| Module | Version | License | Source |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|--------|---------|---------|--------|\n";

/// MarkdownFormatter adapter rendering a THIRD_PARTY_LICENSES document
///
/// Layout: title, manifest table, a horizontal rule, then every license
/// text in a fenced block with the files a distribution must carry.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// A fence longer than any backtick run in `text`, so the text cannot close it
    fn code_fence(text: &str) -> String {
        let longest_run = text
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        "`".repeat(longest_run.max(2) + 1)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ReportReadModel) {
        output.push_str("# Third-Party Licenses\n\n");
        output.push_str("This file contains the licenses for all third-party dependencies.\n\n");
        output.push_str(&format!(
            "Generated by {} {} on {}: {} module(s), {} license file(s).\n\n",
            model.metadata.tool_name,
            model.metadata.tool_version,
            model.metadata.timestamp,
            model.summary.modules,
            model.summary.license_files
        ));
        if model.summary.unclassified_files > 0 {
            output.push_str(&format!(
                "> **Note:** {} file(s) could not be classified and need manual review.\n\n",
                model.summary.unclassified_files
            ));
        }
    }

    fn render_manifest(&self, output: &mut String, entries: &[LicenseEntryView]) {
        output.push_str("## Manifest\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for entry in entries {
            output.push_str(&format!(
                "| {} | {} | {} | [{}]({}) |\n",
                Self::escape_markdown_table_cell(&entry.module),
                Self::escape_markdown_table_cell(&entry.version),
                Self::escape_markdown_table_cell(&entry.display_name),
                Self::escape_markdown_table_cell(&entry.rel_path),
                entry.source_url
            ));
        }
        output.push_str("\n---\n\n");
    }

    fn render_texts(&self, output: &mut String, entries: &[LicenseEntryView]) {
        output.push_str("## License Texts\n\n");

        for entry in entries {
            output.push_str(&format!("### {} {}\n\n", entry.module, entry.version));
            output.push_str(&format!("**License:** {}\n\n", entry.display_name));
            output.push_str(&format!(
                "**Source:** [{}]({})\n\n",
                entry.rel_path, entry.source_url
            ));
            if !entry.artifacts.is_empty() {
                let artifacts: Vec<String> =
                    entry.artifacts.iter().map(|a| format!("`{}`", a)).collect();
                output.push_str(&format!("**Distribute with:** {}\n\n", artifacts.join(", ")));
            }

            let fence = Self::code_fence(&entry.text);
            output.push_str(&fence);
            output.push('\n');
            output.push_str(&entry.text);
            if !entry.text.is_empty() && !entry.text.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(&fence);
            output.push_str("\n\n");
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, model);
        self.render_manifest(&mut output, &model.entries);
        self.render_texts(&mut output, &model.entries);
        Ok(output)
    }
}
