use super::report_read_model::{LicenseEntryView, ReportMetadataView, ReportReadModel, SummaryView};
use crate::compliance::domain::{LicenseFile, LicenseType};
use crate::compliance::policies::LicenseFileName;
use crate::shared::error::LicenseError;
use crate::shared::security::{read_bounded, MAX_FILE_SIZE};
use crate::shared::Result;
use std::collections::BTreeSet;
use std::path::Path;

const NOTICE_DISPLAY_NAME: &str = "(NOTICE file)";
const UNKNOWN_DISPLAY_NAME: &str = "Unknown";

/// Builder turning aggregated license files into the report read model
///
/// Reads each license text and probes for compliance artifacts, so it
/// touches the filesystem and can fail.
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds the read model; `license_files` should already be in report order
    pub fn build(license_files: &[LicenseFile], metadata: ReportMetadataView) -> Result<ReportReadModel> {
        let entries = license_files
            .iter()
            .map(Self::build_entry)
            .collect::<Result<Vec<_>>>()?;

        Ok(ReportReadModel {
            metadata,
            summary: Self::build_summary(license_files),
            entries,
        })
    }

    fn build_summary(license_files: &[LicenseFile]) -> SummaryView {
        let modules: BTreeSet<(&str, &str)> = license_files
            .iter()
            .map(|f| (f.module().path(), f.module().version()))
            .collect();
        SummaryView {
            modules: modules.len(),
            license_files: license_files.len(),
            unclassified_files: license_files
                .iter()
                .filter(|f| f.licenses().is_empty())
                .count(),
        }
    }

    fn build_entry(file: &LicenseFile) -> Result<LicenseEntryView> {
        let text = read_bounded(file.path(), MAX_FILE_SIZE).map_err(|e| LicenseError::Read {
            path: file.path().to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(LicenseEntryView {
            module: file.module().path().to_string(),
            version: file.module().version().to_string(),
            licenses: file.licenses().iter().map(|l| l.name().to_string()).collect(),
            display_name: Self::display_name(file),
            rel_path: file.rel_path().to_string(),
            source_url: file.source_url(),
            artifacts: Self::artifacts(file)?,
            text: String::from_utf8_lossy(&text).into_owned(),
        })
    }

    /// License column text, following the classified types
    pub fn display_name(file: &LicenseFile) -> String {
        if file.licenses().is_empty() {
            return if LicenseFileName::is_notice_like(file.file_name()) {
                NOTICE_DISPLAY_NAME.to_string()
            } else {
                UNKNOWN_DISPLAY_NAME.to_string()
            };
        }
        file.licenses()
            .iter()
            .map(|l| match l.license_type().identifier() {
                "" => UNKNOWN_DISPLAY_NAME,
                identifier => identifier,
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Types whose artifacts apply to the file
    ///
    /// A file with no recognized license still has to ship: as a NOTICE file
    /// when its name says so, otherwise as an unknown license.
    fn effective_types(file: &LicenseFile) -> Vec<LicenseType> {
        if !file.licenses().is_empty() {
            return file
                .licenses()
                .iter()
                .map(|l| l.license_type().clone())
                .collect();
        }
        if LicenseFileName::is_notice_like(file.file_name()) {
            vec![LicenseType::NoticeFile]
        } else {
            vec![LicenseType::Unknown(String::new())]
        }
    }

    /// Union of the artifacts of every type, first occurrence wins
    pub fn artifacts(file: &LicenseFile) -> Result<Vec<String>> {
        let module_dir = file.module().dir().unwrap_or(Path::new(""));
        let rel_path = if file.rel_path().is_empty() {
            file.file_name()
        } else {
            file.rel_path()
        };

        let mut artifacts: Vec<String> = Vec::new();
        for license_type in Self::effective_types(file) {
            for artifact in license_type.collect_artifacts(module_dir, rel_path)? {
                if !artifacts.contains(&artifact) {
                    artifacts.push(artifact);
                }
            }
        }
        Ok(artifacts)
    }
}
