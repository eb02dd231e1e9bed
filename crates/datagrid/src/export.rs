//! Per-format export configuration.
//!
//! Export configurations travel alongside the option pipeline but are not
//! part of it: the staging collectors build one [`ExportConf`] per requested
//! format and store it on the table configuration keyed by format name. The
//! pipeline passes the map through untouched for the export collaborators.

use serde::{Deserialize, Serialize};

/// Configuration for exporting one table in one format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConf {
    /// The format name ("csv", "xls", "pdf", ...), also the map key.
    pub format: String,
    /// The download file name, without extension.
    pub file_name: String,
    /// The MIME type served with the export.
    pub mime_type: String,
    /// The label shown on the export link.
    pub label: String,
    /// Whether column headers are included in the export.
    pub include_header: bool,
}

impl ExportConf {
    /// Creates an export configuration with the documented defaults for the
    /// given format.
    pub fn new(format: impl Into<String>) -> Self {
        let format = format.into();
        let mime_type = default_mime_type(&format).to_string();
        Self {
            file_name: "export".to_string(),
            mime_type,
            label: format.to_uppercase(),
            include_header: true,
            format,
        }
    }

    /// Sets the download file name.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Sets the link label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Excludes column headers from the export.
    pub fn without_header(mut self) -> Self {
        self.include_header = false;
        self
    }
}

fn default_mime_type(format: &str) -> &'static str {
    match format {
        "csv" => "text/csv",
        "xml" => "application/xml",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}
