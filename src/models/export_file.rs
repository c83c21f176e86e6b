//! Export file model.

use serde::{Deserialize, Serialize};

/// A fully rendered export file ready to be persisted or offered for
/// download by the host application.
///
/// The library never touches the filesystem; adapters return the complete
/// file content together with a suggested filename and MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFile {
    /// The complete file content.
    pub content: String,
    /// Suggested filename, including extension.
    pub filename: String,
    /// MIME type matching the content.
    pub mime_type: String,
}
