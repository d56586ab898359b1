//! File-class resolution for an attachment.
//!
//! Document eligibility and the file id are derived exactly once, at view
//! construction, and threaded to the renderer and launcher from there.

use parley_api::{AttachmentRecord, MessageContext};

/// Result of classifying an attachment against its message context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    pub is_pdf: bool,
    pub is_odf: bool,
    /// Id of the uploaded file, present only when the attachment is an
    /// eligible document.
    pub file_id: Option<String>,
}

impl FileInfo {
    /// Either document class; the open-in-editor control shows for both.
    pub fn is_document(&self) -> bool {
        self.is_pdf || self.is_odf
    }
}

/// ASCII case-insensitive extension check, safe on any byte boundary.
pub(crate) fn has_suffix(link: &str, suffix: &str) -> bool {
    link.len() >= suffix.len()
        && link
            .get(link.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

/// Classify `record` once. Eligibility requires the `file` kind, a matching
/// link suffix, and file metadata on the enclosing message.
pub fn resolve_file(record: &AttachmentRecord, ctx: &MessageContext) -> FileInfo {
    if record.kind.as_deref() != Some("file") {
        return FileInfo::default();
    }
    let Some(link) = record.title_link.as_deref() else {
        return FileInfo::default();
    };
    let Some(file) = ctx.file.as_ref() else {
        return FileInfo::default();
    };

    let is_pdf = has_suffix(link, ".pdf");
    let is_odf = has_suffix(link, ".odt") || has_suffix(link, ".ods");
    let file_id = (is_pdf || is_odf).then(|| file.id.clone());

    FileInfo {
        is_pdf,
        is_odf,
        file_id,
    }
}
