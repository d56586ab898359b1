//! Attachment wire types - the shapes the message list hands to the view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single attachment embedded in a chat message.
///
/// Field names follow the upstream wire shape (`title_link`, `mrkdwn_in`),
/// so records deserialize straight out of the message payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachmentRecord {
    /// Attachment kind discriminator; `"file"` enables document handling.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Link to the attached file, if any.
    #[serde(default)]
    pub title_link: Option<String>,

    /// Body text of the attachment card.
    #[serde(default)]
    pub text: Option<String>,

    /// Text shown above the card.
    #[serde(default)]
    pub pretext: Option<String>,

    /// Fields the sender flagged as markdown-formatted.
    #[serde(default)]
    pub mrkdwn_in: Vec<String>,

    /// Accent color: a named token or a literal color value.
    #[serde(default)]
    pub color: Option<String>,

    /// Timestamp shown on the card.
    #[serde(default)]
    pub ts: Option<DateTime<Utc>>,

    /// Per-message override for inline image loading.
    #[serde(default)]
    pub download_images: Option<bool>,

    /// Per-message override for the collapsed default.
    #[serde(default)]
    pub collapsed: Option<bool>,
}

/// User preferences the view consults for defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default)]
    pub auto_image_load: Option<bool>,

    #[serde(default)]
    pub save_mobile_bandwidth: Option<bool>,

    #[serde(default)]
    pub collapse_media_by_default: Option<bool>,
}

/// The enclosing message, supplied by the host message list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageContext {
    #[serde(rename = "_id")]
    pub id: String,

    /// Room the message belongs to.
    pub rid: String,

    /// Uploaded-file metadata, present when the message carries a file.
    #[serde(default)]
    pub file: Option<FileRef>,
}

/// Metadata of the file a message carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    #[serde(rename = "_id")]
    pub id: String,

    /// MIME content type reported at upload time.
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Short-lived authorization for one collaborative-editing session.
///
/// The `URL` field name is the editor vendor's wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDescriptor {
    #[serde(rename = "URL")]
    pub url: String,

    pub token: String,
}
