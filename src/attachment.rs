use crate::error::AppError;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

/// Default upper bound for a decoded attachment (Gemini inline-data limit).
pub const DEFAULT_MAX_ATTACHMENT_BYTES: usize = 20 * 1024 * 1024;

/// Media types the analyst accepts: the document and image formats the
/// site's upload controls offer.
const SUPPORTED_MEDIA_TYPES: [&str; 9] = [
    "application/pdf",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/heic",
];

/// A single file submitted alongside free text for analysis.
/// The payload is base64-encoded for embedding in the remote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mime_type: String,
    pub data: String, // base64-encoded
}

/// Validate an attachment before it is embedded in a remote request.
///
/// Checks that the payload decodes as base64, that the decoded size stays
/// within `max_bytes`, and that the declared media type is supported.
pub fn validate_attachment(attachment: &Attachment, max_bytes: usize) -> Result<(), AppError> {
    let decoded = general_purpose::STANDARD
        .decode(&attachment.data)
        .map_err(|e| AppError::InvalidAttachment(format!("Invalid base64 data: {}", e)))?;

    if decoded.is_empty() {
        return Err(AppError::InvalidAttachment(
            "Attachment is empty".to_string(),
        ));
    }

    if decoded.len() > max_bytes {
        return Err(AppError::InvalidAttachment(format!(
            "Attachment too large: {} bytes (max: {} bytes)",
            decoded.len(),
            max_bytes
        )));
    }

    // Strip any parameters before matching (case-insensitive)
    let mime_base = attachment
        .mime_type
        .split(';')
        .next()
        .unwrap_or(&attachment.mime_type)
        .trim()
        .to_lowercase();

    if !SUPPORTED_MEDIA_TYPES.contains(&mime_base.as_str()) {
        return Err(AppError::InvalidAttachment(format!(
            "Unsupported media type: {}",
            mime_base
        )));
    }

    Ok(())
}
