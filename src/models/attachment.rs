//! Application attachment models.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file attached to an application, carried base64-encoded in the
/// request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentUpload {
    pub file_name: String,
    /// MIME type of the file, e.g. `application/pdf`.
    pub media_type: String,
    /// Base64-encoded file content.
    pub content: String,
}

impl AttachmentUpload {
    /// Build an upload from raw bytes, encoding the content.
    pub fn from_bytes(file_name: &str, media_type: &str, bytes: &[u8]) -> Self {
        Self {
            file_name: file_name.to_string(),
            media_type: media_type.to_string(),
            content: BASE64.encode(bytes),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttachmentStatus {
    /// Stored, not yet virus-scanned.
    Received,
    Scanned,
    Rejected,
}

/// Server acknowledgement of an uploaded attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentReceipt {
    pub attachment_id: String,
    pub application_id: String,
    pub status: AttachmentStatus,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl AttachmentReceipt {
    pub fn is_accepted(&self) -> bool {
        self.status != AttachmentStatus::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_content() {
        let upload = AttachmentUpload::from_bytes("resume.pdf", "application/pdf", b"hello");
        assert_eq!(upload.content, "aGVsbG8=");
        assert_eq!(upload.file_name, "resume.pdf");
    }

    #[test]
    fn test_receipt_acceptance() {
        let receipt: AttachmentReceipt = serde_json::from_str(
            r#"{"attachmentId":"att-1","applicationId":"app-1","status":"SCANNED"}"#,
        )
        .unwrap();
        assert!(receipt.is_accepted());

        let rejected: AttachmentReceipt = serde_json::from_str(
            r#"{"attachmentId":"att-2","applicationId":"app-1","status":"REJECTED"}"#,
        )
        .unwrap();
        assert!(!rejected.is_accepted());
    }
}
