//! Application attachment operations.

use crate::connection::JobwireConnection;
use crate::error::Result;
use crate::models::{AttachmentReceipt, AttachmentUpload};

/// Client for the attachment upload API.
#[derive(Debug, Clone)]
pub struct AttachmentsClient {
    conn: JobwireConnection,
}

impl AttachmentsClient {
    pub fn new(conn: JobwireConnection) -> Self {
        Self { conn }
    }

    /// Attach a file to an application.
    pub async fn upload(
        &self,
        application_id: &str,
        upload: &AttachmentUpload,
    ) -> Result<AttachmentReceipt> {
        self.conn
            .post_json(
                &format!(
                    "applications/{}/attachments",
                    urlencoding::encode(application_id)
                ),
                upload,
            )
            .await
    }

    /// Fetch the scan status of an uploaded attachment.
    pub async fn get(&self, attachment_id: &str) -> Result<AttachmentReceipt> {
        self.conn
            .get_json(&format!(
                "attachments/{}",
                urlencoding::encode(attachment_id)
            ))
            .await
    }
}
