//! Upload previews

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

use hrms_view::{escape_html, Render};

use crate::form::FileUpload;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePreview {
    /// Inline thumbnail
    Image { data_url: String },
    /// Non-image files show their name only
    Name(String),
}

impl FilePreview {
    pub fn from_upload(upload: &FileUpload) -> Self {
        if upload.is_image() {
            let data_url = format!(
                "data:{};base64,{}",
                upload.mime_type,
                STANDARD.encode(&upload.bytes)
            );
            FilePreview::Image { data_url }
        } else {
            FilePreview::Name(upload.file_name.clone())
        }
    }

    /// Read a chosen file from disk and build its preview
    pub async fn read(path: impl AsRef<Path>, mime_type: &str) -> Result<(FileUpload, Self)> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!(file = %file_name, size = bytes.len(), "Loaded file for preview");

        let upload = FileUpload::new(file_name, mime_type, bytes);
        let preview = Self::from_upload(&upload);
        Ok((upload, preview))
    }
}

impl Render for FilePreview {
    fn render_html(&self) -> String {
        match self {
            FilePreview::Image { data_url } => format!(
                r#"<img src="{}" class="img-thumbnail" style="max-width: 200px">"#,
                escape_html(data_url)
            ),
            FilePreview::Name(name) => {
                format!(r#"<p class="text-muted">{}</p>"#, escape_html(name))
            }
        }
    }
}
