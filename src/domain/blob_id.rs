use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a stored blob, `<uuid>.<ext>`.
///
/// The extension is derived from the content type at upload time so that the
/// blob can be served back with the right `Content-Type` without a metadata
/// side table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlobId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed blob id: {0:?}")]
pub struct InvalidBlobId(pub String);

impl BlobId {
    pub fn generate(content_type: &str) -> Self {
        Self(format!(
            "{}.{}",
            Uuid::new_v4().simple(),
            extension_for(content_type)
        ))
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidBlobId> {
        let valid = !raw.is_empty()
            && !raw.contains("..")
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidBlobId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn content_type(&self) -> &'static str {
        let ext = self.0.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        match ext {
            "html" => "text/html",
            "txt" => "text/plain",
            "json" => "application/json",
            "jpg" => "image/jpeg",
            "png" => "image/png",
            "heic" => "image/heic",
            "webp" => "image/webp",
            "m4a" => "audio/mp4",
            "mp3" => "audio/mpeg",
            "wav" => "audio/wav",
            "webm" => "audio/webm",
            "ogg" => "audio/ogg",
            _ => "application/octet-stream",
        }
    }
}

fn extension_for(content_type: &str) -> &'static str {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "text/html" => "html",
        "text/plain" => "txt",
        "application/json" => "json",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/heic" => "heic",
        "image/webp" => "webp",
        "audio/mp4" | "audio/m4a" | "audio/x-m4a" => "m4a",
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/wav" | "audio/x-wav" => "wav",
        "audio/webm" => "webm",
        "audio/ogg" => "ogg",
        _ => "bin",
    }
}

impl TryFrom<String> for BlobId {
    type Error = InvalidBlobId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BlobId> for String {
    fn from(id: BlobId) -> Self {
        id.0
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
