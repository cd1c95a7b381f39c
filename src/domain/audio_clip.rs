use std::path::PathBuf;

/// Extensions accepted by the speech-to-text service.
const RECOGNIZED_EXTENSIONS: &[&str] = &[
    "flac", "m4a", "mp3", "mp4", "mpeg", "mpga", "oga", "ogg", "wav", "webm",
];

const FALLBACK_FILE_NAME: &str = "audio.m4a";

/// Recorded audio packaged for upload to a transcription service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    data: Vec<u8>,
    file_name: String,
}

impl AudioClip {
    /// `source_name` is the last segment of the recording's URI or the
    /// uploaded file name; it is kept only if its extension is recognized.
    pub fn new(data: Vec<u8>, source_name: Option<&str>) -> Self {
        let file_name = source_name
            .map(|name| name.rsplit('/').next().unwrap_or(name))
            .filter(|name| has_recognized_extension(name))
            .map(String::from)
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

        Self { data, file_name }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        match extension(&self.file_name).as_deref() {
            Some("flac") => "audio/flac",
            Some("mp3") | Some("mpeg") | Some("mpga") => "audio/mpeg",
            Some("mp4") | Some("m4a") => "audio/mp4",
            Some("ogg") | Some("oga") => "audio/ogg",
            Some("wav") => "audio/wav",
            Some("webm") => "audio/webm",
            _ => "application/octet-stream",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Maps a recorder URI (`file:///...` or a bare path) to a local path.
pub fn local_path_from_uri(uri: &str) -> PathBuf {
    PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri))
}

fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

fn has_recognized_extension(name: &str) -> bool {
    extension(name).is_some_and(|ext| RECOGNIZED_EXTENSIONS.contains(&ext.as_str()))
}
