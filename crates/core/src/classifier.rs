use std::path::Path;

/// Closed category set understood by the manifest front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
    Video,
    Audio,
    Zip,
    Md,
    Script,
    Other,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Image => "image",
            FileKind::Video => "video",
            FileKind::Audio => "audio",
            FileKind::Zip => "zip",
            FileKind::Md => "md",
            FileKind::Script => "script",
            FileKind::Other => "other",
        }
    }
}

/// Maps a lowercase extension to its category. Unknown and missing
/// extensions fall through to `Other`.
pub fn classify(path: &Path) -> FileKind {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => FileKind::Pdf,
        "md" | "markdown" | "txt" | "rtf" => FileKind::Md,
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" => FileKind::Image,
        "mp4" | "webm" | "mov" | "mkv" | "avi" => FileKind::Video,
        "mp3" | "ogg" | "wav" | "flac" | "m4a" => FileKind::Audio,
        "zip" | "7z" | "rar" | "tar" | "gz" | "xz" => FileKind::Zip,
        "sh" | "py" | "js" | "ts" | "lua" | "rb" | "php" | "bat" | "ps1" | "pl" | "go" | "rs"
        | "c" | "cpp" | "java" | "cs" | "html" | "css" | "scss" | "json" | "xml" | "yml"
        | "yaml" | "ini" => FileKind::Script,
        _ => FileKind::Other,
    }
}
