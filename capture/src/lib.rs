pub mod camera;
pub mod file_source;
pub mod mocks;
pub mod preview;

use bytes::Bytes;
use preview::Preview;
use std::path::PathBuf;

/// What a sample's payload encodes, which in turn selects the detection
/// endpoint it is submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// An operator-chosen still image file
    Image,
    /// An operator-chosen video file, submitted whole
    Video,
    /// One JPEG frame captured from a live camera
    Frame,
}

/// One unit of visual evidence ready for submission: the encoded payload,
/// its declared kind, and a locally renderable preview file.
///
/// The preview is a temp file owned by this sample. It is deleted when the
/// sample is replaced or dropped, so stale preview files cannot accumulate.
#[must_use]
#[derive(Debug)]
pub struct Sample {
    payload: Bytes,
    kind: MediaKind,
    preview: Preview,
}

impl Sample {
    pub fn new(payload: Bytes, kind: MediaKind) -> Result<Self, CaptureError> {
        let preview = Preview::write(&payload, preview_suffix(kind))?;
        Ok(Self {
            payload,
            kind,
            preview,
        })
    }

    pub fn payload(&self) -> Bytes {
        self.payload.clone()
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }
}

fn preview_suffix(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => ".img",
        MediaKind::Video => ".vid",
        MediaKind::Frame => ".jpg",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Chosen file is not a video (declared type: {0})")]
    WrongMediaKind(String),

    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Could not read chosen file `{path}`: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode captured frame: {0}")]
    FrameEncode(String),

    #[error("Failed to write preview file: {0}")]
    PreviewWrite(std::io::Error),
}
