use crate::CaptureError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A renderable on-disk copy of a sample's payload, for the presentation
/// layer to display. The backing file lives exactly as long as this handle;
/// dropping the handle removes the file.
#[must_use]
#[derive(Debug)]
pub struct Preview {
    file: NamedTempFile,
}

impl Preview {
    pub fn write(payload: &[u8], suffix: &str) -> Result<Self, CaptureError> {
        let mut file = tempfile::Builder::new()
            .prefix("uniform-check-preview-")
            .suffix(suffix)
            .tempfile()
            .map_err(CaptureError::PreviewWrite)?;

        file.write_all(payload)
            .map_err(CaptureError::PreviewWrite)?;
        file.flush().map_err(CaptureError::PreviewWrite)?;

        Ok(Self { file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
