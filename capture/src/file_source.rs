//! File-based acquisition for the image and video capture modes.
//!
//! The chosen file always arrives as an explicit argument; nothing here
//! consults any ambient state to find out what the operator picked. `None`
//! models "the operator pressed submit without choosing anything".

use crate::{CaptureError, MediaKind, Sample};
use std::path::Path;

const VIDEO_MEDIA_PREFIX: &str = "video/";
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Reads the chosen image file's bytes as-is; no transcoding.
pub fn acquire_image(chosen: Option<&Path>) -> Result<Sample, CaptureError> {
    let path = chosen.ok_or(CaptureError::NoFileSelected)?;
    let payload = read_chosen_file(path)?;
    Sample::new(payload.into(), MediaKind::Image)
}

/// Reads the chosen video file as one payload. The remote service handles
/// internal frame sampling; this side never decodes the video.
pub fn acquire_video(chosen: Option<&Path>) -> Result<Sample, CaptureError> {
    let path = chosen.ok_or(CaptureError::NoFileSelected)?;

    let declared = declared_media_type(path);
    if !declared.starts_with(VIDEO_MEDIA_PREFIX) {
        return Err(CaptureError::WrongMediaKind(declared.to_string()));
    }

    let payload = read_chosen_file(path)?;
    Sample::new(payload.into(), MediaKind::Video)
}

fn read_chosen_file(path: &Path) -> Result<Vec<u8>, CaptureError> {
    std::fs::read(path).map_err(|source| CaptureError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// The media type a file declares through its extension. Only the top-level
/// kind matters here, so the table stays deliberately small.
fn declared_media_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("bmp") => "image/bmp",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("avi") => "video/x-msvideo",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        _ => UNKNOWN_MEDIA_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn temp_file_with(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn image_without_chosen_file_fails() {
        match acquire_image(None) {
            Err(CaptureError::NoFileSelected) => (),
            other => panic!("Expected NoFileSelected, got: {other:?}"),
        }
    }

    #[test]
    fn video_without_chosen_file_fails() {
        match acquire_video(None) {
            Err(CaptureError::NoFileSelected) => (),
            other => panic!("Expected NoFileSelected, got: {other:?}"),
        }
    }

    #[test]
    fn image_bytes_are_read_verbatim() {
        let file = temp_file_with(".jpg", b"not really a jpeg");
        let sample = acquire_image(Some(file.path())).unwrap();
        assert_eq!(sample.payload().as_ref(), b"not really a jpeg");
        assert_eq!(sample.kind(), MediaKind::Image);
        assert!(sample.preview().path().exists());
    }

    #[rstest]
    #[case(".mp4")]
    #[case(".mkv")]
    #[case(".webm")]
    fn video_extensions_are_accepted(#[case] suffix: &str) {
        let file = temp_file_with(suffix, b"video payload");
        let sample = acquire_video(Some(file.path())).unwrap();
        assert_eq!(sample.kind(), MediaKind::Video);
        assert_eq!(sample.payload().as_ref(), b"video payload");
    }

    #[rstest]
    #[case(".jpg", "image/jpeg")]
    #[case(".txt", "application/octet-stream")]
    fn non_video_file_in_video_mode_fails(#[case] suffix: &str, #[case] declared: &str) {
        let file = temp_file_with(suffix, b"whatever");
        match acquire_video(Some(file.path())) {
            Err(CaptureError::WrongMediaKind(t)) => assert_eq!(t, declared),
            other => panic!("Expected WrongMediaKind, got: {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_its_path() {
        let path = Path::new("/definitely/not/here.jpg");
        match acquire_image(Some(path)) {
            Err(CaptureError::FileRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected FileRead, got: {other:?}"),
        }
    }
}
