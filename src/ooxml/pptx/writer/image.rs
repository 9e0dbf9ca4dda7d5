/// Image sources resolved to embeddable bytes.
///
/// Sources are `data:` URIs with a base64 payload, or local file paths
/// (optionally `file://` prefixed). Remote URLs are never fetched.
use super::super::format::ImageFormat;
use crate::ooxml::error::{OoxmlError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use std::path::Path;

/// Image bytes ready to be stored under `ppt/media/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaBlob {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

pub(crate) fn resolve_image(source: &str) -> Result<MediaBlob> {
    let source = source.trim();
    if source.is_empty() {
        return Err(OoxmlError::ImageSource("empty image source".to_string()));
    }

    if let Some(uri) = source.strip_prefix("data:") {
        return decode_data_uri(uri);
    }

    let lower = source.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Err(OoxmlError::ImageSource(format!(
            "remote image '{}' is not fetched",
            source
        )));
    }

    let path = source.strip_prefix("file://").unwrap_or(source);
    read_image_file(Path::new(path))
}

fn decode_data_uri(uri: &str) -> Result<MediaBlob> {
    let Some((header, payload)) = uri.split_once(',') else {
        return Err(OoxmlError::ImageSource("data URI without payload".to_string()));
    };

    let mut params = header.split(';');
    let mime = params.next().unwrap_or_default();
    if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
        return Err(OoxmlError::ImageSource(
            "only base64 data URIs are supported".to_string(),
        ));
    }

    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64_ENGINE
        .decode(compact.as_bytes())
        .map_err(|e| OoxmlError::ImageSource(format!("invalid base64 payload: {}", e)))?;

    let format = ImageFormat::detect_from_bytes(&bytes)
        .or_else(|| ImageFormat::from_mime(mime))
        .ok_or_else(|| OoxmlError::ImageSource(format!("unsupported image type '{}'", mime)))?;

    Ok(MediaBlob { format, bytes })
}

fn read_image_file(path: &Path) -> Result<MediaBlob> {
    let bytes = std::fs::read(path).map_err(|e| {
        OoxmlError::ImageSource(format!("cannot read '{}': {}", path.display(), e))
    })?;

    let format = ImageFormat::detect_from_bytes(&bytes)
        .or_else(|| {
            let ext = path.extension()?.to_str()?.to_ascii_lowercase();
            ImageFormat::from_mime(&format!("image/{}", ext))
        })
        .ok_or_else(|| {
            OoxmlError::ImageSource(format!("'{}' is not a supported image", path.display()))
        })?;

    Ok(MediaBlob { format, bytes })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// A 1x1 transparent PNG.
    pub(crate) const PNG_1X1: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    pub(crate) fn png_data_uri() -> String {
        format!("data:image/png;base64,{}", PNG_1X1)
    }

    #[test]
    fn test_data_uri() {
        let blob = resolve_image(&png_data_uri()).unwrap();
        assert_eq!(blob.format, ImageFormat::Png);
        assert!(blob.bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_data_uri_errors() {
        assert!(matches!(
            resolve_image("data:image/png;base64,!!!notbase64"),
            Err(OoxmlError::ImageSource(_))
        ));
        assert!(resolve_image("data:image/png,rawbytes").is_err());
        assert!(resolve_image("data:image/png;base64").is_err());
        // valid base64, but neither the bytes nor the MIME type name an image
        assert!(resolve_image("data:text/plain;base64,aGVsbG8=").is_err());
    }

    #[test]
    fn test_remote_and_missing() {
        assert!(resolve_image("https://example.com/a.png").is_err());
        assert!(resolve_image("   ").is_err());
        assert!(resolve_image("/definitely/not/here.png").is_err());
    }

    #[test]
    fn test_local_file() {
        let bytes = BASE64_ENGINE.decode(PNG_1X1).unwrap();
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&bytes).unwrap();

        let blob = resolve_image(file.path().to_str().unwrap()).unwrap();
        assert_eq!(blob.format, ImageFormat::Png);
        assert_eq!(blob.bytes, bytes);

        let uri = format!("file://{}", file.path().display());
        assert!(resolve_image(&uri).is_ok());
    }
}
