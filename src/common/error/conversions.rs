//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;

#[cfg(feature = "pptx")]
impl From<crate::ooxml::error::OoxmlError> for Error {
    fn from(err: crate::ooxml::error::OoxmlError) -> Self {
        match err {
            crate::ooxml::error::OoxmlError::Io(e) => Error::Io(e),
            crate::ooxml::error::OoxmlError::Xml(s) => Error::XmlError(s),
            crate::ooxml::error::OoxmlError::Zip(s) => Error::ZipError(s),
            crate::ooxml::error::OoxmlError::ImageSource(s) => Error::InvalidValue(s),
            crate::ooxml::error::OoxmlError::Other(s) => Error::Other(s),
        }
    }
}

impl From<crate::export::ExportError> for Error {
    fn from(err: crate::export::ExportError) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}

#[cfg(feature = "pptx")]
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_message_is_kept() {
        let err: Error = crate::export::ExportError::AlreadyExporting.into();
        assert!(matches!(err, Error::Export(ref msg) if msg == "An export is already in progress"));
    }

    #[cfg(feature = "pptx")]
    #[test]
    fn test_ooxml_conversion() {
        use crate::ooxml::error::OoxmlError;

        let err: Error = OoxmlError::ImageSource("remote".to_string()).into();
        assert!(matches!(err, Error::InvalidValue(_)));

        let err: Error = OoxmlError::Xml("bad".to_string()).into();
        assert_eq!(err.to_string(), "XML error: bad");
    }
}
