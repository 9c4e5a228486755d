//! Content-type sniffing for attachment payloads.
//!
//! Classification inspects only a leading signature prefix; it never scans
//! the whole payload. Anything that is not a recognized image defaults to
//! PDF, since uploaded documents are assumed to be PDFs.

use serde::{Deserialize, Serialize};

/// JPEG start-of-image marker (JFIF variant).
const JPEG_SOI: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

/// PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// The sniffed type of a binary payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// JPEG image.
    Jpeg,
    /// PNG image.
    Png,
    /// PDF document (default for anything unrecognized).
    Pdf,
}

impl FileKind {
    /// File extension for this kind, without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jpeg => write!(f, "JPEG"),
            Self::Png => write!(f, "PNG"),
            Self::Pdf => write!(f, "PDF"),
        }
    }
}

/// Classify a payload by its leading bytes, first match wins.
///
/// A buffer shorter than a checked prefix simply fails that match and falls
/// through; empty and truncated buffers classify as PDF.
#[must_use]
pub fn classify(buffer: &[u8]) -> FileKind {
    if buffer.starts_with(&JPEG_SOI) {
        FileKind::Jpeg
    } else if buffer.starts_with(&PNG_SIGNATURE) {
        FileKind::Png
    } else {
        FileKind::Pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_jpeg() {
        let buffer = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F'];
        assert_eq!(classify(&buffer), FileKind::Jpeg);
    }

    #[test]
    fn test_classify_png() {
        let mut buffer = PNG_SIGNATURE.to_vec();
        buffer.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D]);
        assert_eq!(classify(&buffer), FileKind::Png);
    }

    #[test]
    fn test_classify_defaults_to_pdf() {
        assert_eq!(classify(b"%PDF-1.7"), FileKind::Pdf);
        assert_eq!(classify(b"plain text"), FileKind::Pdf);
        assert_eq!(classify(&[0x00, 0x01, 0x02, 0x03]), FileKind::Pdf);
    }

    #[test]
    fn test_classify_empty_buffer() {
        assert_eq!(classify(&[]), FileKind::Pdf);
    }

    #[test]
    fn test_classify_truncated_prefixes_fall_through() {
        // Shorter than the 4-byte JPEG marker
        assert_eq!(classify(&[0xFF, 0xD8]), FileKind::Pdf);
        // Shorter than the 8-byte PNG signature
        assert_eq!(classify(&PNG_SIGNATURE[..5]), FileKind::Pdf);
    }

    #[test]
    fn test_classify_non_jfif_jpeg_falls_through() {
        // EXIF-style marker differs in the fourth byte; the sniff is exact.
        assert_eq!(classify(&[0xFF, 0xD8, 0xFF, 0xE1]), FileKind::Pdf);
    }

    #[test]
    fn test_extension() {
        assert_eq!(FileKind::Jpeg.extension(), "jpg");
        assert_eq!(FileKind::Png.extension(), "png");
        assert_eq!(FileKind::Pdf.extension(), "pdf");
    }

    #[test]
    fn test_display() {
        assert_eq!(FileKind::Jpeg.to_string(), "JPEG");
        assert_eq!(FileKind::Png.to_string(), "PNG");
        assert_eq!(FileKind::Pdf.to_string(), "PDF");
    }
}
