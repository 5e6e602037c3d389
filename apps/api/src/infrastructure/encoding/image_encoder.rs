use crate::domain::analysis::{errors::AnalyzerError, value_objects::EncodedImage};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::ImageFormat;
use std::path::Path;
use tracing::{debug, warn};

/// Turns uploaded bytes or data URLs into [`EncodedImage`] payloads.
///
/// Output is deterministic: the same bytes and declared type always encode to
/// the same value.
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encode raw file bytes.
    ///
    /// The MIME type is the declared one when present, else derived from the
    /// file name, else sniffed from the bytes.
    pub fn encode_bytes(
        bytes: &[u8],
        declared_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<EncodedImage, AnalyzerError> {
        if bytes.is_empty() {
            warn!("refusing to encode an empty file");
            return Err(AnalyzerError::unprocessable_file());
        }

        let mime_type = declared(declared_type)
            .or_else(|| file_name.and_then(mime_from_file_name))
            .or_else(|| sniff_mime(bytes))
            .ok_or_else(|| {
                warn!("could not determine content type of uploaded file");
                AnalyzerError::unprocessable_file()
            })?;

        let data_url = to_data_url(&mime_type, bytes);
        let data = strip_data_url_prefix(&data_url).to_string();

        debug!(mime_type = %mime_type, bytes = bytes.len(), encoded = data.len(), "image encoded");
        EncodedImage::new(mime_type, data).map_err(|e| {
            warn!(error = %e, "encoded image failed validation");
            AnalyzerError::unprocessable_file()
        })
    }

    /// Encode a `data:` URL or bare base64 string.
    ///
    /// Everything up to and including the first comma is dropped. The rest must
    /// decode as base64.
    pub fn encode_data_url(
        value: &str,
        declared_type: Option<&str>,
    ) -> Result<EncodedImage, AnalyzerError> {
        let value = value.trim();
        let header_type = value
            .split_once(',')
            .and_then(|(header, _)| header.strip_prefix("data:"))
            .and_then(|meta| meta.split(';').next())
            .filter(|mime| !mime.is_empty());

        let bytes = STANDARD
            .decode(strip_data_url_prefix(value))
            .map_err(|e| {
                warn!(error = %e, "data URL payload is not base64");
                AnalyzerError::unprocessable_file()
            })?;

        let declared_type = declared(declared_type).or_else(|| header_type.map(str::to_string));
        Self::encode_bytes(&bytes, declared_type.as_deref(), None)
    }
}

/// `data:<mime>;base64,<payload>`, the shape browsers hand back from a file read.
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Everything after the first comma, or the whole input if there is none.
pub fn strip_data_url_prefix(value: &str) -> &str {
    value.split_once(',').map_or(value, |(_, payload)| payload)
}

/// Browsers and curl label files they cannot classify as octet-stream.
const GENERIC_BINARY_TYPE: &str = "application/octet-stream";

/// The declared type without parameters, or `None` when it says nothing useful.
fn declared(content_type: Option<&str>) -> Option<String> {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|ct| !ct.is_empty() && !ct.eq_ignore_ascii_case(GENERIC_BINARY_TYPE))
        .map(str::to_string)
}

fn mime_from_file_name(file_name: &str) -> Option<String> {
    ImageFormat::from_path(Path::new(file_name))
        .ok()
        .map(|format| format.to_mime_type().to_string())
}

fn sniff_mime(bytes: &[u8]) -> Option<String> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type().to_string())
}
