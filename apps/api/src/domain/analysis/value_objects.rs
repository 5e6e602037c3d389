use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

lazy_static! {
    static ref MIME_TYPE_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*$")
            .unwrap();
    static ref BASE64_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").unwrap();
}

/// Image payload ready to travel inside a generation request.
///
/// `data` is plain base64 with no `data:` scheme header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EncodedImage {
    #[validate(regex(path = *MIME_TYPE_REGEX))]
    pub mime_type: String,
    #[validate(regex(path = *BASE64_REGEX))]
    pub data: String,
}

impl EncodedImage {
    pub fn new(mime_type: String, data: String) -> Result<Self, validator::ValidationErrors> {
        let image = Self { mime_type, data };
        image.validate()?;
        Ok(image)
    }
}

/// A prompt counts as given when it has any non-whitespace content.
///
/// The text itself is forwarded verbatim, surrounding whitespace included.
pub fn prompt_is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
