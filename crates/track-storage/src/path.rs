//! Upload path helpers

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use rand::Rng;

use track_core::IMAGE_URL_DELIMITER;

use crate::error::{StorageError, StorageResult};

/// Characters escaped in the `File-Path` header. Path separators and
/// URI punctuation stay readable, everything else outside ASCII is escaped.
const FILE_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Build the storage path for an uploaded file:
/// `<image_dir>/<3 random digits>-<file name>`.
///
/// Directory components in `file_name` are dropped and `,` becomes `_`,
/// so the public path can be attached to a comment.
pub fn upload_path(image_dir: &str, file_name: &str) -> StorageResult<String> {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .unwrap_or_default();
    if name.is_empty() || name == "." || name == ".." {
        return Err(StorageError::InvalidFileName(file_name.to_string()));
    }

    let name = name.replace(IMAGE_URL_DELIMITER, "_");
    let prefix: u16 = rand::thread_rng().gen_range(0..1000);
    let dir = image_dir.trim_end_matches('/');
    Ok(format!("{dir}/{prefix:03}-{name}"))
}

/// Public path under which the storage service serves a stored file
pub fn public_path(path: &str) -> String {
    format!("/p{path}")
}

/// Percent-encode a path for the `File-Path` header
pub fn encode_file_path(path: &str) -> String {
    utf8_percent_encode(path, FILE_PATH).to_string()
}
