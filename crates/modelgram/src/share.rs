//! Shareable PlantUML server URLs.
//!
//! PlantUML servers accept diagrams inline in the URL: the text is
//! compressed with raw deflate and encoded with base64 over a custom
//! alphabet (`0-9`, `A-Z`, `a-z`, `-`, `_`) without padding.

use std::io::Write;

use base64::{
    Engine,
    alphabet::Alphabet,
    engine::{GeneralPurpose, general_purpose::NO_PAD},
};
use flate2::{Compression, write::DeflateEncoder};
use log::debug;

use crate::error::ModelgramError;

/// Characters of the PlantUML base64 alphabet, in value order.
pub const PLANTUML_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

const ALPHABET: Alphabet = match Alphabet::new(PLANTUML_ALPHABET) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("PlantUML alphabet is 64 unique printable characters"),
};

const ENGINE: GeneralPurpose = GeneralPurpose::new(&ALPHABET, NO_PAD);

/// Encodes `document` and appends it to `base_url`.
///
/// # Errors
///
/// Returns [`ModelgramError::Encode`] if compression fails. No partial URL is
/// produced in that case.
///
/// # Examples
///
/// ```
/// use modelgram::share::encode_for_sharing;
///
/// let url = encode_for_sharing("@startuml\n@enduml\n", "https://plantuml.example/png/").unwrap();
/// assert!(url.starts_with("https://plantuml.example/png/"));
/// ```
pub fn encode_for_sharing(document: &str, base_url: &str) -> Result<String, ModelgramError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(document.as_bytes())
        .map_err(ModelgramError::Encode)?;
    let compressed = encoder.finish().map_err(ModelgramError::Encode)?;

    let token = ENGINE.encode(&compressed);
    debug!(
        document_len = document.len(),
        compressed_len = compressed.len(),
        token_len = token.len();
        "Document encoded for sharing"
    );

    Ok(format!("{base_url}{token}"))
}
