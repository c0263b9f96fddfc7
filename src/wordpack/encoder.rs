//! Frame encoding: text to compressed bytes

use std::collections::HashSet;

use byteorder::{BigEndian, WriteBytesExt};
use log::debug;

use super::error::{Result, WordpackError};
use super::models::{Language, UNSPECIFIED};
use super::store::DictionaryStore;
use super::tokenizer::tokenize;

/// Compress text into a wordpack frame.
///
/// Frame layout (multi-byte fields big-endian):
/// - 1 byte:  language code
/// - 4 bytes: byte length of the id stream
/// - N bytes: id stream, one u16 per token; 0xFFFF marks a token without
///            a dictionary id
/// - optional: a 0x00 marker followed by the unresolved tokens joined
///            with '|', present only when at least one 0xFFFF occurs
///
/// Text with no tokens compresses to the 5-byte minimal frame (language
/// byte plus a zero length). All distinct tokens are resolved through a
/// single batched store lookup.
pub fn compress<S: DictionaryStore>(store: &S, text: &str, language: Language) -> Result<Vec<u8>> {
    let code = language as u16;
    if code > 0xFF {
        return Err(WordpackError::InvalidLanguage(code));
    }

    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Ok(vec![code as u8, 0, 0, 0, 0]);
    }

    let distinct: HashSet<String> = tokens.iter().cloned().collect();
    let resolved = store.lookup_words(&distinct, language)?;

    let mut frame = Vec::with_capacity(5 + tokens.len() * 2);
    frame.write_u8(code as u8)?;
    frame.write_u32::<BigEndian>((tokens.len() * 2) as u32)?;

    let mut unresolved: Vec<&str> = Vec::new();
    for token in &tokens {
        match resolved.get(token) {
            Some(&id) => frame.write_u16::<BigEndian>(id as u16)?,
            None => {
                frame.write_u16::<BigEndian>(UNSPECIFIED)?;
                unresolved.push(token);
            }
        }
    }

    if !unresolved.is_empty() {
        frame.push(0x00);
        frame.extend_from_slice(unresolved.join("|").as_bytes());
    }

    debug!(
        "Compressed {} tokens ({} unresolved) into {} bytes for {:?}",
        tokens.len(),
        unresolved.len(),
        frame.len(),
        language
    );
    Ok(frame)
}
