//! Frame decoding: compressed bytes back to text

use std::collections::HashSet;

use byteorder::{BigEndian, ByteOrder};
use log::debug;

use super::error::{Result, WordpackError};
use super::models::{Language, UNSPECIFIED};
use super::store::DictionaryStore;

/// Placeholder for a sentinel position with no literal token left.
const MISSING: &str = "[MISSING]";

/// Decompress a wordpack frame into space-joined lowercase tokens.
///
/// Dictionary misses never fail: an id the store no longer knows becomes
/// `[MISSING:<id>]`, and a sentinel position with no literal token left
/// becomes `[MISSING]`. Only store access failures and structurally
/// invalid frames surface as errors.
///
/// Frames shorter than 5 bytes decode to the empty string. A frame whose
/// declared id stream is empty carries plain '|'-joined literal text
/// after the header, with no marker byte.
pub fn decompress<S: DictionaryStore>(store: &S, data: &[u8]) -> Result<String> {
    if data.len() < 5 {
        return Ok(String::new());
    }

    let id_len = BigEndian::read_u32(&data[1..5]) as usize;

    if id_len == 0 {
        if data.len() <= 5 {
            return Ok(String::new());
        }
        let literal = String::from_utf8_lossy(&data[5..]);
        return Ok(literal.split('|').collect::<Vec<_>>().join(" "));
    }

    let language = Language::try_from(data[0])?;

    if id_len % 2 != 0 || data.len() < 5 + id_len {
        return Err(WordpackError::InvalidFrame(format!(
            "declared id stream of {} bytes does not fit a {}-byte frame",
            id_len,
            data.len()
        )));
    }

    let ids: Vec<u16> = data[5..5 + id_len]
        .chunks_exact(2)
        .map(BigEndian::read_u16)
        .collect();

    // The literal section starts after the first zero byte past the id
    // stream. Invariant of the frame layout: no zero byte may occur at or
    // after offset 5 + id_len before the intended marker.
    let literal_text = data[5 + id_len..]
        .iter()
        .position(|&b| b == 0x00)
        .map(|marker| 5 + id_len + marker + 1)
        .filter(|&start| start < data.len())
        .map(|start| String::from_utf8_lossy(&data[start..]).into_owned());
    let mut literals = literal_text
        .as_deref()
        .map(|text| text.split('|'))
        .into_iter()
        .flatten();

    let distinct: HashSet<u32> = ids
        .iter()
        .filter(|&&id| id != UNSPECIFIED)
        .map(|&id| id as u32)
        .collect();
    let resolved = store.lookup_ids(&distinct, language)?;
    debug!(
        "Decompressing {} ids ({} distinct) for {:?}",
        ids.len(),
        distinct.len(),
        language
    );

    let mut words: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if id == UNSPECIFIED {
            words.push(literals.next().unwrap_or(MISSING).to_string());
        } else {
            match resolved.get(&(id as u32)) {
                Some(word) => words.push(word.clone()),
                None => words.push(format!("[MISSING:{}]", id)),
            }
        }
    }

    Ok(words.join(" "))
}
