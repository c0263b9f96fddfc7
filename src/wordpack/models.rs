//! Data structures shared by the wordpack codec components

use super::error::{Result, WordpackError};

/// Reserved id value marking a token position with no dictionary id.
pub const UNSPECIFIED: u16 = 0xFFFF;

/// Ids at or above this bound do not fit the 16-bit id stream and are
/// treated as absent during encoding.
pub const FRAME_ID_LIMIT: u32 = 65536;

/// Language registry for compressed frames.
///
/// Discriminants are the wire values. `Sep` is reserved and carries no
/// codec meaning; `Unspecified` is the id sentinel and is not a language
/// usable in frames (the frame field is a single byte).
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Sep = 0x000,
    De = 0x001,
    En = 0x002,
    Es = 0x003,
    Fr = 0x004,
    It = 0x005,
    Ja = 0x006,
    Pt = 0x007,
    Ru = 0x008,
    Zh = 0x009,
    Ar = 0x00A,
    Fa = 0x00B,
    Ko = 0x00C,
    Nl = 0x00D,
    Po = 0x00E,
    Th = 0x00F,
    Vi = 0x010,
    Unspecified = 0xFFFF,
}

impl TryFrom<u8> for Language {
    type Error = WordpackError;
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Self::Sep),
            0x01 => Ok(Self::De),
            0x02 => Ok(Self::En),
            0x03 => Ok(Self::Es),
            0x04 => Ok(Self::Fr),
            0x05 => Ok(Self::It),
            0x06 => Ok(Self::Ja),
            0x07 => Ok(Self::Pt),
            0x08 => Ok(Self::Ru),
            0x09 => Ok(Self::Zh),
            0x0A => Ok(Self::Ar),
            0x0B => Ok(Self::Fa),
            0x0C => Ok(Self::Ko),
            0x0D => Ok(Self::Nl),
            0x0E => Ok(Self::Po),
            0x0F => Ok(Self::Th),
            0x10 => Ok(Self::Vi),
            other => Err(WordpackError::InvalidLanguage(other as u16)),
        }
    }
}

/// A dictionary row: a word and its numeric id within one language.
///
/// `(id, language)` is the unique key; reloading it replaces the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub id: u32,
    pub word: String,
    pub language: Language,
}
