//! # wordpack-codec
//!
//! A dictionary-substitution text codec: each token of the input is replaced
//! by a fixed-width 16-bit identifier drawn from a per-language word
//! dictionary, with literal fallback for tokens the dictionary does not know.
//!
//! **Note:** tokenization is lossy. Casing, punctuation, and original
//! spacing are not preserved.
pub mod wordpack;

// Re-export the main types for convenience
pub use wordpack::{
    compress, decompress, load_word_file, tokenize,
    error::{Result, WordpackError},
    models::{Language, WordEntry},
    store::{DictionaryStore, SqliteStore},
};
