//! Persistent per-language word dictionary storage

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};

use super::error::Result;
use super::models::{Language, WordEntry, FRAME_ID_LIMIT};

/// Bidirectional word <-> id lookup, keyed per language.
///
/// Both lookup directions take the whole distinct-value set of a frame
/// and must answer it with a single store query, never one query per
/// value.
pub trait DictionaryStore {
    /// Upsert entries keyed by `(id, language)`, folding each word to
    /// lowercase first. Replaces any prior word for the same key;
    /// reloading identical entries leaves the store unchanged.
    fn load(&mut self, entries: &[WordEntry]) -> Result<()>;

    /// Resolve words to ids for one language. Words that are absent, or
    /// whose id does not fit the 16-bit id stream, are omitted from the
    /// result rather than reported as errors.
    fn lookup_words(
        &self,
        words: &HashSet<String>,
        language: Language,
    ) -> Result<HashMap<String, u32>>;

    /// Resolve ids to words for one language. Absent ids are omitted.
    fn lookup_ids(&self, ids: &HashSet<u32>, language: Language) -> Result<HashMap<u32, String>>;
}

/// SQLite-backed dictionary store.
///
/// Rows live in a single `words` table keyed by `(id, lang)`, with a
/// secondary index on `(word, lang)` for the encoding direction.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the database at the given path and make
    /// sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening dictionary store: {}", path.display());
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open a transient in-memory store. Useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         CREATE TABLE IF NOT EXISTS words (
             id INTEGER NOT NULL,
             word TEXT NOT NULL,
             lang INTEGER NOT NULL,
             PRIMARY KEY (id, lang)
         );
         CREATE INDEX IF NOT EXISTS idx_words_word_lang ON words(word, lang);",
    )?;
    Ok(())
}

/// Builds a `?N, ?N+1, ...` placeholder list for a batched IN query.
fn placeholder_list(first: usize, count: usize) -> String {
    (first..first + count)
        .map(|n| format!("?{n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl DictionaryStore for SqliteStore {
    fn load(&mut self, entries: &[WordEntry]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT OR REPLACE INTO words (id, word, lang) VALUES (?1, ?2, ?3)")?;
            for entry in entries {
                stmt.execute(params![
                    entry.id,
                    entry.word.to_lowercase(),
                    entry.language as u16
                ])?;
            }
        }
        tx.commit()?;
        debug!("Upserted {} dictionary rows", entries.len());
        Ok(())
    }

    fn lookup_words(
        &self,
        words: &HashSet<String>,
        language: Language,
    ) -> Result<HashMap<String, u32>> {
        if words.is_empty() {
            return Ok(HashMap::new());
        }

        // Ids that do not fit a 16-bit frame slot are filtered out in SQL
        let sql = format!(
            "SELECT word, id FROM words WHERE lang = ?1 AND id < {} AND word IN ({})",
            FRAME_ID_LIMIT,
            placeholder_list(2, words.len())
        );
        let mut bindings: Vec<Value> = Vec::with_capacity(words.len() + 1);
        bindings.push(Value::from(language as u16 as i64));
        for word in words {
            bindings.push(Value::from(word.clone()));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bindings), |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, u32>(1)?))
        })?;

        let mut resolved = HashMap::new();
        for row in rows {
            let (word, id) = row?;
            resolved.insert(word, id);
        }
        debug!(
            "Word batch lookup: {}/{} resolved for {:?}",
            resolved.len(),
            words.len(),
            language
        );
        Ok(resolved)
    }

    fn lookup_ids(&self, ids: &HashSet<u32>, language: Language) -> Result<HashMap<u32, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT id, word FROM words WHERE lang = ?1 AND id IN ({})",
            placeholder_list(2, ids.len())
        );
        let mut bindings: Vec<Value> = Vec::with_capacity(ids.len() + 1);
        bindings.push(Value::from(language as u16 as i64));
        for id in ids {
            bindings.push(Value::from(*id as i64));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bindings), |row| {
            Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut resolved = HashMap::new();
        for row in rows {
            let (id, word) = row?;
            resolved.insert(id, word);
        }
        debug!(
            "Id batch lookup: {}/{} resolved for {:?}",
            resolved.len(),
            ids.len(),
            language
        );
        Ok(resolved)
    }
}

/// Bulk-load a flat word-list file into the store.
///
/// One entry per line: an unsigned integer id, whitespace, the word.
/// Additional fields are ignored. Lines with fewer than two fields, or
/// whose id field does not parse, are skipped without error.
///
/// Returns the number of entries loaded.
pub fn load_word_file<S: DictionaryStore>(
    store: &mut S,
    path: impl AsRef<Path>,
    language: Language,
) -> Result<usize> {
    let path = path.as_ref();
    info!("Loading word list {} ({:?})", path.display(), language);

    let file = File::open(path)?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let id = match fields.next().map(str::parse::<u32>) {
            Some(Ok(id)) => id,
            _ => continue,
        };
        let word = match fields.next() {
            Some(word) => word,
            None => continue,
        };
        entries.push(WordEntry {
            id,
            word: word.to_string(),
            language,
        });
    }

    store.load(&entries)?;
    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries.len())
}
