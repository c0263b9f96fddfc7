use std::env;
use std::path::Path;
use std::process;

use wordpack_codec::{compress, decompress, load_word_file, Language, SqliteStore};

/// Word-list file expected for each language, relative to the word-list
/// directory. Missing files are simply not loaded.
const WORD_LISTS: &[(Language, &str)] = &[
    (Language::En, "en.txt"),
    (Language::Ru, "ru.txt"),
    (Language::Zh, "zh.txt"),
    (Language::Ja, "ja.txt"),
    (Language::Es, "es.txt"),
    (Language::Fr, "fr.txt"),
    (Language::It, "it.txt"),
    (Language::Pt, "pt.txt"),
    (Language::De, "de.txt"),
    (Language::Ar, "ar.txt"),
    (Language::Fa, "fa.txt"),
    (Language::Ko, "ko.txt"),
    (Language::Nl, "nl.txt"),
    (Language::Po, "po.txt"),
    (Language::Th, "th.txt"),
    (Language::Vi, "vi.txt"),
];

const DEMO_SENTENCES: &[(&str, Language)] = &[
    ("hi", Language::En),
    ("hello world", Language::En),
    ("the quick brown fox jumps over the lazy dog", Language::En),
    (
        "compression algorithms are fascinating because they reduce data size while preserving information",
        Language::En,
    ),
    ("Привет мир как дела", Language::Ru),
    ("Это тест компрессии", Language::Ru),
    ("你好世界", Language::Zh),
    ("这是一个测试", Language::Zh),
    ("こんにちは世界", Language::Ja),
    ("これはテストです", Language::Ja),
    ("Hola mundo", Language::Es),
    ("La compresión es fascinante", Language::Es),
    ("Bonjour le monde", Language::Fr),
    ("Ciao mondo", Language::It),
    ("Olá mundo", Language::Pt),
    ("Hallo Welt", Language::De),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut db_path = "wordpack.db".to_string();
    let mut words_dir = ".".to_string();
    let mut idx = 1;
    while idx < args.len() {
        match args[idx].as_str() {
            "--words" => {
                if let Some(dir) = args.get(idx + 1) {
                    words_dir = dir.clone();
                    idx += 2;
                } else {
                    eprintln!("ERROR: --words flag requires a directory argument.");
                    process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Usage: {} [db-path] [--words <dir>]", args[0]);
                process::exit(0);
            }
            positional => {
                db_path = positional.to_string();
                idx += 1;
            }
        }
    }

    // Word lists are only bulk-loaded when the database is created fresh
    let fresh = !Path::new(&db_path).exists();

    println!("Dictionary store: {}", db_path);
    println!("{}", "=".repeat(60));

    let mut store = match SqliteStore::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("\nERROR: Failed to open dictionary store");
            eprintln!("  {}", e);
            process::exit(1);
        }
    };

    if fresh {
        for (language, file_name) in WORD_LISTS {
            let path = Path::new(&words_dir).join(file_name);
            if !path.exists() {
                continue;
            }
            println!("Loading {}...", path.display());
            match load_word_file(&mut store, &path, *language) {
                Ok(count) => println!("  {} entries", count),
                Err(e) => {
                    eprintln!("\nERROR: Failed to load {}", path.display());
                    eprintln!("  {}", e);
                    process::exit(1);
                }
            }
        }
        println!("{}", "=".repeat(60));
    }

    for (num, (sentence, language)) in DEMO_SENTENCES.iter().enumerate() {
        let frame = match compress(&store, sentence, *language) {
            Ok(frame) => frame,
            Err(e) => {
                eprintln!("\nERROR: Failed to compress test {}", num + 1);
                eprintln!("  {}", e);
                process::exit(1);
            }
        };
        let restored = match decompress(&store, &frame) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("\nERROR: Failed to decompress test {}", num + 1);
                eprintln!("  {}", e);
                process::exit(1);
            }
        };

        println!("Test {} ({:?}): {}", num + 1, language, hex::encode(&frame));
        println!("Original: {}", sentence);
        println!("Decompressed: {}", restored);
        println!();
    }
}
