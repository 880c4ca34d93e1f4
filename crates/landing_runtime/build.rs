use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SELL_KIND: &str = "sell";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookEntry {
    id: String,
    title: String,
    author: String,
    cover: String,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    liked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LandingContentFile {
    schema_version: u32,
    books: Vec<BookEntry>,
    #[serde(flatten)]
    sections: toml::Table,
}

fn validate_books(path: &str, books: &[BookEntry]) {
    if books.is_empty() {
        panic!("content catalog {path} declares no books");
    }

    let mut seen = BTreeSet::new();
    for book in books {
        if book.id.trim().is_empty() {
            panic!("book `{}` in {path} has an empty id", book.title);
        }
        if !seen.insert(book.id.as_str()) {
            panic!("duplicate book id `{}` in {path}", book.id);
        }
        if let Some(price) = book.price {
            if !price.is_finite() || price < 0.0 {
                panic!("book `{}` in {path} has invalid price {price}", book.id);
            }
            if book.kind != SELL_KIND {
                panic!(
                    "book `{}` in {path} has a price but kind `{}`; only `{SELL_KIND}` listings carry prices",
                    book.id, book.kind
                );
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("content").join("landing.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let content: LandingContentFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if content.schema_version != 1 {
        panic!(
            "content schema mismatch in {}: expected 1 found {}",
            path.display(),
            content.schema_version
        );
    }
    validate_books(&path.display().to_string(), &content.books);

    let json = serde_json::to_string_pretty(&content).expect("serialize landing content");
    let generated = format!(
        "/// Build-time generated landing content catalog JSON.\n\
pub const LANDING_CONTENT_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("landing_content_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
