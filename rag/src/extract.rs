use serde_json::Value;

use crate::source::SourceFile;

/// Summaries at or below this length carry too little signal to index.
pub const MIN_SUMMARY_CHARS: usize = 20;

const UNAVAILABLE: &str = "N/A";
const FAILED_EXTRACTION: &str = "Abstract not found";

const BOOK_TITLE_KEYS: &[&str] = &["book_title", "Book Title"];
const BOOK_SUMMARY_KEYS: &[&str] = &["summary"];
const CHAPTER_NAME_KEYS: &[&str] = &["chapter_name", "title"];
const CHAPTER_SUMMARY_KEYS: &[&str] = &["chapter_summary", "summary"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub id: String,
    pub text: String,
    pub meta: ChunkMeta,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkMeta {
    pub kind: ChunkKind,
    pub title: String,
    pub chapter: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkKind {
    Book,
    Chapter,
}

impl ChunkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChunkKind::Book => "book",
            ChunkKind::Chapter => "chapter",
        }
    }
}

#[derive(Debug, Default)]
pub struct ExtractReport {
    pub book_chunks: usize,
    pub chapter_chunks: usize,
    /// Chapters that failed the quality filter, as `'chapter' in 'book'`.
    pub rejected_chapters: Vec<String>,
}

/// Returns the value of the first present key, or the named default. Source
/// files disagree on field spellings, so every field read goes through this.
pub fn first_string(record: &Value, keys: &[&str], default: &str) -> String {
    first_present(record, keys).unwrap_or_else(|| default.to_string())
}

fn first_present(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str).map(str::to_string))
}

/// A summary earns a chunk only if it is non-empty, longer than the minimum
/// length, and not the "N/A" placeholder.
pub fn usable_summary(summary: &str) -> bool {
    !summary.is_empty() && summary.chars().count() > MIN_SUMMARY_CHARS && summary != UNAVAILABLE
}

/// Turns loaded book records into the flat ordered chunk list that gets
/// embedded and stored. Pure: all reporting goes through the returned value.
pub fn extract_chunks(files: &[SourceFile]) -> (Vec<Chunk>, ExtractReport) {
    let mut chunks = Vec::new();
    let mut report = ExtractReport::default();
    let mut next_book = 1usize;
    let mut next_chapter = 1usize;

    for file in files {
        for book in &file.books {
            let title = first_string(book, BOOK_TITLE_KEYS, "Unknown Title");

            if let Some(summary) = first_present(book, BOOK_SUMMARY_KEYS) {
                if usable_summary(&summary) {
                    chunks.push(Chunk {
                        id: format!("book_{}", next_book),
                        text: format!("Book: {}. Summary: {}", title, summary),
                        meta: ChunkMeta {
                            kind: ChunkKind::Book,
                            title: title.clone(),
                            chapter: None,
                        },
                    });
                    next_book += 1;
                }
            }

            if let Some(chapters) = book.get("chapters").and_then(Value::as_array) {
                for chapter in chapters {
                    let name = first_string(chapter, CHAPTER_NAME_KEYS, "Unknown Chapter");
                    let summary = first_present(chapter, CHAPTER_SUMMARY_KEYS).unwrap_or_default();
                    if usable_summary(&summary) && !summary.contains(FAILED_EXTRACTION) {
                        chunks.push(Chunk {
                            id: format!("chapter_{}", next_chapter),
                            text: format!(
                                "Book: {}. Chapter: {}. Summary: {}",
                                title, name, summary
                            ),
                            meta: ChunkMeta {
                                kind: ChunkKind::Chapter,
                                title: title.clone(),
                                chapter: Some(name),
                            },
                        });
                        next_chapter += 1;
                    } else {
                        report.rejected_chapters.push(format!("'{}' in '{}'", name, title));
                    }
                }
            }
        }
    }

    report.book_chunks = next_book - 1;
    report.chapter_chunks = next_chapter - 1;
    (chunks, report)
}
