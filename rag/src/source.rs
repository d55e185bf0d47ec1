use std::fs;
use std::path::Path;

use serde_json::Value;
use walkdir::WalkDir;

/// One loaded source file: a JSON array of semi-structured book records.
pub struct SourceFile {
    pub path: String,
    pub books: Vec<Value>,
}

/// Collects `.json` files under the data directory, in sorted path order so a
/// given tree always yields the same file sequence.
pub fn find_data_files(dir: &str) -> Vec<String> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir).sort_by_file_name().into_iter();
    for entry in walker.filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_json_file(path) {
            files.push(path.to_string_lossy().to_string());
        }
    }

    files
}

/// Loads each file, skipping unreadable or malformed ones with a warning so
/// one bad file never aborts an indexing run.
pub fn load_source_files(paths: &[String]) -> (Vec<SourceFile>, Vec<String>) {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for path in paths {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warnings.push(format!("'{}' could not be read ({}). Skipping.", path, err));
                continue;
            }
        };
        match parse_books(&text) {
            Ok(books) => files.push(SourceFile {
                path: path.clone(),
                books,
            }),
            Err(err) => warnings.push(format!("'{}' is not a valid book file ({}). Skipping.", path, err)),
        }
    }

    (files, warnings)
}

pub fn parse_books(text: &str) -> Result<Vec<Value>, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    match value {
        Value::Array(books) => Ok(books),
        _ => Err("expected a top-level JSON array of books".to_string()),
    }
}

fn is_json_file(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".json")
}
