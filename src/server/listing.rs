//! Generated directory listings.

use std::fs;
use std::path::Path;

use crate::server::error::Error;
use crate::server::response::{Response, StatusCode};

/// Charset declared in, and used to encode, every listing.
pub const LISTING_CHARSET: &str = "utf-8";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct DirectoryEntry {
    // Field order is the sort key: directories (`is_file == false`) first,
    // then by name.
    is_file: bool,
    name: String,
}

impl DirectoryEntry {
    fn render(&self) -> String {
        if self.is_file {
            format!("<a href=\"{0}\">{0}</a>", self.name)
        } else {
            format!("<a href=\"{0}/\">{0}/</a>", self.name)
        }
    }
}

/// Produce a 200 `text/html` listing of the immediate children of `dir`.
///
/// Hidden entries are included and names are inserted without HTML escaping.
pub fn generate_listing(dir: &Path) -> Result<Response, Error> {
    let mut entries = read_entries(dir)?;
    entries.sort();

    let document = render_document(&entries);
    Ok(Response::new(StatusCode::Ok, "text/html", document.into_bytes()))
}

fn read_entries(dir: &Path) -> Result<Vec<DirectoryEntry>, Error> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().into_string().map_err(|raw| {
            Error::EncodingError(format!(
                "entry {raw:?} in {dir} is not valid {LISTING_CHARSET}",
                dir = dir.display()
            ))
        })?;
        // Follows symlinks, so a link to a directory lists as a directory.
        let is_dir = fs::metadata(entry.path())
            .map(|meta| meta.is_dir())
            .or_else(|_| entry.file_type().map(|ty| ty.is_dir()))?;
        entries.push(DirectoryEntry {
            is_file: !is_dir,
            name,
        });
    }
    Ok(entries)
}

fn render_document(entries: &[DirectoryEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("<meta charset=\"{LISTING_CHARSET}\">"));
    lines.extend(entries.iter().map(DirectoryEntry::render));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool) -> DirectoryEntry {
        DirectoryEntry {
            is_file: !is_dir,
            name: name.to_string(),
        }
    }

    #[test]
    fn directories_sort_before_files() {
        let mut entries = vec![
            entry("b.txt", false),
            entry("A", true),
            entry("a.txt", false),
            entry("Z", true),
        ];
        entries.sort();
        let rendered: Vec<String> = entries
            .iter()
            .map(|e| if e.is_file { e.name.clone() } else { format!("{}/", e.name) })
            .collect();
        assert_eq!(rendered, vec!["A/", "Z/", "a.txt", "b.txt"]);
    }

    #[test]
    fn render_marks_directories() {
        assert_eq!(entry("docs", true).render(), "<a href=\"docs/\">docs/</a>");
        assert_eq!(entry("a.txt", false).render(), "<a href=\"a.txt\">a.txt</a>");
    }

    #[test]
    fn names_are_not_escaped() {
        assert_eq!(entry("<b>", false).render(), "<a href=\"<b>\"><b></a>");
    }

    #[test]
    fn document_starts_with_charset() {
        let doc = render_document(&[entry("x", false)]);
        assert_eq!(doc, "<meta charset=\"utf-8\">\n<a href=\"x\">x</a>");
    }

    #[test]
    fn empty_directory_document() {
        assert_eq!(render_document(&[]), "<meta charset=\"utf-8\">");
    }
}
