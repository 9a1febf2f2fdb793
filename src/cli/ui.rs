//! Terminal presentation helpers: spinners and file tables.

use crate::error::Result;
use crate::files::FileTag;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Starts a spinner for a call that may take a while (network-bound `gh`/`git` calls).
///
/// The caller finishes it with `finish_and_clear`.
pub fn spinner(message: &str) -> Result<ProgressBar> {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    Ok(bar)
}

/// Numbered table of candidate files; positions start at 1 to match the selection syntax.
pub fn file_table<'a>(files: impl IntoIterator<Item = (&'a str, Option<FileTag>)>) -> Table {
    let entries: Vec<(&str, Option<FileTag>)> = files.into_iter().collect();
    let tagged = entries.iter().any(|(_, tag)| tag.is_some());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if tagged {
        table.set_header(vec!["#", "State", "File"]);
    } else {
        table.set_header(vec!["#", "File"]);
    }

    for (i, (file, tag)) in entries.iter().enumerate() {
        let mut row = vec![Cell::new(i + 1)];
        if tagged {
            row.push(Cell::new(tag.map(|t| t.to_string()).unwrap_or_default()));
        }
        row.push(Cell::new(file));
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_table_numbers_from_one() {
        let table = file_table([("a.txt", None), ("b.txt", None)]);
        let rendered = table.to_string();
        assert!(rendered.contains("1"));
        assert!(rendered.contains("a.txt"));
        assert!(rendered.contains("b.txt"));
        assert!(!rendered.contains("State"));
    }

    #[test]
    fn test_file_table_shows_tags() {
        let table = file_table([("x.txt", Some(FileTag::New)), ("z.txt", Some(FileTag::Modified))]);
        let rendered = table.to_string();
        assert!(rendered.contains("State"));
        assert!(rendered.contains("NEW"));
        assert!(rendered.contains("MOD"));
    }

    #[test]
    fn test_spinner_template_is_valid() {
        let bar = spinner("Working...").unwrap();
        bar.finish_and_clear();
    }
}
