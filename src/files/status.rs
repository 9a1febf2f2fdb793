//! Classification of changed files for the update workflow.

use std::fmt;

/// Display tag of a candidate file. Tags never influence selection positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTag {
    New,
    Modified,
}

impl fmt::Display for FileTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTag::New => write!(f, "NEW"),
            FileTag::Modified => write!(f, "MOD"),
        }
    }
}

/// Which changed files the user wants to pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateScope {
    /// Untracked files only.
    New,
    /// Modified tracked files only.
    Modified,
    /// New files first, then modified ones.
    Combined,
}

impl UpdateScope {
    pub const ALL: [UpdateScope; 3] = [
        UpdateScope::New,
        UpdateScope::Modified,
        UpdateScope::Combined,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UpdateScope::New => "New (untracked) files",
            UpdateScope::Modified => "Modified files",
            UpdateScope::Combined => "All changed files (new + modified)",
        }
    }
}

/// New and changed files as reported by git, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub new_files: Vec<String>,
    pub changed_files: Vec<String>,
}

impl FileReport {
    /// Builds the report from the raw `ls-files` outputs.
    ///
    /// No reconciliation happens between the two lists: a path reported by both
    /// appears in both.
    pub fn from_reports(untracked: &str, modified: &str) -> Self {
        Self {
            new_files: report_lines(untracked),
            changed_files: report_lines(modified),
        }
    }

    /// New files followed by changed files.
    pub fn combined(&self) -> Vec<String> {
        self.new_files
            .iter()
            .chain(self.changed_files.iter())
            .cloned()
            .collect()
    }

    pub fn candidates(&self, scope: UpdateScope) -> Vec<String> {
        match scope {
            UpdateScope::New => self.new_files.clone(),
            UpdateScope::Modified => self.changed_files.clone(),
            UpdateScope::Combined => self.combined(),
        }
    }

    pub fn tag(&self, file: &str) -> FileTag {
        if self.new_files.iter().any(|f| f == file) {
            FileTag::New
        } else {
            FileTag::Modified
        }
    }

    pub fn is_empty(&self) -> bool {
        self.new_files.is_empty() && self.changed_files.is_empty()
    }
}

/// Splits a newline-delimited report, dropping line terminators and empty lines.
pub fn report_lines(report: &str) -> Vec<String> {
    report
        .split('\n')
        .map(|line| line.trim_end_matches(['\r', '\n']))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
