//! Most-reported WCAG recommendations
//!
//! Reads a table of WCAG success criteria, scans a directory tree of
//! accessibility reports for tags such as `wcag111` or `wcag1412`, tallies
//! them and keeps the `top` most frequent through a [`BoundedTopK`].
//!
//! The definitions table has one criterion per line, a dotted index and a
//! title separated by a tab:
//!
//! ```text
//! 1.1.1	Non-text Content
//! 1.2.1	Audio-only and Video-only (Prerecorded)
//! ```
//!
//! which becomes the tags `wcag111` and `wcag121`.

use crate::topk::BoundedTopK;
use crate::traits::MinPQError;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const TAG_PREFIX: &str = "wcag";
const MIN_TAG_DIGITS: usize = 3;
const MAX_TAG_DIGITS: usize = 4;

/// Error type for the report pipeline
#[derive(Debug)]
pub enum ReportError {
    /// A file or directory could not be read
    Io { path: PathBuf, source: io::Error },
    /// A command-line argument could not be parsed
    InvalidArgument(String),
    /// The ranking queue rejected an update
    Queue(MinPQError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ReportError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            ReportError::Queue(err) => write!(f, "ranking failed: {}", err),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io { source, .. } => Some(source),
            ReportError::InvalidArgument(_) => None,
            ReportError::Queue(err) => Some(err),
        }
    }
}

impl From<MinPQError> for ReportError {
    fn from(err: MinPQError) -> Self {
        ReportError::Queue(err)
    }
}

/// Where to read from and how many tags to keep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Tab-separated WCAG definitions
    pub definitions: PathBuf,
    /// Directory searched recursively for reports
    pub reports_dir: PathBuf,
    /// Number of tags to rank
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            definitions: PathBuf::from("data/wcag.tsv"),
            reports_dir: PathBuf::from("data/reports"),
            top: 3,
        }
    }
}

impl ReportConfig {
    /// Parses `[definitions] [reports-dir] [top]`, falling back to defaults
    /// for missing positions.
    pub fn from_args<I>(args: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = ReportConfig::default();
        let mut args = args.into_iter();
        if let Some(definitions) = args.next() {
            config.definitions = PathBuf::from(definitions);
        }
        if let Some(reports_dir) = args.next() {
            config.reports_dir = PathBuf::from(reports_dir);
        }
        if let Some(top) = args.next() {
            config.top = top.parse().map_err(|_| {
                ReportError::InvalidArgument(format!("top must be a count, got {:?}", top))
            })?;
        }
        if let Some(extra) = args.next() {
            return Err(ReportError::InvalidArgument(format!(
                "unexpected argument {:?}",
                extra
            )));
        }
        Ok(config)
    }
}

/// One line of the final ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTag {
    pub tag: String,
    /// Title from the definitions table, if the tag is listed there
    pub title: Option<String>,
    pub count: usize,
}

/// Ranked tags, most frequent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<RankedTag>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {} WCAG Tags:", self.entries.len())?;
        for entry in &self.entries {
            let title = entry.title.as_deref().unwrap_or(&entry.tag);
            writeln!(f, "{} ({} occurrences)", title, entry.count)?;
        }
        Ok(())
    }
}

/// Parses the definitions table into a tag -> title map.
///
/// Lines without a tab are skipped.
pub fn parse_definitions(contents: &str) -> FxHashMap<String, String> {
    let mut definitions = FxHashMap::default();
    for (lineno, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((index, title)) => {
                let tag = format!("{}{}", TAG_PREFIX, index.trim().replace('.', ""));
                definitions.insert(tag, title.trim().to_string());
            }
            None => warn!("skipping malformed definition on line {}", lineno + 1),
        }
    }
    definitions
}

/// Finds every `wcag` tag followed by three or four digits.
///
/// Longer digit runs are cut after the fourth digit.
pub fn extract_tags(text: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    for (start, _) in text.match_indices(TAG_PREFIX) {
        let digits_start = start + TAG_PREFIX.len();
        let digits = text[digits_start..]
            .bytes()
            .take(MAX_TAG_DIGITS)
            .take_while(u8::is_ascii_digit)
            .count();
        if digits >= MIN_TAG_DIGITS {
            tags.push(&text[start..digits_start + digits]);
        }
    }
    tags
}

/// Tallies tag occurrences across all texts.
pub fn count_tags<'a, I>(texts: I) -> FxHashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for text in texts {
        for tag in extract_tags(text) {
            *counts.entry(tag.to_string()).or_default() += 1;
        }
    }
    counts
}

/// Keeps the `top` most frequent tags, most frequent first.
///
/// Tags are offered in name order so that, at the eviction boundary, the
/// alphabetically earlier of two equally frequent tags is the one retained.
pub fn top_tags(
    counts: &FxHashMap<String, usize>,
    top: usize,
) -> Result<Vec<(String, usize)>, MinPQError> {
    let mut tallies: Vec<(&String, usize)> = counts.iter().map(|(t, &c)| (t, c)).collect();
    tallies.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut retained: BoundedTopK<&String> = BoundedTopK::new(top);
    for (tag, count) in tallies {
        retained.offer(tag, count as f64)?;
    }

    Ok(retained
        .into_ranked()?
        .into_iter()
        .map(|tag| (tag.clone(), counts[tag]))
        .collect())
}

/// Reads every regular file under `dir`, recursively.
///
/// Unreadable files are logged and skipped; an unreadable directory is an
/// error.
pub fn read_reports(dir: &Path) -> Result<Vec<String>, ReportError> {
    let mut contents = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current).map_err(|source| ReportError::Io {
            path: current.clone(),
            source,
        })?;
        for entry in entries {
            let (path, file_type) = match entry.and_then(|e| Ok((e.path(), e.file_type()?))) {
                Ok(found) => found,
                Err(err) => {
                    warn!("skipping entry in {}: {}", current.display(), err);
                    continue;
                }
            };
            // Symbolic links to directories are not followed
            if file_type.is_dir() {
                pending.push(path);
                continue;
            }
            if file_type.is_symlink() && path.is_dir() {
                debug!("not following directory link {}", path.display());
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(text) => contents.push(text),
                Err(err) => warn!("skipping {}: {}", path.display(), err),
            }
        }
    }

    debug!("read {} reports under {}", contents.len(), dir.display());
    Ok(contents)
}

/// Runs the whole pipeline described by `config`.
pub fn run(config: &ReportConfig) -> Result<Report, ReportError> {
    let table = fs::read_to_string(&config.definitions).map_err(|source| ReportError::Io {
        path: config.definitions.clone(),
        source,
    })?;
    let definitions = parse_definitions(&table);
    info!(
        "loaded {} definitions from {}",
        definitions.len(),
        config.definitions.display()
    );

    let reports = read_reports(&config.reports_dir)?;
    let counts = count_tags(reports.iter().map(String::as_str));
    info!("found {} distinct tags", counts.len());

    let entries = top_tags(&counts, config.top)?
        .into_iter()
        .map(|(tag, count)| RankedTag {
            title: definitions.get(&tag).cloned(),
            tag,
            count,
        })
        .collect();
    Ok(Report { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_definitions() {
        let table = "1.1.1\tNon-text Content\n\nbroken line\n1.4.12\tText Spacing\n";
        let definitions = parse_definitions(table);

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions["wcag111"], "Non-text Content");
        assert_eq!(definitions["wcag1412"], "Text Spacing");
    }

    #[test]
    fn test_extract_tags() {
        let text = "tags: wcag111, wcag1412 and wcag12345; not wcag12 or wcag";
        assert_eq!(extract_tags(text), vec!["wcag111", "wcag1412", "wcag1234"]);
    }

    #[test]
    fn test_count_tags() {
        let counts = count_tags(["wcag111 wcag122", "wcag111", "nothing here"]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["wcag111"], 2);
        assert_eq!(counts["wcag122"], 1);
    }

    #[test]
    fn test_top_tags() {
        let counts: FxHashMap<String, usize> = [
            ("wcag111", 7),
            ("wcag121", 3),
            ("wcag122", 9),
            ("wcag131", 1),
        ]
        .into_iter()
        .map(|(t, c)| (t.to_string(), c))
        .collect();

        let top = top_tags(&counts, 3).unwrap();
        assert_eq!(
            top,
            vec![
                ("wcag122".to_string(), 9),
                ("wcag111".to_string(), 7),
                ("wcag121".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_config_from_args() {
        let config = ReportConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config, ReportConfig::default());

        let config =
            ReportConfig::from_args(["defs.tsv", "out", "5"].map(String::from)).unwrap();
        assert_eq!(config.definitions, PathBuf::from("defs.tsv"));
        assert_eq!(config.reports_dir, PathBuf::from("out"));
        assert_eq!(config.top, 5);

        let bad = ReportConfig::from_args(["a", "b", "many"].map(String::from));
        assert!(matches!(bad, Err(ReportError::InvalidArgument(_))));
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            entries: vec![
                RankedTag {
                    tag: "wcag111".into(),
                    title: Some("Non-text Content".into()),
                    count: 4,
                },
                RankedTag {
                    tag: "wcag999".into(),
                    title: None,
                    count: 1,
                },
            ],
        };
        assert_eq!(
            report.to_string(),
            "Top 2 WCAG Tags:\nNon-text Content (4 occurrences)\nwcag999 (1 occurrences)\n"
        );
    }

    #[test]
    fn test_run_on_directory() {
        let root = std::env::temp_dir().join(format!("wcag-report-{}", std::process::id()));
        let nested = root.join("reports").join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("wcag.tsv"), "1.1.1\tNon-text Content\n1.2.2\tCaptions\n").unwrap();
        fs::write(root.join("reports").join("a.html"), "wcag111 wcag122 wcag111").unwrap();
        fs::write(nested.join("b.html"), "wcag122 wcag122 wcag131").unwrap();

        let config = ReportConfig {
            definitions: root.join("wcag.tsv"),
            reports_dir: root.join("reports"),
            top: 2,
        };
        let report = run(&config).unwrap();
        fs::remove_dir_all(&root).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].tag, "wcag122");
        assert_eq!(report.entries[0].count, 3);
        assert_eq!(report.entries[0].title.as_deref(), Some("Captions"));
        assert_eq!(report.entries[1].tag, "wcag111");
        assert_eq!(report.entries[1].count, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_reports_skips_directory_links() {
        let root = std::env::temp_dir().join(format!("wcag-links-{}", std::process::id()));
        let reports = root.join("reports");
        fs::create_dir_all(&reports).unwrap();
        fs::write(reports.join("a.html"), "wcag111").unwrap();
        std::os::unix::fs::symlink(&reports, reports.join("loop")).unwrap();
        std::os::unix::fs::symlink(reports.join("a.html"), reports.join("b.html")).unwrap();

        let contents = read_reports(&reports);
        fs::remove_dir_all(&root).unwrap();

        // The file link is read, the directory link back to `reports` is not
        assert_eq!(contents.unwrap(), vec!["wcag111", "wcag111"]);
    }

    #[test]
    fn test_missing_reports_dir() {
        let missing = Path::new("definitely/not/a/real/dir");
        assert!(matches!(
            read_reports(missing),
            Err(ReportError::Io { .. })
        ));
    }
}
