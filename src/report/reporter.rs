//! Rendering of ranked word lists.
//!
//! The [`Reporter`] writes the top entries of a [`RankedList`] to an output
//! sink and writes diagnostics (the limit clamp warning) to a separate sink.
//! Everything that affects the output is carried by [`ReportOptions`], so
//! rendering depends only on its arguments.
//!
//! # Examples
//!
//! ```
//! use wordrank::frequency::{FrequencyTable, Ranker};
//! use wordrank::report::{ReportMode, ReportOptions, Reporter};
//!
//! let mut table = FrequencyTable::new();
//! for word in ["x", "x", "y"] {
//!     table.record(word).unwrap();
//! }
//! let ranked = Ranker::default().rank(&table);
//!
//! let reporter = Reporter::new(ReportOptions::new(2).with_mode(ReportMode::Relative));
//! let mut out = Vec::new();
//! let mut diag = Vec::new();
//! reporter.render(&ranked, table.total_words(), &mut out, &mut diag).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! let values: Vec<&str> = text.lines().map(|l| l.split_whitespace().nth(1).unwrap()).collect();
//! assert_eq!(values, vec!["0.67", "0.33"]);
//! assert!(diag.is_empty());
//! ```

use std::io::Write;

use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordRankError};
use crate::frequency::ranker::RankedList;
use crate::frequency::table::WordEntry;

/// Number of entries shown when no positive limit is given.
pub const DEFAULT_LIMIT: usize = 20;

/// Minimum width of the word column.
pub const WORD_COLUMN_WIDTH: usize = 30;

/// Minimum width of the value column.
pub const VALUE_COLUMN_WIDTH: usize = 20;

/// What value is printed next to each word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// The raw occurrence count.
    #[default]
    Absolute,
    /// The count divided by the total number of tokens.
    Relative,
}

impl ReportMode {
    /// Pick the mode from a `relative` flag.
    pub fn from_relative(relative: bool) -> Self {
        if relative {
            ReportMode::Relative
        } else {
            ReportMode::Absolute
        }
    }
}

/// Output formats for rendered reports.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width columns, one line per word
    #[default]
    Human,
    /// A single JSON document
    Json,
}

/// Options controlling a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Requested number of entries; 0 means [`DEFAULT_LIMIT`].
    pub limit: usize,
    /// Absolute or relative values.
    pub mode: ReportMode,
    /// Output format.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            mode: ReportMode::Absolute,
            format: OutputFormat::Human,
            pretty: false,
        }
    }
}

impl ReportOptions {
    /// Create options with the given limit and default everything else.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Set the report mode.
    pub fn with_mode(mut self, mode: ReportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable pretty JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The limit with 0 replaced by [`DEFAULT_LIMIT`].
    pub fn requested_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }
}

/// Outcome of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of entries written.
    pub entries: usize,
    /// Limit actually applied.
    pub limit: usize,
    /// Whether the requested limit exceeded the available entries.
    pub clamped: bool,
}

/// One row of a JSON report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// The normalized word.
    pub word: String,
    /// Number of occurrences.
    pub frequency: u64,
    /// Share of all tokens, rounded to two decimals; only in relative mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_frequency: Option<f64>,
}

/// A complete JSON report.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    /// Number of tokens counted, duplicates included.
    pub total_words: u64,
    /// Number of distinct words in the input.
    pub distinct_words: usize,
    /// Limit applied after clamping.
    pub limit: usize,
    /// Whether entries carry relative frequencies.
    pub relative: bool,
    /// Ranked entries, best first.
    pub entries: Vec<ReportEntry>,
}

/// Formats ranked entries.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    options: ReportOptions,
}

impl Reporter {
    /// Create a reporter with the given options.
    pub fn new(options: ReportOptions) -> Self {
        Reporter { options }
    }

    /// Write the top entries of `ranked` to `out`.
    ///
    /// `total_words` is the number of tokens the ranked table was built from.
    /// A limit larger than the number of ranked entries is clamped and a
    /// warning line is written to `diag`. An empty ranked list produces no
    /// human-readable output and no warning.
    pub fn render<W, E>(
        &self,
        ranked: &RankedList<'_>,
        total_words: u64,
        out: &mut W,
        diag: &mut E,
    ) -> Result<RenderSummary>
    where
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        if ranked.is_empty() {
            info!("input contained no words");
            if self.options.format == OutputFormat::Json {
                self.write_json(&[], total_words, 0, 0, out)?;
            }
            return Ok(RenderSummary {
                entries: 0,
                limit: 0,
                clamped: false,
            });
        }

        if self.options.mode == ReportMode::Relative && total_words == 0 {
            return Err(WordRankError::invalid_argument(
                "relative frequencies need a non-zero word total",
            ));
        }

        let requested = self.options.requested_limit();
        let available = ranked.len();
        let clamped = requested > available;
        let limit = if clamped {
            writeln!(
                diag,
                "WARN: requested {requested} words but only {available} distinct words \
                 are available"
            )?;
            available
        } else {
            requested
        };

        let entries = ranked.top(limit);
        match self.options.format {
            OutputFormat::Human => self.write_human(entries, total_words, out)?,
            OutputFormat::Json => self.write_json(entries, total_words, available, limit, out)?,
        }
        out.flush()?;

        debug!("rendered {} of {} ranked words", entries.len(), available);
        Ok(RenderSummary {
            entries: entries.len(),
            limit,
            clamped,
        })
    }

    fn write_human<W: Write + ?Sized>(
        &self,
        entries: &[&WordEntry],
        total_words: u64,
        out: &mut W,
    ) -> Result<()> {
        for entry in entries {
            match self.options.mode {
                ReportMode::Absolute => writeln!(
                    out,
                    "{:<word_w$}\t{:<value_w$}",
                    entry.word,
                    entry.frequency,
                    word_w = WORD_COLUMN_WIDTH,
                    value_w = VALUE_COLUMN_WIDTH
                )?,
                ReportMode::Relative => writeln!(
                    out,
                    "{:<word_w$}\t{:<value_w$}",
                    entry.word,
                    ratio_text(entry.frequency, total_words),
                    word_w = WORD_COLUMN_WIDTH,
                    value_w = VALUE_COLUMN_WIDTH
                )?,
            }
        }
        Ok(())
    }

    fn write_json<W: Write + ?Sized>(
        &self,
        entries: &[&WordEntry],
        total_words: u64,
        distinct_words: usize,
        limit: usize,
        out: &mut W,
    ) -> Result<()> {
        let relative_mode = self.options.mode == ReportMode::Relative;
        let report = Report {
            total_words,
            distinct_words,
            limit,
            relative: relative_mode,
            entries: entries
                .iter()
                .enumerate()
                .map(|(i, entry)| ReportEntry {
                    rank: i + 1,
                    word: entry.word.clone(),
                    frequency: entry.frequency,
                    relative_frequency: relative_mode
                        .then(|| rounded_ratio(entry.frequency, total_words)),
                })
                .collect(),
        };

        if self.options.pretty {
            serde_json::to_writer_pretty(&mut *out, &report)?;
        } else {
            serde_json::to_writer(&mut *out, &report)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

fn relative(frequency: u64, total_words: u64) -> f64 {
    frequency as f64 / total_words as f64
}

/// The relative frequency as printed in human output.
fn ratio_text(frequency: u64, total_words: u64) -> String {
    format!("{:.2}", relative(frequency, total_words))
}

/// The printed ratio read back, so JSON and human output never disagree.
fn rounded_ratio(frequency: u64, total_words: u64) -> f64 {
    let ratio = relative(frequency, total_words);
    format!("{ratio:.2}").parse().unwrap_or(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::Tokenizer;
    use crate::analysis::tokenizer::ascii_alphabetic::AsciiAlphabeticTokenizer;
    use crate::frequency::ranker::Ranker;
    use crate::frequency::table::FrequencyTable;

    fn table_for(text: &str) -> FrequencyTable {
        FrequencyTable::from_tokens(AsciiAlphabeticTokenizer::new().tokenize_str(text)).unwrap()
    }

    fn render(text: &str, options: ReportOptions) -> (String, String, RenderSummary) {
        let table = table_for(text);
        let ranked = Ranker::default().rank(&table);
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let summary = Reporter::new(options)
            .render(&ranked, table.total_words(), &mut out, &mut diag)
            .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
            summary,
        )
    }

    fn line(word: &str, value: &str) -> String {
        format!("{word:<30}\t{value:<20}\n")
    }

    #[test]
    fn test_absolute_layout() {
        let (out, diag, summary) = render("a a b b b c", ReportOptions::new(3));

        let expected = [line("b", "3"), line("a", "2"), line("c", "1")].concat();
        assert_eq!(out, expected);
        assert!(diag.is_empty());
        assert_eq!(
            summary,
            RenderSummary {
                entries: 3,
                limit: 3,
                clamped: false
            }
        );
    }

    #[test]
    fn test_relative_layout() {
        let (out, _, _) = render(
            "x x y",
            ReportOptions::new(2).with_mode(ReportMode::Relative),
        );

        assert_eq!(out, [line("x", "0.67"), line("y", "0.33")].concat());
    }

    #[test]
    fn test_columns_are_minimum_widths() {
        let long = "w".repeat(40);
        let (out, _, _) = render(&long, ReportOptions::new(1));

        assert_eq!(out, format!("{long}\t{:<20}\n", "1"));
    }

    #[test]
    fn test_limit_truncates() {
        let (out, diag, summary) = render("a a b b b c", ReportOptions::new(2));

        assert_eq!(out.lines().count(), 2);
        assert!(diag.is_empty());
        assert!(!summary.clamped);
    }

    #[test]
    fn test_limit_is_clamped_with_warning() {
        let (out, diag, summary) = render("one two three four five", ReportOptions::new(100));

        assert_eq!(out.lines().count(), 5);
        assert_eq!(diag.lines().count(), 1);
        assert!(diag.starts_with("WARN:"));
        assert!(diag.contains("100"));
        assert!(diag.contains('5'));
        assert_eq!(
            summary,
            RenderSummary {
                entries: 5,
                limit: 5,
                clamped: true
            }
        );
    }

    #[test]
    fn test_zero_limit_means_default() {
        let text: String = (b'a'..=b'z')
            .map(|c| format!("{} ", (c as char).to_string().repeat(2)))
            .collect();
        let (out, diag, summary) = render(&text, ReportOptions::new(0));

        assert_eq!(out.lines().count(), DEFAULT_LIMIT);
        assert!(diag.is_empty());
        assert_eq!(summary.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        let (out, diag, summary) = render(
            "",
            ReportOptions::new(20).with_mode(ReportMode::Relative),
        );

        assert!(out.is_empty());
        assert!(diag.is_empty());
        assert_eq!(summary.entries, 0);
    }

    #[test]
    fn test_json_report() {
        let (out, _, _) = render(
            "x x y",
            ReportOptions::new(5)
                .with_mode(ReportMode::Relative)
                .with_format(OutputFormat::Json),
        );

        let report: Report = serde_json::from_str(&out).unwrap();
        assert_eq!(report.total_words, 3);
        assert_eq!(report.distinct_words, 2);
        assert_eq!(report.limit, 2);
        assert!(report.relative);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].rank, 1);
        assert_eq!(report.entries[0].word, "x");
        assert_eq!(report.entries[0].frequency, 2);
        assert_eq!(report.entries[0].relative_frequency, Some(0.67));
        assert_eq!(report.entries[1].relative_frequency, Some(0.33));
    }

    #[test]
    fn test_json_ratio_matches_human_rounding() {
        // 1/8 and 7/8 sit exactly on a rounding boundary
        let text = "b b b b b b b a";
        let relative = ReportOptions::new(2).with_mode(ReportMode::Relative);

        let (human, _, _) = render(text, relative.clone());
        assert_eq!(human, [line("b", "0.88"), line("a", "0.12")].concat());

        let (json, _, _) = render(text, relative.with_format(OutputFormat::Json));
        let report: Report = serde_json::from_str(&json).unwrap();
        let printed: Vec<f64> = human
            .lines()
            .map(|l| l.split('\t').nth(1).unwrap().trim_end().parse().unwrap())
            .collect();
        let ratios: Vec<f64> = report
            .entries
            .iter()
            .map(|e| e.relative_frequency.unwrap())
            .collect();
        assert_eq!(ratios, printed);
        assert_eq!(report.entries[1].relative_frequency, Some(0.12));
    }

    #[test]
    fn test_json_absolute_omits_ratio() {
        let (out, _, _) = render(
            "x x y",
            ReportOptions::new(5).with_format(OutputFormat::Json),
        );

        assert!(!out.contains("relative_frequency"));
    }

    #[test]
    fn test_relative_with_zero_total_is_rejected() {
        let table = table_for("word");
        let ranked = Ranker::default().rank(&table);
        let reporter = Reporter::new(ReportOptions::new(1).with_mode(ReportMode::Relative));

        let result = reporter.render(&ranked, 0, &mut Vec::new(), &mut Vec::new());
        assert!(result.is_err());
    }
}
