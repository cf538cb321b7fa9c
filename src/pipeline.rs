//! The counting pipeline.
//!
//! ```text
//! input → Tokenizer → FrequencyTable → Ranker → Reporter → output
//! ```
//!
//! Each stage finishes before the next one starts: the whole input is
//! aggregated before anything is ranked, and ranking is complete before the
//! first line is written. A read error therefore never leaves partial output.

use std::io::{Read, Write};

use log::{debug, info};

use crate::config::WordRankConfig;
use crate::error::Result;
use crate::frequency::table::FrequencyTable;
use crate::report::reporter::{RenderSummary, ReportOptions, Reporter};

/// Tokenize `input` and count every word.
pub fn count_words<R: Read>(input: R, config: &WordRankConfig) -> Result<FrequencyTable> {
    let tokenizer = config.tokenizer();
    let mut tokens = tokenizer.stream(input);

    let table = FrequencyTable::from_tokens(tokens.by_ref())?;
    debug_assert_eq!(tokens.emitted() as u64, table.total_words());

    info!(
        "counted {} words ({} distinct)",
        table.total_words(),
        table.distinct_words()
    );
    Ok(table)
}

/// Count, rank and render `input`.
///
/// `options` decides the output; `config` decides tokenization and
/// ranking. Ranked lines go to `out`, warnings to `diag`.
pub fn run<R, W, E>(
    input: R,
    config: &WordRankConfig,
    options: &ReportOptions,
    out: &mut W,
    diag: &mut E,
) -> Result<RenderSummary>
where
    R: Read,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let table = count_words(input, config)?;

    let ranked = config.ranker().rank(&table);
    debug!(
        "ranked {} words with {} tie-break",
        ranked.len(),
        config.tie_break
    );

    Reporter::new(options.clone()).render(&ranked, table.total_words(), out, diag)
}
