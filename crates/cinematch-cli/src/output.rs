//! Output formatting for query results.

use cinematch::QueryResult;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// One answered query in `--json` mode.
#[derive(Debug, Serialize)]
pub(crate) struct JsonAnswer<'a> {
    pub(crate) query: &'a str,
    pub(crate) matched: bool,
    pub(crate) items: &'a [String],
}

/// Write a result the way a person reads it.
///
/// Matched results show the first `count` items numbered; suggestions are
/// listed whole.
pub(crate) fn human(
    out: &mut impl Write,
    query: &str,
    result: &QueryResult,
    count: usize,
) -> std::io::Result<()> {
    let shown = result.top(count);

    if result.matched {
        writeln!(
            out,
            "{}",
            format!("Top {} similar to '{query}':", shown.len()).yellow().bold()
        )?;
        for (rank, title) in shown.iter().enumerate() {
            writeln!(out, "{}. {title}", rank + 1)?;
        }
    } else if shown.is_empty() {
        writeln!(out, "{}", format!("No results for '{query}'").red().bold())?;
    } else {
        writeln!(out, "{}", "Title not found. Did you mean:".yellow().bold())?;
        for title in shown {
            writeln!(out, "{title}")?;
        }
    }

    Ok(())
}

/// Write a result as one line of JSON.
pub(crate) fn json(
    out: &mut impl Write,
    query: &str,
    result: &QueryResult,
    count: usize,
) -> crate::error::Result<()> {
    let answer = JsonAnswer {
        query,
        matched: result.matched,
        items: result.top(count),
    };
    serde_json::to_writer(&mut *out, &answer)?;
    writeln!(out)?;
    Ok(())
}
