use concord_core::{DocumentSummary, QueryResult, QuerySummary};
use std::io::{self, Write};

/// Right-align every cell to its column's widest value.
fn write_table<W: Write>(out: &mut W, header: &[String], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }
    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    writeln!(out, "{}", line(header))?;
    writeln!(out, "{}", "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1)))?;
    for row in rows {
        writeln!(out, "{}", line(row))?;
    }
    Ok(())
}

pub fn write_summaries<W: Write>(out: &mut W, summaries: &[DocumentSummary]) -> io::Result<()> {
    let header = ["Filename", "Total Words", "Distinct Words"].map(String::from);
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| vec![s.name.clone(), s.total_words.to_string(), s.distinct_words.to_string()])
        .collect();
    write_table(out, &header, &rows)
}

pub fn write_query_result<W: Write>(out: &mut W, result: &QueryResult) -> io::Result<()> {
    writeln!(out, "Search results for '{}':", result.word)?;
    for (name, count) in &result.counts {
        writeln!(out, "  {name}: {count} occurrence(s)")?;
    }
    Ok(())
}

pub fn write_query_summary<W: Write>(out: &mut W, summary: &QuerySummary) -> io::Result<()> {
    if summary.rows.is_empty() {
        return writeln!(out, "No words were queried.");
    }
    writeln!(out, "Summary of all words queried:")?;
    let mut header = vec!["Word".to_string()];
    header.extend(summary.documents.iter().cloned());
    let rows: Vec<Vec<String>> = summary
        .rows
        .iter()
        .map(|(word, counts)| {
            let mut row = vec![word.to_string()];
            row.extend(counts.iter().map(usize::to_string));
            row
        })
        .collect();
    write_table(out, &header, &rows)
}
