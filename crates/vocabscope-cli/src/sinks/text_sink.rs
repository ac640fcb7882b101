use std::io::Write;

use vocabscope::{
    AnalysisReport,
    VSResult,
    frequency::FrequencyEntry,
    report::ReportSink,
    weighting::WeightedToken,
};

/// Human-readable text rendering of a report.
pub struct TextReportSink<W: Write> {
    writer: W,
    weight_rows: usize,
}

impl<W: Write> TextReportSink<W> {
    /// Wrap a writer; `weight_rows` bounds the top/bottom weighted tables.
    pub fn new(
        writer: W,
        weight_rows: usize,
    ) -> Self {
        Self {
            writer,
            weight_rows,
        }
    }
}

fn format_entries<K: std::fmt::Debug>(entries: &[FrequencyEntry<K>]) -> String {
    let parts = entries
        .iter()
        .map(|e| format!("({:?}, {})", e.key, e.count))
        .collect::<Vec<_>>();
    format!("[{}]", parts.join(", "))
}

fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "undefined".to_string(),
    }
}

fn write_weights(
    writer: &mut dyn Write,
    title: &str,
    tokens: &[WeightedToken],
) -> std::io::Result<()> {
    writeln!(writer, "\n{title}:")?;
    for token in tokens {
        writeln!(writer, "{}: {}", token.surface, token.weight)?;
    }
    Ok(())
}

impl<W: Write> ReportSink for TextReportSink<W> {
    fn write_report(
        &mut self,
        report: &AnalysisReport,
    ) -> VSResult<()> {
        let w = &mut self.writer;

        writeln!(w, "Total vocabulary size: {}", report.total_size)?;
        writeln!(w, "Number of full words: {}", report.full_word_count)?;
        writeln!(w, "Number of subwords: {}", report.subword_count)?;
        writeln!(
            w,
            "Average token length: {}",
            format_average(report.average_length)
        )?;

        writeln!(w, "\nSample of full words:")?;
        writeln!(w, "{:?}", report.full_word_sample)?;
        writeln!(w, "\nSample of subwords:")?;
        writeln!(w, "{:?}", report.subword_sample)?;

        writeln!(w, "\nMost common tokens:")?;
        writeln!(w, "{}", format_entries(&report.top_tokens))?;
        writeln!(w, "Most common prefixes:")?;
        writeln!(w, "{}", format_entries(&report.top_prefixes))?;
        writeln!(w, "Most common suffixes:")?;
        writeln!(w, "{}", format_entries(&report.top_suffixes))?;

        writeln!(
            w,
            "\nSpecial characters ({} distinct, {} total):",
            report.distinct_special_chars, report.special_char_total
        )?;
        writeln!(w, "{}", format_entries(&report.top_special_chars))?;

        writeln!(w, "\nLowercase tokens: {}", report.case_counts.lowercase)?;
        writeln!(w, "Uppercase tokens: {}", report.case_counts.uppercase)?;
        writeln!(w, "Mixed case tokens: {}", report.case_counts.mixed)?;

        writeln!(w, "\nScript distribution:")?;
        for entry in &report.script_counts {
            writeln!(w, "{}: {}", entry.key, entry.count)?;
        }

        writeln!(w, "\nNumeric tokens: {}", report.numeric_token_count)?;
        writeln!(w, "{:?}", report.numeric_token_sample)?;

        write_weights(
            w,
            &format!("Top {} words with highest weights", self.weight_rows),
            report.top_weighted(self.weight_rows),
        )?;
        write_weights(
            w,
            &format!("Bottom {} words with lowest weights", self.weight_rows),
            &report.bottom_weighted(self.weight_rows),
        )?;
        writeln!(
            w,
            "\nAverage weight: {}",
            format_average(report.average_weight)
        )?;

        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use vocabscope::{ReportAssembler, Vocabulary};

    use super::*;

    fn render(report: &AnalysisReport) -> String {
        let mut buf = Vec::new();
        TextReportSink::new(&mut buf, 2).write_report(report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report() {
        let vocab = Vocabulary::from_tokens(["THE</w>", "a</w>", "xy", "a</w>"]);
        let text = render(&ReportAssembler::default().assemble(&vocab));

        assert!(text.starts_with("Total vocabulary size: 4\n"));
        assert!(text.contains("Number of full words: 3\n"));
        assert!(text.contains("Average token length: 1.75\n"));
        assert!(text.contains("[(\"a</w>\", 2), (\"THE</w>\", 1), (\"xy\", 1)]"));
        assert!(text.contains("Top 2 words with highest weights:\nTHE: 1.56"));
        assert!(text.contains("Bottom 2 words with lowest weights:\nxy: 0.8"));
    }

    #[test]
    fn test_empty_report_is_undefined() {
        let text = render(&ReportAssembler::default().assemble(&Vocabulary::default()));

        assert!(text.contains("Average token length: undefined\n"));
        assert!(text.contains("Average weight: undefined\n"));
    }
}
