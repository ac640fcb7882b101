use std::io::Write;

use vocabscope::{AnalysisReport, VSResult, report::ReportSink};

/// Pretty-printed JSON rendering of a report.
pub struct JsonReportSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonReportSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for JsonReportSink<W> {
    fn write_report(
        &mut self,
        report: &AnalysisReport,
    ) -> VSResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, report).map_err(std::io::Error::from)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use vocabscope::{ReportAssembler, Vocabulary};

    use super::*;

    #[test]
    fn test_json_report() {
        let vocab = Vocabulary::from_tokens(["THE</w>", "a</w>", "xy"]);
        let report = ReportAssembler::default().assemble(&vocab);

        let mut buf = Vec::new();
        JsonReportSink::new(&mut buf).write_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total_size"], 3);
        assert_eq!(value["full_word_count"], 2);
        assert_eq!(value["weighted_tokens"][0]["surface"], "THE");

        let parsed: AnalysisReport = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.top_tokens, report.top_tokens);
        assert_eq!(parsed.script_counts, report.script_counts);
    }
}
