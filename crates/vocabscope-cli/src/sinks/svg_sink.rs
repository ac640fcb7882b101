use std::path::{Path, PathBuf};

use plotters::prelude::*;
use vocabscope::{
    VSResult,
    VocabScopeError,
    report::{HistogramSeries, SeriesSink},
};

/// Writes each series as `<dir>/<name>.svg`.
pub struct SvgSeriesSink {
    dir: PathBuf,
    size: (u32, u32),
    written: Vec<PathBuf>,
}

impl SvgSeriesSink {
    /// Create a sink writing into `dir`; the directory is created if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> VSResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            size: (1024, 600),
            written: Vec::new(),
        })
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn render(
        &self,
        path: &Path,
        series: &HistogramSeries,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let n = series.bars.len() as u32;
        let y_max = series.max_value() + series.max_value() / 10 + 1;

        let mut chart = ChartBuilder::on(&root)
            .caption(&series.title, ("sans-serif", 30).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d((0u32..n).into_segmented(), 0u64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(series.x_label.as_str())
            .y_desc(series.y_label.as_str())
            .x_labels(series.bars.len())
            .x_label_formatter(&|v| match v {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => series
                    .bars
                    .get(*i as usize)
                    .map(|(label, _)| label.clone())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .margin(2)
                .data(
                    series
                        .bars
                        .iter()
                        .enumerate()
                        .map(|(i, (_, value))| (i as u32, *value)),
                ),
        )?;

        root.present()?;
        Ok(())
    }
}

impl SeriesSink for SvgSeriesSink {
    fn write_series(
        &mut self,
        series: &HistogramSeries,
    ) -> VSResult<()> {
        if series.bars.is_empty() {
            log::warn!("skipping empty series: {}", series.name);
            return Ok(());
        }

        let path = self.dir.join(format!("{}.svg", series.name));
        log::info!("plot: {}", path.display());
        self.render(&path, series)
            .map_err(|e| VocabScopeError::External(format!("{}: {e}", path.display())))?;
        self.written.push(path);
        Ok(())
    }
}
