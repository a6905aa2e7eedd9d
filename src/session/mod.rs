//! Analysis session
//!
//! A [`Session`] owns the single loaded sample set and the chart currently on
//! screen. Every user action goes through it:
//!
//! - load a spreadsheet (all-or-nothing; a failed load keeps the old data)
//! - analyze the data in one of the four modes
//! - show a chart, which also fixes the verdict used for export
//! - export the shown chart and its analysis as a report
//!
//! Loading new data clears the shown chart, so an export always describes
//! the data that is loaded.

use crate::analysis::{analyze_with, AnalysisMode, Verdict};
use crate::backend::spreadsheet;
use crate::config::AppConfig;
use crate::error::{Result, ResultExt, ShmError};
use crate::report::{
    ChartRenderer, ChartSpec, PdfReportWriter, PngChartRenderer, Report, ReportWriter,
};
use crate::types::{Cell, SampleSet};
use std::path::{Path, PathBuf};

/// File name of the chart image inside the export scratch directory
const CHART_IMAGE_NAME: &str = "chart.png";

/// The chart currently shown and the verdict it was drawn with
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub verdict: Verdict,
    pub spec: ChartSpec,
}

impl RenderedChart {
    pub fn mode(&self) -> AnalysisMode {
        self.verdict.mode
    }
}

/// Session state for one running instance
#[derive(Debug, Default)]
pub struct Session {
    config: AppConfig,
    samples: Option<SampleSet>,
    source: Option<PathBuf>,
    chart: Option<RenderedChart>,
}

impl Session {
    /// Create an empty session
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Loaded sample set, if any
    pub fn samples(&self) -> Option<&SampleSet> {
        self.samples.as_ref()
    }

    /// File the current sample set came from
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Chart currently shown
    pub fn chart(&self) -> Option<&RenderedChart> {
        self.chart.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.samples.is_some()
    }

    /// Load a spreadsheet, replacing the current data on success only
    pub fn load_file(&mut self, path: &Path) -> Result<&SampleSet> {
        tracing::info!("Loading spreadsheet {:?}", path);
        let set = spreadsheet::load_sample_set(path).map_err(|e| {
            tracing::warn!("Load of {:?} failed: {}", path, e);
            ShmError::from(e)
        })?;
        Ok(self.replace(set, Some(path.to_path_buf())))
    }

    /// Load already-read rows, replacing the current data on success only
    pub fn load_rows<I, R>(&mut self, rows: I, source: Option<PathBuf>) -> Result<&SampleSet>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Cell]>,
    {
        let set = SampleSet::from_rows(rows)?;
        Ok(self.replace(set, source))
    }

    fn replace(&mut self, set: SampleSet, source: Option<PathBuf>) -> &SampleSet {
        tracing::info!("Loaded {} samples", set.len());
        self.chart = None;
        self.source = source;
        self.samples.insert(set)
    }

    /// Analyze the loaded data
    pub fn analyze(&self, mode: AnalysisMode) -> Result<Verdict> {
        let samples = self.samples.as_ref().ok_or(ShmError::NoData)?;
        Ok(analyze_with(samples, mode, &self.config.thresholds))
    }

    /// Analyze and build the chart for `mode`, making it the current chart
    pub fn show_chart(&mut self, mode: AnalysisMode) -> Result<&RenderedChart> {
        let verdict = self.analyze(mode)?;
        let samples = self.samples.as_ref().ok_or(ShmError::NoData)?;
        let spec = ChartSpec::build(samples, &verdict);
        tracing::info!("Showing {} chart (shm={})", mode, verdict.is_shm);
        Ok(self.chart.insert(RenderedChart { verdict, spec }))
    }

    /// Export the current chart with the given collaborators.
    ///
    /// The chart image goes to a scratch directory that is removed when this
    /// returns, whether or not the export succeeded.
    pub fn export_report(
        &self,
        output: &Path,
        renderer: &dyn ChartRenderer,
        writer: &dyn ReportWriter,
    ) -> Result<()> {
        let chart = self.chart.as_ref().ok_or(ShmError::NoChart)?;

        let scratch = tempfile::Builder::new()
            .prefix("shm-analyzer-")
            .tempdir()?;
        let image_path = scratch.path().join(CHART_IMAGE_NAME);

        renderer
            .render(&chart.spec, &image_path)
            .context("Failed to render chart image")?;

        let report = Report::new(&chart.verdict, self.source(), chrono::Local::now());
        writer
            .write(&report, &image_path, output)
            .with_context(|| format!("Failed to write report to {:?}", output))?;

        tracing::info!("Exported {} report to {:?}", chart.mode(), output);
        Ok(())
    }

    /// Export the current chart as a PDF using the configured layout
    pub fn export_pdf(&self, output: &Path) -> Result<()> {
        let renderer = PngChartRenderer::new(self.config.chart.clone());
        let writer = PdfReportWriter::new(self.config.report.clone());
        self.export_report(output, &renderer, &writer)
    }

    /// Drop the loaded data and the current chart
    pub fn reset(&mut self) {
        self.samples = None;
        self.source = None;
        self.chart = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::report::{MockChartRenderer, MockReportWriter};
    use std::sync::{Arc, Mutex};

    fn rows(count: usize) -> Vec<Vec<Cell>> {
        (0..count)
            .map(|i| {
                let t = i as f64 * 0.1;
                let x = (2.0 * t).sin();
                let v = 2.0 * (2.0 * t).cos();
                [t, x, v, 0.5 * v * v, 2.0 * x * x]
                    .into_iter()
                    .map(Cell::Number)
                    .collect()
            })
            .collect()
    }

    fn loaded_session() -> Session {
        let mut session = Session::default();
        session.load_rows(rows(100), None).unwrap();
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(AppConfig::default());
        assert!(!session.has_data());
        assert!(session.chart().is_none());
        assert!(matches!(
            session.analyze(AnalysisMode::Position),
            Err(ShmError::NoData)
        ));
    }

    #[test]
    fn test_show_chart_without_data() {
        let mut session = Session::default();
        assert!(matches!(
            session.show_chart(AnalysisMode::Velocity),
            Err(ShmError::NoData)
        ));
    }

    #[test]
    fn test_failed_load_keeps_previous_data() {
        let mut session = loaded_session();
        session.show_chart(AnalysisMode::Energy).unwrap();

        let blank = vec![vec![Cell::Empty; 5]];
        let err = session.load_rows(blank, None).unwrap_err();
        assert!(matches!(err, ShmError::Load(LoadError::NoValidRows)));
        assert_eq!(session.samples().map(SampleSet::len), Some(100));
        assert!(session.chart().is_some());
    }

    #[test]
    fn test_new_load_clears_chart() {
        let mut session = loaded_session();
        session.show_chart(AnalysisMode::Position).unwrap();
        session
            .load_rows(rows(10), Some(PathBuf::from("second.xlsx")))
            .unwrap();
        assert!(session.chart().is_none());
        assert_eq!(session.source(), Some(Path::new("second.xlsx")));
    }

    #[test]
    fn test_export_without_chart_calls_nothing() {
        let session = loaded_session();
        let mut renderer = MockChartRenderer::new();
        renderer.expect_render().never();
        let mut writer = MockReportWriter::new();
        writer.expect_write().never();

        let err = session
            .export_report(Path::new("out.pdf"), &renderer, &writer)
            .unwrap_err();
        assert!(matches!(err, ShmError::NoChart));
    }

    #[test]
    fn test_export_passes_image_and_removes_it() {
        let mut session = loaded_session();
        session.show_chart(AnalysisMode::EnergyRegression).unwrap();

        let rendered_to: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&rendered_to);

        let mut renderer = MockChartRenderer::new();
        renderer
            .expect_render()
            .withf(|chart, _| chart.mode == AnalysisMode::EnergyRegression)
            .times(1)
            .returning(move |_, path| {
                std::fs::write(path, b"png")?;
                *captured.lock().unwrap() = Some(path.to_path_buf());
                Ok(())
            });

        let expected_image = Arc::clone(&rendered_to);
        let mut writer = MockReportWriter::new();
        writer
            .expect_write()
            .withf(move |report, image, output| {
                let rendered = expected_image.lock().unwrap().clone();
                rendered.as_deref() == Some(image)
                    && image.exists()
                    && output == Path::new("out.pdf")
                    && report.lines.iter().any(|l| l == "Analysis:")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        session
            .export_report(Path::new("out.pdf"), &renderer, &writer)
            .unwrap();

        let image = rendered_to.lock().unwrap().clone().unwrap();
        assert!(!image.exists());
    }

    #[test]
    fn test_writer_failure_still_removes_image() {
        let mut session = loaded_session();
        session.show_chart(AnalysisMode::Position).unwrap();

        let rendered_to: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&rendered_to);

        let mut renderer = MockChartRenderer::new();
        renderer.expect_render().returning(move |_, path| {
            std::fs::write(path, b"png")?;
            *captured.lock().unwrap() = Some(path.to_path_buf());
            Ok(())
        });
        let mut writer = MockReportWriter::new();
        writer
            .expect_write()
            .returning(|_, _, _| Err(ShmError::Report("disk full".into())));

        let err = session
            .export_report(Path::new("out.pdf"), &renderer, &writer)
            .unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert!(matches!(err.root(), ShmError::Report(_)));

        let image = rendered_to.lock().unwrap().clone().unwrap();
        assert!(!image.exists());
    }

    #[test]
    fn test_reset() {
        let mut session = loaded_session();
        session.show_chart(AnalysisMode::Velocity).unwrap();
        session.reset();
        assert!(!session.has_data());
        assert!(session.chart().is_none());
    }
}
