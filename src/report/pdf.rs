//! PDF report writer built on printpdf
//!
//! Page one carries the title, the chart image and as much body text as
//! fits; further pages continue the text from the top margin.

use super::{layout_lines, Report, ReportWriter};
use crate::config::ReportLayout;
use crate::error::{Result, ShmError};
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument, PdfLayerReference, Pt};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const LAYER_NAME: &str = "Layer 1";

/// Writes reports as US-Letter PDF documents
#[derive(Debug, Clone, Default)]
pub struct PdfReportWriter {
    layout: ReportLayout,
}

impl PdfReportWriter {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }
}

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn report_error(context: &str) -> impl Fn(printpdf::Error) -> ShmError + '_ {
    move |e| ShmError::Report(format!("{context}: {e}"))
}

impl ReportWriter for PdfReportWriter {
    fn write(&self, report: &Report, chart_image: &Path, output: &Path) -> Result<()> {
        let layout = &self.layout;
        let (page_w, page_h) = (mm(layout.page_width), mm(layout.page_height));

        let (doc, page, layer) = PdfDocument::new(report.title.as_str(), page_w, page_h, LAYER_NAME);
        let title_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(report_error("title font"))?;
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(report_error("body font"))?;

        let first: PdfLayerReference = doc.get_page(page).get_layer(layer);
        first.use_text(
            report.title.as_str(),
            layout.title_font_size,
            mm(layout.title_x),
            mm(layout.page_height - layout.title_offset),
            &title_font,
        );

        let image = printpdf::image_crate::open(chart_image)
            .map_err(|e| ShmError::Report(format!("chart image {:?}: {e}", chart_image)))?;
        let image = Image::from_dynamic_image(&image);
        let width_px = image.image.width.0.max(1) as f32;
        // Scale the image to the configured width
        let dpi = width_px * 72.0 / layout.image_width;
        image.add_to_layer(
            first.clone(),
            ImageTransform {
                translate_x: Some(mm(layout.image_x)),
                translate_y: Some(mm(layout.page_height - layout.image_offset)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );

        let mut layers = vec![first];
        for line in layout_lines(&report.lines, layout) {
            while layers.len() <= line.page {
                let (page, layer) = doc.add_page(page_w, page_h, LAYER_NAME);
                layers.push(doc.get_page(page).get_layer(layer));
            }
            if line.text.is_empty() {
                continue;
            }
            layers[line.page].use_text(
                line.text,
                layout.body_font_size,
                mm(layout.text_x),
                mm(line.y),
                &body_font,
            );
        }

        let page_count = layers.len();
        let file = File::create(output)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(report_error("save"))?;

        tracing::info!("Wrote {}-page report to {:?}", page_count, output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_millimetres() {
        let letter_width = mm(612.0);
        assert!((letter_width.0 - 215.9).abs() < 0.01);
    }
}
