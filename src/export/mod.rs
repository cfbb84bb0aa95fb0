//! PDF export of a generated concept brief.
//!
//! The brief is laid out at a fixed character width regardless of the current
//! terminal size, so exports are identical run to run, then paginated onto A4
//! pages with the logo embedded at the head of the first page. Runs on a
//! blocking thread; the caller reports the outcome back through the event
//! channel so the UI's in-progress flag is cleared on every path.

use crate::provider::types::ConceptBrief;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm,
    PdfDocument, Px, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

/// Content width in characters used for all wrapped text.
const CAPTURE_WIDTH: usize = 84;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 5.4;
const LOGO_SIDE_MM: f32 = 42.0;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("logo decode failed: {0}")]
    LogoDecode(String),

    #[error("PDF encoding failed: {0}")]
    Encode(String),

    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// File stem derived from the concept name: every run of non-alphanumeric
/// characters collapses to a single underscore.
pub fn file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        out.push_str("concept");
    }
    out
}

/// Width-aware greedy wrap. Words longer than the width are split hard.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width > width {
                // Hard-split an oversized word across lines.
                for c in word.chars() {
                    let cw = c.width().unwrap_or(0);
                    if line_width + cw > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += cw;
                }
                continue;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Title,
    Motive,
    Heading,
    Body,
    Small,
}

impl LineKind {
    fn font_size(self) -> f32 {
        match self {
            LineKind::Title => 26.0,
            LineKind::Motive => 13.0,
            LineKind::Heading => 11.0,
            LineKind::Body => 10.0,
            LineKind::Small => 8.5,
        }
    }

    fn leading_mm(self) -> f32 {
        match self {
            LineKind::Title => 11.0,
            LineKind::Motive => 7.0,
            LineKind::Heading => 8.0,
            _ => LINE_HEIGHT_MM,
        }
    }
}

#[derive(Debug)]
struct DocLine {
    text: String,
    kind: LineKind,
}

fn line(kind: LineKind, text: impl Into<String>) -> DocLine {
    DocLine { text: text.into(), kind }
}

/// Flatten the brief into a styled line sequence, pure so pagination is
/// testable without writing a document.
fn layout_lines(brief: &ConceptBrief) -> Vec<DocLine> {
    let mut lines = vec![
        line(LineKind::Title, &brief.name),
        line(LineKind::Motive, format!("\"{}\"", brief.motive)),
        line(LineKind::Body, ""),
        line(LineKind::Heading, "EXECUTIVE BRIEF"),
    ];
    for l in wrap_text(&brief.brief, CAPTURE_WIDTH) {
        lines.push(line(LineKind::Body, l));
    }

    lines.push(line(LineKind::Body, ""));
    lines.push(line(LineKind::Heading, "BRAND IDENTITY"));
    lines.push(line(LineKind::Body, format!("Style: {}", brief.brand_identity.style)));

    lines.push(line(LineKind::Body, ""));
    lines.push(line(LineKind::Body, "Color Palette"));
    for color in &brief.brand_identity.color_palette {
        lines.push(line(LineKind::Small, format!("  {}  {}", color.hex, color.name)));
    }

    lines.push(line(LineKind::Body, ""));
    lines.push(line(LineKind::Body, "Typography"));
    lines.push(line(
        LineKind::Small,
        format!("  {}", brief.brand_identity.typography.font_family),
    ));
    for l in wrap_text(&brief.brand_identity.typography.description, CAPTURE_WIDTH - 2) {
        lines.push(line(LineKind::Small, format!("  {l}")));
    }
    lines
}

/// Split lines into pages by the vertical space each page offers. The first
/// page loses the area reserved for the logo.
fn paginate(lines: &[DocLine], first_page_top_mm: f32) -> Vec<Vec<usize>> {
    let mut pages: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut y = first_page_top_mm;
    for (idx, doc_line) in lines.iter().enumerate() {
        let leading = doc_line.kind.leading_mm();
        if y - leading < MARGIN_MM && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        y -= leading;
        current.push(idx);
    }
    pages.push(current);
    pages
}

/// Write the brief plus logo as a paginated A4 PDF and return the path.
pub fn write_brief_pdf(
    brief: &ConceptBrief,
    logo_png: &[u8],
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let decoded = image::load_from_memory_with_format(logo_png, image::ImageFormat::Png)
        .map_err(|e| ExportError::LogoDecode(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (px_w, px_h) = rgb.dimensions();

    let title = format!("{} - SaaS Brief", brief.name);
    let (doc, first_page, first_layer) =
        PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    // Logo at the head of page one, centered, on the white page background.
    let layer = doc.get_page(first_page).get_layer(first_layer);
    let logo = Image::from(ImageXObject {
        width: Px(px_w as usize),
        height: Px(px_h as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb.into_raw(),
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    });
    // Scale the bitmap to the fixed logo box irrespective of its pixel size.
    let dpi = 300.0;
    let px_to_mm = 25.4 / dpi;
    let scale_x = LOGO_SIDE_MM / (px_w as f32 * px_to_mm);
    let scale_y = LOGO_SIDE_MM / (px_h as f32 * px_to_mm);
    logo.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm((PAGE_WIDTH_MM - LOGO_SIDE_MM) / 2.0)),
            translate_y: Some(Mm(PAGE_HEIGHT_MM - MARGIN_MM - LOGO_SIDE_MM)),
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    let lines = layout_lines(brief);
    let first_page_top = PAGE_HEIGHT_MM - MARGIN_MM - LOGO_SIDE_MM - 10.0;
    let pages = paginate(&lines, first_page_top);

    let ink = Color::Rgb(Rgb::new(0.12, 0.12, 0.12, None));
    for (page_no, page_lines) in pages.iter().enumerate() {
        let layer = if page_no == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            doc.get_page(page).get_layer(layer)
        };
        layer.set_fill_color(ink.clone());

        let mut y = if page_no == 0 { first_page_top } else { PAGE_HEIGHT_MM - MARGIN_MM };
        for &idx in page_lines {
            let doc_line = &lines[idx];
            y -= doc_line.kind.leading_mm();
            if doc_line.text.is_empty() {
                continue;
            }
            let font = match doc_line.kind {
                LineKind::Title | LineKind::Heading => &font_bold,
                _ => &font,
            };
            layer.use_text(&doc_line.text, doc_line.kind.font_size(), Mm(MARGIN_MM), Mm(y), font);
        }
    }

    let path = out_dir.join(format!("{}_SaaS_Brief.pdf", file_stem(&brief.name)));
    let file = File::create(&path)
        .map_err(|source| ExportError::Io { path: path.display().to_string(), source })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    tracing::info!(path = %path.display(), "brief exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_collapses_separator_runs() {
        assert_eq!(file_stem("Fintra"), "Fintra");
        assert_eq!(file_stem("Flow State - Pro!"), "Flow_State_Pro");
        assert_eq!(file_stem("  spaced   out  "), "spaced_out");
        assert_eq!(file_stem("___"), "concept");
        assert_eq!(file_stem(""), "concept");
    }

    #[test]
    fn wrap_respects_width() {
        let text = "one two three four five six seven eight nine ten";
        for line in wrap_text(text, 12) {
            assert!(line.chars().count() <= 12, "line too long: {line:?}");
        }
        assert_eq!(wrap_text("short", 40), vec!["short".to_string()]);
    }

    #[test]
    fn wrap_splits_oversized_words() {
        let lines = wrap_text("a".repeat(25).as_str(), 10);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn wrap_preserves_blank_paragraph_breaks() {
        let lines = wrap_text("first\n\nsecond", 40);
        assert_eq!(lines, vec!["first".to_string(), String::new(), "second".to_string()]);
    }

    #[test]
    fn long_brief_paginates() {
        let mut brief: ConceptBrief =
            serde_json::from_str(crate::provider::types::tests::brief_json()).unwrap();
        brief.brief = "A long executive summary. ".repeat(300);
        let lines = layout_lines(&brief);
        let pages = paginate(&lines, 60.0);
        assert!(pages.len() > 1);
        let placed: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(placed, lines.len());
    }

    #[test]
    fn short_brief_fits_one_page() {
        let brief: ConceptBrief =
            serde_json::from_str(crate::provider::types::tests::brief_json()).unwrap();
        let lines = layout_lines(&brief);
        let pages = paginate(&lines, PAGE_HEIGHT_MM - MARGIN_MM - LOGO_SIDE_MM - 10.0);
        assert_eq!(pages.len(), 1);
    }
}
