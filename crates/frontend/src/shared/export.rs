//! PDF export of the order report and browser download
//!
//! Layout is computed first as positioned text items per page, then drawn
//! with `printpdf` builtin fonts. Coordinates in the layout are measured
//! from the top of the page; PDF measures from the bottom.

use contracts::domain::a001_order::aggregate::FIELD_COUNT;
use contracts::domain::a001_order::OrderReport;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 15.0;
const LINE_STEP: f32 = 10.0;
const ROW_HEIGHT: f32 = 6.0;

const TITLE_SIZE: f32 = 16.0;
const TEXT_SIZE: f32 = 12.0;
const HEADER_SIZE: f32 = 7.5;
const CELL_SIZE: f32 = 7.0;

/// Column widths in mm, same order as the report headers (182mm total)
const COLUMN_WIDTHS: [f32; FIELD_COUNT] = [18.0, 30.0, 18.0, 22.0, 14.0, 18.0, 12.0, 16.0, 16.0, 18.0];

/// Points to millimetres
const PT_TO_MM: f32 = 0.3528;

#[derive(Debug, Clone, PartialEq)]
struct TextItem {
    text: String,
    x: f32,
    y: f32,
    size: f32,
    bold: bool,
}

impl TextItem {
    fn new(text: impl Into<String>, x: f32, y: f32, size: f32, bold: bool) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            bold,
        }
    }
}

/// Truncate `text` so it fits in a column of `width` mm
fn fit_cell(text: &str, width: f32, size: f32) -> String {
    // Helvetica averages about half an em per glyph
    let glyph = size * 0.5 * PT_TO_MM;
    let max_chars = ((width - 1.0) / glyph).floor().max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3).max(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

fn table_row(cells: &[String], y: f32, size: f32, bold: bool) -> Vec<TextItem> {
    let mut x = MARGIN_LEFT + 1.0;
    cells
        .iter()
        .zip(COLUMN_WIDTHS.iter())
        .map(|(cell, width)| {
            let item = TextItem::new(fit_cell(cell, *width, size), x, y, size, bold);
            x += width;
            item
        })
        .collect()
}

fn layout_report(report: &OrderReport) -> Vec<Vec<TextItem>> {
    let headers: Vec<String> = report.headers.iter().map(|h| h.to_string()).collect();
    let mut pages = vec![Vec::new()];
    let mut page = 0;

    pages[page].push(TextItem::new(&report.title, MARGIN_LEFT, MARGIN_TOP, TITLE_SIZE, true));
    let mut y = MARGIN_TOP + LINE_STEP;
    for line in &report.annotations {
        pages[page].push(TextItem::new(line, MARGIN_LEFT, y, TEXT_SIZE, false));
        y += LINE_STEP;
    }

    pages[page].extend(table_row(&headers, y, HEADER_SIZE, true));
    y += ROW_HEIGHT;

    for row in &report.rows {
        if y > PAGE_HEIGHT - MARGIN_BOTTOM {
            pages.push(Vec::new());
            page += 1;
            y = MARGIN_TOP;
            pages[page].extend(table_row(&headers, y, HEADER_SIZE, true));
            y += ROW_HEIGHT;
        }
        pages[page].extend(table_row(row, y, CELL_SIZE, false));
        y += ROW_HEIGHT;
    }

    y += LINE_STEP - ROW_HEIGHT;
    if y > PAGE_HEIGHT - MARGIN_BOTTOM {
        pages.push(Vec::new());
        page += 1;
        y = MARGIN_TOP;
    }
    pages[page].push(TextItem::new(
        report.grand_total_line(),
        MARGIN_LEFT,
        y,
        TEXT_SIZE,
        true,
    ));

    pages
}

fn draw(layer: &PdfLayerReference, items: &[TextItem], regular: &IndirectFontRef, bold: &IndirectFontRef) {
    for item in items {
        let font = if item.bold { bold } else { regular };
        layer.use_text(
            item.text.clone(),
            item.size,
            Mm(item.x),
            Mm(PAGE_HEIGHT - item.y),
            font,
        );
    }
}

/// Render the report as an A4 PDF document
pub fn render_pdf(report: &OrderReport) -> Result<Vec<u8>, String> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(report.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| format!("Failed to load font: {:?}", e))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| format!("Failed to load font: {:?}", e))?;

    for (i, items) in layout_report(report).iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };
        draw(&layer, items, &regular, &bold);
    }

    doc.save_to_bytes()
        .map_err(|e| format!("Failed to write PDF: {:?}", e))
}

/// Render the report and hand it to the browser as a download
pub fn export_report_pdf(report: &OrderReport, filename: &str) -> Result<(), String> {
    let bytes = render_pdf(report)?;
    let blob = create_pdf_blob(&bytes)?;
    download_blob(&blob, filename)
}

fn create_pdf_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
