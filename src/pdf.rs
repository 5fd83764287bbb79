use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::error::{InvoiceError, Result};
use crate::invoice::Invoice;

// A4 page, positions in millimetres from the bottom-left corner.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_X: f32 = 25.0;
const HEADER_TOP: f32 = 277.0;
const LINE_STEP: f32 = 5.5;
const TOTAL_GAP: f32 = 7.0;

fn draw_line(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f32,
    x: f32,
    y: f32,
) {
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

/// Render one invoice as a single fixed-layout A4 page. Items are
/// drawn one per line with no pagination; an invoice long enough to
/// reach the bottom edge runs off the page.
pub fn render_invoice(
    invoice: &Invoice,
    company_name: &str,
    company_address: &str,
    path: &Path,
) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Invoice {}", invoice.number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| InvoiceError::PdfGeneration(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| InvoiceError::PdfGeneration(e.to_string()))?;

    let mut y = HEADER_TOP;
    draw_line(&layer, &font_bold, company_name, 14.0, MARGIN_X, y);
    y -= LINE_STEP;
    draw_line(&layer, &font, company_address, 10.0, MARGIN_X, y);

    y -= 2.0 * LINE_STEP;
    let header = [
        format!("Invoice Number: {}", invoice.number),
        format!("Date: {}", invoice.date),
        format!("Customer: {}", invoice.customer_name),
        format!("Address: {}", invoice.customer_address),
    ];
    for line in &header {
        draw_line(&layer, &font, line, 10.0, MARGIN_X, y);
        y -= LINE_STEP;
    }

    y -= LINE_STEP;
    for item in &invoice.items {
        let line = format!(
            "{}: {} x {:.2} = {:.2}",
            item.desc,
            item.qty,
            item.price,
            item.line_total()
        );
        draw_line(&layer, &font, &line, 10.0, MARGIN_X, y);
        y -= LINE_STEP;
    }

    y -= TOTAL_GAP;
    draw_line(
        &layer,
        &font_bold,
        &format!("Total Amount: {:.2}", invoice.total()),
        11.0,
        MARGIN_X,
        y,
    );

    let mut writer = BufWriter::new(File::create(path)?);
    doc.save(&mut writer)
        .map_err(|e| InvoiceError::PdfGeneration(e.to_string()))?;

    Ok(())
}
