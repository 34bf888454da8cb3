//! Order report: one order rendered as a paginated A4 PDF.

use super::error::OrderError;
use crate::shared::export::{download_bytes, PDF_MIME};
use crate::shared::format::{format_date_us, format_money, format_money_opt};
use crate::shared::pdf::layout::{FlowCursor, Margins};
use crate::shared::pdf::table::{draw_table, Table};
use crate::shared::pdf::{Align, Font, PdfDocument, Rgb};
use chrono::NaiveDate;
use contracts::domain::a001_order::aggregate::Order;

const TITLE: &str = "Order Report";
const FOOTER: &str = "Thank you for your business!";
const HEADING_COLOR: Rgb = Rgb(40, 40, 40);

/// Display-ready values of one report, checked before anything is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReportModel {
    pub order_id: String,
    pub date: String,
    pub status: String,
    pub name: String,
    pub phone1: String,
    pub phone2: String,
    pub address: String,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub items: Vec<Vec<String>>,
}

/// Generated document ready to be handed to the browser
#[derive(Debug, Clone)]
pub struct OrderReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// `Order_<id>.pdf`, or `Order_Report.pdf` for an order without identifier
pub fn report_file_name(order: &Order) -> String {
    format!("Order_{}.pdf", order.identifier().unwrap_or("Report"))
}

pub fn build_report_model(order: &Order, date: NaiveDate) -> Result<OrderReportModel, OrderError> {
    if let Some(amount) = order.total_amount {
        if !amount.is_finite() || amount < 0.0 {
            return Err(OrderError::ReportGeneration(format!(
                "invalid total amount {}",
                amount
            )));
        }
    }

    let mut items = Vec::with_capacity(order.cart_items.len());
    for (index, item) in order.cart_items.iter().enumerate() {
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(OrderError::ReportGeneration(format!(
                "item {} has invalid price {}",
                index + 1,
                item.price
            )));
        }
        if item.quantity == 0 {
            return Err(OrderError::ReportGeneration(format!(
                "item {} has zero quantity",
                index + 1
            )));
        }
        items.push(vec![
            item.product_name.clone(),
            item.color_or_na().to_string(),
            item.quantity.to_string(),
            format_money(item.price),
            format_money(item.line_total()),
        ]);
    }

    Ok(OrderReportModel {
        order_id: order.identifier().unwrap_or("N/A").to_string(),
        date: format_date_us(date),
        status: order.status.as_str().to_uppercase(),
        name: order.name.clone(),
        phone1: order.phone1.clone(),
        phone2: order.phone2_or_na().to_string(),
        address: order.address.clone(),
        subtotal: format_money_opt(order.total_amount),
        shipping: format_money(0.0),
        total: format_money_opt(order.total_amount),
        items,
    })
}

fn heading(doc: &mut PdfDocument, text: &str, x: f64, y: f64) {
    doc.set_font(Font::HelveticaBold);
    doc.set_font_size(14.0);
    doc.set_text_color(HEADING_COLOR);
    doc.text(text, x, y, Align::Left);
    doc.set_font(Font::Helvetica);
    doc.set_font_size(12.0);
    doc.set_text_color(Rgb::BLACK);
}

/// Lays the report out. Fixed blocks first, then the two tables flowing
/// from the cursor.
pub fn render_report(model: &OrderReportModel) -> PdfDocument {
    let mut doc = PdfDocument::a4();
    let margins = Margins::default();
    let left = margins.left;
    let center = doc.page_width() / 2.0;

    doc.set_font(Font::HelveticaBold);
    doc.set_font_size(20.0);
    doc.text(TITLE, center, 15.0, Align::Center);
    let rule_width = doc.page_width() - margins.left - margins.right;
    doc.stroke_rect(left, 19.0, rule_width, 0.0, Rgb(200, 200, 200), 0.3);

    doc.set_font(Font::Helvetica);
    doc.set_font_size(12.0);
    doc.text(&format!("Order ID: {}", model.order_id), left, 25.0, Align::Left);
    doc.text(&format!("Date: {}", model.date), left, 32.0, Align::Left);
    doc.text(&format!("Status: {}", model.status), left, 39.0, Align::Left);

    heading(&mut doc, "Customer Information", left, 50.0);
    let customer = [
        format!("Name: {}", model.name),
        format!("Primary Phone: {}", model.phone1),
        format!("Secondary Phone: {}", model.phone2),
        format!("Address: {}", model.address),
    ];
    for (i, line) in customer.iter().enumerate() {
        doc.text(line, left, 58.0 + 7.0 * i as f64, Align::Left);
    }

    heading(&mut doc, "Order Summary", left, 95.0);
    let mut cursor = FlowCursor::new(100.0, margins);
    let summary = Table::new(
        &["Description", "Amount"],
        vec![
            vec!["Subtotal".to_string(), model.subtotal.clone()],
            vec!["Shipping".to_string(), model.shipping.clone()],
            vec!["Total".to_string(), model.total.clone()],
        ],
    );
    let summary = draw_table(&mut doc, &mut cursor, &summary);

    cursor.move_to(summary.final_y + 15.0);
    cursor.ensure_space(&mut doc, 20.0);
    heading(&mut doc, "Ordered Items", left, cursor.y());
    cursor.advance(5.0);
    let items = Table::new(
        &["Product", "Color", "Quantity", "Price", "Total"],
        model.items.clone(),
    );
    let items = draw_table(&mut doc, &mut cursor, &items);
    log::debug!(
        "Report items table: {} rows, {} page breaks",
        items.rows_drawn,
        items.page_breaks
    );

    doc.set_font(Font::Helvetica);
    doc.set_font_size(10.0);
    doc.set_text_color(Rgb(100, 100, 100));
    let footer_y = doc.page_height() - 10.0;
    doc.text(FOOTER, center, footer_y, Align::Center);

    doc
}

/// Builds the whole document in memory; nothing is produced on error
pub fn generate_order_report(order: &Order, date: NaiveDate) -> Result<OrderReport, OrderError> {
    let model = build_report_model(order, date)?;
    let doc = render_report(&model);
    Ok(OrderReport {
        file_name: report_file_name(order),
        pages: doc.page_count(),
        bytes: doc.to_bytes(),
    })
}

/// Generates the report for today and starts the browser download
pub fn download_order_report(order: &Order) -> Result<String, OrderError> {
    let today = chrono::Local::now().date_naive();
    let report = generate_order_report(order, today)?;
    download_bytes(&report.bytes, PDF_MIME, &report.file_name)
        .map_err(OrderError::ReportGeneration)?;
    log::info!(
        "Report {} generated ({} pages)",
        report.file_name,
        report.pages
    );
    Ok(report.file_name)
}
