use crate::labels::{ColumnRoles, CsvTable, LabelPage};
use serde::Serialize;

/// What happened (or will happen) to one page of the batch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageReport {
    pub page_number: u32,
    pub order_number: Option<String>,
    pub matched_rows: usize,
    pub annotation: Option<String>,
}

/// Pure matching step: pairs every page that carries an order number with
/// the CSV rows whose order cell equals it (trimmed, exact string match) and
/// composes the annotation text. Deterministic for identical inputs.
pub fn plan(pages: &[LabelPage], table: &CsvTable, roles: &ColumnRoles) -> Vec<PageReport> {
    pages
        .iter()
        .map(|page| {
            let Some(order_number) = page.order_number.as_deref().map(str::trim) else {
                return PageReport {
                    page_number: page.page_number,
                    order_number: None,
                    matched_rows: 0,
                    annotation: None,
                };
            };

            let matching: Vec<&Vec<String>> = table
                .rows
                .iter()
                .filter(|row| {
                    let cell = table.cell(row, roles.order);
                    !cell.is_empty() && cell == order_number
                })
                .collect();

            let mut parts: Vec<String> = Vec::new();
            for row in &matching {
                let sku = table.cell(row, roles.sku);
                if sku.is_empty() {
                    continue;
                }
                let quantity = table.cell(row, roles.quantity);
                if quantity.is_empty() {
                    parts.push(sku.to_string());
                } else {
                    parts.push(format!("{} (x{})", sku, quantity));
                }
            }

            let annotation = if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            };

            PageReport {
                page_number: page.page_number,
                order_number: Some(order_number.to_string()),
                matched_rows: matching.len(),
                annotation,
            }
        })
        .collect()
}
