mod order_number;
mod pdf;
mod plan;
mod table;

pub use order_number::extract_order_number;
pub use pdf::{annotate, read_pages};
pub use plan::{plan, PageReport};
pub use table::{ColumnRoles, CsvTable};

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not parse the PDF document: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("could not write the PDF document: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse the CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("the CSV file has no data rows")]
    EmptyCsv,
    #[error("column index {index} is out of range, the CSV has {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },
}

/// One shipping label per document page, with the order number pulled out of
/// the page text. Recomputed on every upload, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabelPage {
    pub page_number: u32,
    pub order_number: Option<String>,
}

/// Where annotations land on a page. Shared by every annotated page of a
/// batch; origin is the lower-left corner of the page.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Placement {
            x: 20.0,
            y: 706.0,
            font_size: 9.0,
        }
    }
}

pub struct Outcome {
    pub pdf: Vec<u8>,
    pub pages: Vec<PageReport>,
}

/// The whole batch: extract an order number per page, match CSV rows, write
/// the composed SKU strings onto the matched pages. The output document has
/// exactly the input's pages; pages without a match pass through untouched.
/// Any parse failure aborts the batch, partial output is never produced.
pub fn annotate_labels(
    pdf_bytes: &[u8],
    table: &CsvTable,
    roles: &ColumnRoles,
    placement: &Placement,
) -> Result<Outcome, Error> {
    let pages = pdf::read_pages(pdf_bytes)?;
    let reports = plan::plan(&pages, table, roles);
    let annotated = pdf::annotate(pdf_bytes, &reports, placement)?;

    Ok(Outcome {
        pdf: annotated,
        pages: reports,
    })
}
