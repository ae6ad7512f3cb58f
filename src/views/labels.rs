use crate::labels;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

pub const OUTPUT_FILENAME: &str = "documentos_combinados.pdf";

#[derive(Debug, Serialize)]
pub struct Annotated {
    /// Base64-encoded result document, same page count as the upload.
    pub pdf: String,
    pub filename: &'static str,
    pub pages: Vec<labels::PageReport>,
    pub annotated_pages: usize,
}

impl From<labels::Outcome> for Annotated {
    fn from(outcome: labels::Outcome) -> Self {
        let annotated_pages = outcome
            .pages
            .iter()
            .filter(|page| page.annotation.is_some())
            .count();

        Self {
            pdf: STANDARD.encode(&outcome.pdf),
            filename: OUTPUT_FILENAME,
            pages: outcome.pages,
            annotated_pages,
        }
    }
}
