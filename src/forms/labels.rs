use crate::labels::Placement;
use serde::Deserialize;
use serde_valid::Validate;

fn default_pos_x() -> f32 {
    20.0
}

fn default_pos_y() -> f32 {
    706.0
}

fn default_font_size() -> f32 {
    9.0
}

#[derive(Debug, Deserialize, Validate)]
pub struct AnnotateRequest {
    /// Base64-encoded PDF with one shipping label per page.
    pub pdf: String,
    /// Raw CSV text, header row first.
    pub csv: String,
    pub sku_column: Option<usize>,
    pub order_column: Option<usize>,
    pub quantity_column: Option<usize>,
    #[serde(default = "default_pos_x")]
    pub pos_x: f32,
    #[serde(default = "default_pos_y")]
    pub pos_y: f32,
    #[serde(default = "default_font_size")]
    #[validate(minimum = 6.0)]
    #[validate(maximum = 72.0)]
    pub font_size: f32,
}

impl AnnotateRequest {
    pub fn placement(&self) -> Placement {
        Placement {
            x: self.pos_x,
            y: self.pos_y,
            font_size: self.font_size,
        }
    }
}
