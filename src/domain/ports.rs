use crate::domain::bill::QrBill;
use crate::error::Result;

/// Turns a payload string into a QR glyph image.
///
/// Implemented outside the core; the core only produces the payload text.
pub trait QrRasterizer: Send + Sync {
    fn rasterize(&self, payload: &str, size: u32) -> Result<Vec<u8>>;
}

/// Lays out a printable bill document from a bill and its payload.
pub trait BillLayout: Send + Sync {
    fn render_document(&self, bill: &QrBill, payload: &str) -> Result<Vec<u8>>;
}

pub type QrRasterizerBox = Box<dyn QrRasterizer>;
pub type BillLayoutBox = Box<dyn BillLayout>;
