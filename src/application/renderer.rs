use crate::application::encoder::PayloadEncoder;
use crate::domain::bill::QrBill;
use crate::domain::ports::{BillLayoutBox, QrRasterizerBox};
use crate::error::Result;

/// Drives the rendering ports with encoded payloads.
///
/// Owns the boxed [`QrRasterizer`](crate::domain::ports::QrRasterizer) and
/// [`BillLayout`](crate::domain::ports::BillLayout) implementations supplied
/// by the caller; the core contributes only the payload text.
pub struct BillRenderer {
    encoder: PayloadEncoder,
    rasterizer: QrRasterizerBox,
    layout: BillLayoutBox,
}

impl BillRenderer {
    pub fn new(
        encoder: PayloadEncoder,
        rasterizer: QrRasterizerBox,
        layout: BillLayoutBox,
    ) -> Self {
        Self {
            encoder,
            rasterizer,
            layout,
        }
    }

    /// Encodes the bill and rasterizes the payload into a QR glyph image.
    pub fn render_qr(&self, bill: &QrBill, size: u32) -> Result<Vec<u8>> {
        let payload = self.encoder.encode(bill);
        self.rasterizer.rasterize(&payload, size)
    }

    /// Encodes the bill and renders the printable document.
    pub fn render_document(&self, bill: &QrBill) -> Result<Vec<u8>> {
        let payload = self.encoder.encode(bill);
        self.layout.render_document(bill, &payload)
    }
}
