//! Marquee Render - ticket artifact synthesis
//!
//! Encodes the scannable payload as a QR bitmap, renders the fixed-width
//! text ticket card, and composes the shareable PNG snapshot.

pub mod artifact;
pub mod card;
pub mod error;
pub mod qr;
pub mod raster;

pub use artifact::{artifact_filename, save_png, to_data_url};
pub use card::TicketCardRenderer;
pub use error::{RenderError, RenderResult};
pub use raster::{RasterOptions, rasterize};
