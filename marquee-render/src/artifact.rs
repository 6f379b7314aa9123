//! Saved ticket artifacts

use std::path::{Path, PathBuf};

use base64::{Engine, engine::general_purpose::STANDARD};
use image::RgbaImage;

use crate::error::RenderResult;

/// Deterministic artifact name for a ticket.
///
/// Derived from the ticket identifier only: repeated saves of one ticket
/// collide with themselves and never with other tickets.
pub fn artifact_filename(ticket_id: &str) -> String {
    let safe: String = ticket_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("Marquee-Ticket-{}.png", safe)
}

/// Write the snapshot under `dir`, returning the full path.
pub fn save_png(snapshot: &RgbaImage, dir: &Path, ticket_id: &str) -> RenderResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(artifact_filename(ticket_id));
    snapshot.save_with_format(&path, image::ImageFormat::Png)?;

    tracing::info!(path = %path.display(), "Ticket image saved");
    Ok(path)
}

/// Base64 data URL for embedding PNG bytes.
pub fn to_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
