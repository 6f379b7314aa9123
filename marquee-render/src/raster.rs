//! Ticket snapshot rasterization
//!
//! Composes the shareable ticket bitmap on demand: a white card with brand
//! bands, a perforation row, and the scannable panel. The whole card is
//! upscaled by a device-pixel-ratio factor so the saved image stays
//! legible at native resolution on dense screens.

use image::{Rgba, RgbaImage, imageops};
use shared::Ticket;

use crate::error::{RenderError, RenderResult};

/// Brand band (deep purple)
const BAND_COLOR: Rgba<u8> = Rgba([76, 29, 149, 255]);
/// Card background
const CARD_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Perforation dashes
const PERFORATION_COLOR: Rgba<u8> = Rgba([203, 213, 225, 255]);

/// Minimum card content width in pixels (pre-scale)
const MIN_CONTENT_WIDTH: u32 = 280;
/// Height reserved for the perforation row (pre-scale)
const PERFORATION_HEIGHT: u32 = 10;

/// Snapshot composition options.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Device-pixel-ratio upscale factor
    pub scale: u32,
    /// Padding around the card content in pixels (pre-scale)
    pub margin: u32,
    /// Height of the brand bands in pixels (pre-scale)
    pub band_height: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2,
            margin: 16,
            band_height: 28,
        }
    }
}

/// Compose the ticket snapshot bitmap.
///
/// A ticket without a scannable code is still rendered; the panel is
/// simply left out. The assembled ticket itself is never consumed, so a
/// failed composition can be retried.
pub fn rasterize(ticket: &Ticket, opts: &RasterOptions) -> RenderResult<RgbaImage> {
    if opts.scale == 0 || opts.scale > 8 {
        return Err(RenderError::Raster(format!(
            "unsupported scale factor {}",
            opts.scale
        )));
    }

    let qr = match &ticket.qr_png {
        Some(png) => Some(image::load_from_memory(png)?.to_rgba8()),
        None => None,
    };

    let content_width = qr
        .as_ref()
        .map(|q| q.width())
        .unwrap_or(0)
        .max(MIN_CONTENT_WIDTH);
    let qr_height = qr.as_ref().map(|q| q.height()).unwrap_or(0);

    let width = content_width + opts.margin * 2;
    let height = opts.band_height * 2 + opts.margin * 3 + qr_height + PERFORATION_HEIGHT;

    let mut card = RgbaImage::from_pixel(width, height, CARD_COLOR);

    // brand bands top and bottom
    fill_rect(&mut card, 0, 0, width, opts.band_height, BAND_COLOR);
    fill_rect(
        &mut card,
        0,
        height - opts.band_height,
        width,
        opts.band_height,
        BAND_COLOR,
    );

    if let Some(qr) = &qr {
        let x = (width - qr.width()) / 2;
        let y = opts.band_height + opts.margin;
        imageops::overlay(&mut card, qr, i64::from(x), i64::from(y));
    }

    draw_perforation(
        &mut card,
        height - opts.band_height - opts.margin - PERFORATION_HEIGHT / 2,
        opts.margin,
    );

    let scaled = imageops::resize(
        &card,
        width * opts.scale,
        height * opts.scale,
        imageops::FilterType::Nearest,
    );

    tracing::debug!(
        ticket_id = %ticket.ticket_id,
        width = scaled.width(),
        height = scaled.height(),
        "Ticket snapshot composed"
    );

    Ok(scaled)
}

fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
    for y in y0..(y0 + h).min(img.height()) {
        for x in x0..(x0 + w).min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Dashed tear-off row across the card.
fn draw_perforation(img: &mut RgbaImage, y: u32, margin: u32) {
    if y >= img.height() {
        return;
    }
    let mut x = margin;
    while x + 6 < img.width().saturating_sub(margin) {
        for dx in 0..6 {
            img.put_pixel(x + dx, y, PERFORATION_COLOR);
        }
        x += 10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::EventDetails;

    fn ticket(qr_png: Option<Vec<u8>>) -> Ticket {
        Ticket {
            ticket_id: "TK-2".to_string(),
            attendee_name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            phone: "+251 911 000000".to_string(),
            ticket_count: 1,
            unit_price: Decimal::from(700),
            total_price: Decimal::from(700),
            wave_name: "Second Wave".to_string(),
            booked_on: "08 Mar 2026".to_string(),
            event: EventDetails {
                title: "Marquee Live 2026".to_string(),
                date: "March 14, 2026".to_string(),
                time: "7:00 PM - 11:00 PM".to_string(),
                location: "Friendship Park, Addis Ababa".to_string(),
                artist: "ISAAC-ADDISU".to_string(),
                description: String::new(),
                base_price: Decimal::from(500),
                currency: "ETB".to_string(),
            },
            qr_png,
        }
    }

    #[test]
    fn snapshot_applies_pixel_ratio_upscale() {
        let opts = RasterOptions::default();
        let snapshot = rasterize(&ticket(None), &opts).unwrap();

        let base_width = MIN_CONTENT_WIDTH + opts.margin * 2;
        assert_eq!(snapshot.width(), base_width * opts.scale);
        assert_eq!(snapshot.width() % opts.scale, 0);
    }

    #[test]
    fn renders_without_scannable_code() {
        let snapshot = rasterize(&ticket(None), &RasterOptions::default()).unwrap();
        assert!(snapshot.width() > 0 && snapshot.height() > 0);
    }

    #[test]
    fn embeds_scannable_panel_when_present() {
        let png = crate::qr::encode_png(&ticket(None)).unwrap();
        let with_code = rasterize(&ticket(Some(png)), &RasterOptions::default()).unwrap();
        let without = rasterize(&ticket(None), &RasterOptions::default()).unwrap();

        assert!(with_code.height() > without.height());
    }

    #[test]
    fn rejects_zero_scale() {
        let opts = RasterOptions {
            scale: 0,
            ..RasterOptions::default()
        };
        assert!(matches!(
            rasterize(&ticket(None), &opts),
            Err(RenderError::Raster(_))
        ));
    }
}
