//! Scannable code generation
//!
//! Encodes the ticket's scan payload as a QR bitmap: pure black modules on
//! a pure white background with a quiet zone, sized for reliable scanning
//! under venue lighting.

use image::{ImageBuffer, Luma};
use qrcode::QrCode;
use shared::{ScanPayload, Ticket};

use crate::error::{RenderError, RenderResult};

/// Minimum edge length of the produced code in pixels.
pub const QR_TARGET_PX: u32 = 200;

/// Encode a payload into a QR bitmap.
pub fn encode(payload: &ScanPayload) -> RenderResult<ImageBuffer<Luma<u8>, Vec<u8>>> {
    let json = payload.to_json()?;
    let code = QrCode::new(json.as_bytes()).map_err(|e| RenderError::Qr(e.to_string()))?;

    let bitmap = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_TARGET_PX, QR_TARGET_PX)
        .quiet_zone(true)
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .build();

    Ok(bitmap)
}

/// Encode a ticket's payload into PNG bytes.
pub fn encode_png(ticket: &Ticket) -> RenderResult<Vec<u8>> {
    let payload = ScanPayload::from_ticket(ticket);
    let bitmap = encode(&payload)?;

    let mut png = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut png);
    image::DynamicImage::ImageLuma8(bitmap).write_to(&mut cursor, image::ImageFormat::Png)?;

    tracing::debug!(bytes = png.len(), "Scannable code encoded");
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::EventDetails;

    fn ticket() -> Ticket {
        Ticket {
            ticket_id: "TK-1".to_string(),
            attendee_name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            phone: "+251 911 000000".to_string(),
            ticket_count: 1,
            unit_price: Decimal::from(500),
            total_price: Decimal::from(500),
            wave_name: "First Wave".to_string(),
            booked_on: "21 Feb 2026".to_string(),
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
            qr_png: None,
        }
    }

    #[test]
    fn produces_png_at_target_size() {
        let png = encode_png(&ticket()).unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert!(decoded.width() >= QR_TARGET_PX);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn modules_are_pure_black_on_white() {
        let payload = ScanPayload::from_ticket(&ticket());
        let bitmap = encode(&payload).unwrap();

        let mut levels: Vec<u8> = bitmap.pixels().map(|p| p.0[0]).collect();
        levels.sort_unstable();
        levels.dedup();
        assert_eq!(levels, vec![0, 255]);
    }
}
