//! Ticket card text rendering
//!
//! Fixed-width text layout of an assembled ticket, in the style of a
//! receipt: centered header, label/value rows, separators.

use shared::Ticket;

/// Default card width in characters
const CARD_WIDTH: usize = 42;

/// Fixed-width text layout builder.
pub struct TextCardBuilder {
    buf: String,
    width: usize,
}

impl TextCardBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // --- Basic Operations ---
    pub fn write_line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    // --- Separators ---
    pub fn eq_sep(&mut self) {
        self.write_line(&"=".repeat(self.width));
    }

    pub fn dash_sep(&mut self) {
        self.write_line(&"-".repeat(self.width));
    }

    // --- Layout Helpers ---

    /// Write text centered in the line width
    pub fn text_center(&mut self, s: &str) {
        let len = s.chars().count();
        if len >= self.width {
            self.write_line(s);
            return;
        }
        let pad = (self.width - len) / 2;
        let line = format!("{}{}", " ".repeat(pad), s);
        self.write_line(&line);
    }

    /// Write a label on the left and a value on the right edge.
    ///
    /// A value too long for the remaining space moves to its own
    /// right-aligned line.
    pub fn line_lr(&mut self, left: &str, right: &str) {
        let left_len = left.chars().count();
        let right_len = right.chars().count();

        if left_len + right_len + 1 <= self.width {
            let spaces = self.width - left_len - right_len;
            let line = format!("{}{}{}", left, " ".repeat(spaces), right);
            self.write_line(&line);
        } else {
            self.write_line(left);
            let pad = self.width.saturating_sub(right_len);
            let line = format!("{}{}", " ".repeat(pad), right);
            self.write_line(&line);
        }
    }

    pub fn build(self) -> String {
        self.buf
    }
}

/// Renders a ticket into a fixed-width text card.
pub struct TicketCardRenderer<'a> {
    ticket: &'a Ticket,
    width: usize,
}

impl<'a> TicketCardRenderer<'a> {
    pub fn new(ticket: &'a Ticket) -> Self {
        Self {
            ticket,
            width: CARD_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self) -> String {
        let t = self.ticket;
        let mut b = TextCardBuilder::new(self.width);

        b.eq_sep();
        b.text_center(&t.event.title);
        if !t.event.artist.is_empty() {
            b.text_center(&t.event.artist);
        }
        b.eq_sep();

        b.line_lr("Name", &t.attendee_name);
        b.line_lr("Tickets", &t.ticket_count.to_string());
        b.line_lr("Date", &t.event.date);
        b.line_lr("Time", &t.event.time);
        b.line_lr("Location", &t.event.location);

        b.dash_sep();
        b.line_lr("Wave", &t.wave_name);
        b.line_lr(
            "Price",
            &format!("{} {}", t.unit_price, t.event.currency),
        );
        b.line_lr(
            "Total Paid",
            &format!("{} {}", t.total_price, t.event.currency),
        );

        b.dash_sep();
        b.line_lr("Booked", &t.booked_on);
        b.line_lr("Ticket ID", &t.ticket_id);

        b.blank();
        match t.qr_png {
            Some(_) => b.text_center("Scan the attached code at the venue"),
            None => b.text_center("Present this ticket ID at the venue"),
        }
        b.eq_sep();

        b.build()
    }
}
