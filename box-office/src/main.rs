use std::io::{self, Write};
use std::path::Path;

use rust_decimal::Decimal;

use box_office::booking::{BookingService, QrScanEncoder};
use box_office::counter::FileTicketSequence;
use box_office::pricing::strategy_for;
use box_office::{AppConfig, Notice, Notifier, PriceQuote, PriceTicker};
use marquee_render::{RasterOptions, TicketCardRenderer, rasterize, save_png};
use shared::BookingInput;

/// Notifier that prints to the kiosk terminal.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        println!("\n[{}] {}", notice.title(), notice.body());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "box-office.json".to_string());
    let config = AppConfig::load(Path::new(&config_path))?;

    tracing::info!(event = %config.event.title, "Box office starting");

    let ticker = PriceTicker::spawn(config.waves.clone(), config.event.base_price);

    let sequence = FileTicketSequence::load(&config.data_dir)?;
    let service = BookingService::new(
        config.clone(),
        Box::new(config.client_config().build_client()),
        strategy_for(config.price_mode),
        Box::new(QrScanEncoder),
        Box::new(sequence),
        Box::new(ConsoleNotifier),
    );

    print_banner(&config);

    let images_dir = config.data_dir.join("tickets");

    loop {
        let quote = ticker.current();
        let input = read_booking_form(&quote, &config.event.currency)?;

        let estimate = quote.unit_price * Decimal::from(input.ticket_count);
        println!("Total amount: {} {}", estimate, config.event.currency);
        if !confirm("Confirm booking?")? {
            continue;
        }

        // the form input survives failures so the visitor can retry
        let ticket = loop {
            match service.book(&input).await {
                Ok(ticket) => break Some(ticket),
                Err(_) => {
                    if !confirm("Try again with the same details?")? {
                        break None;
                    }
                }
            }
        };

        if let Some(ticket) = ticket {
            println!("\n{}", TicketCardRenderer::new(&ticket).render());

            if confirm("Save the ticket image?")? {
                match rasterize(&ticket, &RasterOptions::default()) {
                    Ok(snapshot) => match save_png(&snapshot, &images_dir, &ticket.ticket_id) {
                        Ok(path) => service.notify(&Notice::TicketSaved {
                            path: path.display().to_string(),
                        }),
                        Err(e) => {
                            tracing::error!(error = %e, "Saving the ticket image failed");
                            service.notify(&Notice::SnapshotFailed);
                        }
                    },
                    Err(e) => {
                        tracing::error!(error = %e, "Rasterization failed");
                        service.notify(&Notice::SnapshotFailed);
                    }
                }
            }
        }

        if !confirm("Book another ticket?")? {
            break;
        }
    }

    ticker.stop().await;
    tracing::info!("Box office closed");
    Ok(())
}

fn init_logger() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn print_banner(config: &AppConfig) {
    let e = &config.event;
    println!("{}", "=".repeat(48));
    println!("  {}", e.title);
    println!("  {} | {}", e.date, e.time);
    println!("  {}", e.location);
    println!("  Artist: {}", e.artist);
    println!();
    println!("  Ticket waves:");
    for wave in &config.waves {
        println!(
            "    {}: {} {} ({})",
            wave.name, wave.price, e.currency, wave.label
        );
    }
    println!("{}", "=".repeat(48));
}

fn read_booking_form(quote: &PriceQuote, currency: &str) -> io::Result<BookingInput> {
    println!();
    match (&quote.wave_name, &quote.wave_label) {
        (Some(name), Some(label)) => println!("Current wave: {name} ({label})"),
        _ => println!("Tickets not on sale right now"),
    }
    println!("Price per ticket: {} {}", quote.unit_price, currency);
    println!();

    let full_name = prompt("Full name")?;
    let email = prompt("Email")?;
    let phone = prompt("Phone")?;
    let ticket_count = prompt("Tickets (1-10)")?.parse().unwrap_or(1);

    Ok(BookingInput {
        full_name,
        email,
        phone,
        ticket_count,
    })
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm(question: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{question} [y/N]"))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
