//! `reservar` CLI -- compute bookable slots and create reservations.
//!
//! ## Usage
//!
//! ```sh
//! # Slots for a 60 minute service with one booking
//! reservar slots --opening 09:00 --closing 12:00 --duration 60 --booked 10:00-11:00
//!
//! # Same, as JSON
//! reservar slots --opening 09:00 --closing 12:00 --duration 60 --json
//!
//! # Slots for a service from a dataset exported from the database
//! reservar plan -i dataset.json --business salon --service massage --date 2026-03-16
//!
//! # Book and write the updated dataset
//! reservar book -i dataset.json --business salon --service massage \
//!   --client ana --start 2026-03-16T09:00:00 -o dataset.json
//!
//! # Override the fallback hours/duration
//! reservar --config reservar.toml plan -i dataset.json ...
//! ```

use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use reservar_booking::{BookingConfig, BookingRequest, BookingService, Dataset, InMemoryCache};
use slot_engine::{compute_slots, count_available, Interval, Slot, TimeOfDay};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "reservar",
    version,
    about = "reserv-ar slot availability and booking CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with default_opening, default_closing and default_duration_minutes
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute slots from explicit hours, duration and bookings
    Slots {
        /// Opening time, HH:MM
        #[arg(long)]
        opening: TimeOfDay,
        /// Closing time, HH:MM
        #[arg(long)]
        closing: TimeOfDay,
        /// Service duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: i64,
        /// Booked interval HH:MM-HH:MM (repeatable)
        #[arg(long = "booked", value_parser = parse_interval)]
        booked: Vec<Interval>,
        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute slots for a service using a dataset file
    Plan {
        /// Dataset JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long)]
        business: String,
        #[arg(long)]
        service: String,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Book a service and emit the updated dataset
    Book {
        /// Dataset JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file for the updated dataset (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long)]
        business: String,
        #[arg(long)]
        service: String,
        #[arg(long)]
        client: String,
        /// Local start time, YYYY-MM-DDTHH:MM:SS
        #[arg(long)]
        start: NaiveDateTime,
        #[arg(long)]
        notes: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => BookingConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => BookingConfig::default(),
    };
    tracing::debug!(?config, "booking defaults");

    match cli.command {
        Commands::Slots {
            opening,
            closing,
            duration,
            booked,
            json,
        } => {
            let slots = compute_slots(opening, closing, duration, &booked)
                .context("Failed to compute slots")?;
            print_slots(&slots, json)?;
        }
        Commands::Plan {
            input,
            business,
            service,
            date,
            json,
        } => {
            let dataset = load_dataset(input.as_deref())?;
            let (booking, _) = booking_service(dataset, config);
            let slots = booking
                .available_slots(&business.as_str().into(), &service.as_str().into(), date)
                .with_context(|| format!("Failed to compute slots for {} on {}", service, date))?;
            print_slots(&slots, json)?;
        }
        Commands::Book {
            input,
            output,
            business,
            service,
            client,
            start,
            notes,
        } => {
            let dataset = load_dataset(input.as_deref())?;
            let (booking, mut dataset) = booking_service(dataset, config);
            let reservation = booking
                .book(BookingRequest {
                    business_id: business.as_str().into(),
                    service_id: service.as_str().into(),
                    client_id: client.as_str().into(),
                    start,
                    notes,
                })
                .context("Failed to book")?;
            eprintln!(
                "Booked {} from {} to {}",
                reservation.id, reservation.start, reservation.end
            );

            dataset.reservations.push(reservation);
            let updated = dataset.to_json_pretty()?;
            write_output(output.as_deref(), &updated)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build a booking service over in-memory collaborators seeded from `dataset`.
///
/// The dataset is handed back so the caller can extend it with new records.
fn booking_service(dataset: Dataset, config: BookingConfig) -> (BookingService, Dataset) {
    let (directory, store) = dataset.clone().into_collaborators();
    let directory = Arc::new(directory);
    let service = BookingService::new(
        directory.clone(),
        directory,
        Arc::new(store),
        Arc::new(InMemoryCache::new()),
        config,
    );
    (service, dataset)
}

/// Parse `HH:MM-HH:MM` into an [`Interval`].
fn parse_interval(s: &str) -> std::result::Result<Interval, String> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| format!("expected HH:MM-HH:MM, got '{}'", s))?;
    let start: TimeOfDay = start.parse().map_err(|e| format!("{}", e))?;
    let end: TimeOfDay = end.parse().map_err(|e| format!("{}", e))?;
    Interval::new(start, end).map_err(|e| e.to_string())
}

fn print_slots(slots: &[Slot], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(slots)?);
        return Ok(());
    }
    if slots.is_empty() {
        println!("No slots fit within operating hours.");
        return Ok(());
    }
    for slot in slots {
        let state = if slot.available { "available" } else { "booked" };
        println!("{}-{}  {}", slot.start, slot.end, state);
    }
    println!("{} of {} slots available", count_available(slots), slots.len());
    Ok(())
}

fn load_dataset(path: Option<&str>) -> Result<Dataset> {
    let raw = read_input(path)?;
    Dataset::from_json(&raw).context("Failed to parse dataset")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
