/*
 * Small example application that decodes the packed attributes
 * of a single LAS point record and checks them for validity.
 *
 * The first argument is the flags byte with return number, number of returns,
 * scan direction and flight-line edge. Decimal, 0x and 0b notations are accepted.
 * The second argument is the classification byte in the same notations.
 * The third argument is an optional scan angle rank, the default is 0.
 *
 * The exit code is non-zero if the point is invalid.
 * Set RUST_LOG=trace to see details from the library.
 */

use anyhow::{ensure, Context, Result};
use env_logger::Builder;
use laspoint::Point;
use log::LevelFilter;
use std::env::args;

fn main() -> Result<()> {
    Builder::new()
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    // Check command line arguments and show usage
    let args: Vec<String> = args().collect();
    ensure!(
        args.len() >= 3,
        "Usage:\n  las-point-inspect <flags> <classification> <optional-scan-angle-rank>"
    );

    let flags = parse_byte(&args[1]).context("Failed to parse flags argument")?;
    let classification =
        parse_byte(&args[2]).context("Failed to parse classification argument")?;
    let scan_angle_rank = if args.len() > 3 {
        args[3]
            .parse::<i8>()
            .context("Failed to parse scan angle rank argument")?
    } else {
        0
    };

    let mut point = Point::new();
    point.set_flags(flags);
    point.set_classification(classification);
    point.set_scan_angle_rank(scan_angle_rank);

    println!("Flags: {flags:#010b}");
    println!("  Return number: {}", point.return_number());
    println!("  Number of returns: {}", point.number_of_returns());
    println!("  Scan direction: {}", point.scan_direction());
    println!("  Flight-line edge: {}", point.flight_line_edge());

    let cls = point.classification();
    println!("Classification: {:#010b}", cls.bits());
    println!("  Class index: {}", cls.class_index());
    println!("  Synthetic: {}", cls.is_synthetic());
    println!("  Key-point: {}", cls.is_key_point());
    println!("  Withheld: {}", cls.is_withheld());

    println!("Scan angle rank: {scan_angle_rank}");

    if let Err(err) = point.validate() {
        log::error!("{err}");
        std::process::exit(1);
    }
    log::info!("Point is valid");
    Ok(())
}

fn parse_byte(text: &str) -> Result<u8> {
    let value = if let Some(hex) = text.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)?
    } else if let Some(bin) = text.strip_prefix("0b") {
        u8::from_str_radix(bin, 2)?
    } else {
        text.parse::<u8>()?
    };
    Ok(value)
}
