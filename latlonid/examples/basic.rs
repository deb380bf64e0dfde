//! Basic example demonstrating latlonid library usage.
//!
//! Run with: cargo run --example basic

use latlonid::{decode, encode, CoordTable, Coordinate, LatLonError};

fn main() -> Result<(), LatLonError> {
    // Some famous peaks
    let locations = [
        ("Mount Fuji, Japan", 35.3606, 138.7274),
        ("Mount Everest, Nepal", 27.9881, 86.9250),
        ("Denali, Alaska", 63.0695, -151.0074),
        ("Aconcagua, Argentina", -32.6532, -70.0109),
    ];

    println!("Cell identifiers:");
    println!("{:-<50}", "");

    let mut peaks: CoordTable<Option<&str>> = CoordTable::default();
    for (name, lat, lon) in &locations {
        let cell = Coordinate::from_degrees(*lat, *lon)?;
        println!("{}: {} -> id {}", name, cell, cell.id());
        peaks[cell] = Some(*name);
    }

    // Identifiers decode back to the cell's south-west corner
    let id = encode(27, 86);
    let (lat, lon) = decode(id);
    println!("\nid {} decodes to ({}, {})", id, lat, lon);

    // Look the peaks up again through the dense table
    println!("\nCells with a peak:");
    for (cell, name) in peaks.iter() {
        if let Some(name) = name {
            println!("  {} {}", cell, name);
        }
    }

    Ok(())
}
