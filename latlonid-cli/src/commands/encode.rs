use anyhow::{Context, Result};
use latlonid::{Coordinate, LatLonId};
use serde::Serialize;

#[derive(Serialize)]
struct EncodeResponse {
    lat: f64,
    lon: f64,
    cell: String,
    id: LatLonId,
}

pub fn run(lat: f64, lon: f64, json: bool) -> Result<()> {
    println!("{}", render(lat, lon, json)?);
    Ok(())
}

fn render(lat: f64, lon: f64, json: bool) -> Result<String> {
    let cell = Coordinate::from_degrees(lat, lon).context("Failed to encode coordinate")?;
    let id = cell.id();
    tracing::debug!(lat, lon, %cell, %id, "encoded");

    if json {
        let response = EncodeResponse {
            lat,
            lon,
            cell: cell.to_string(),
            id,
        };
        Ok(serde_json::to_string(&response)?)
    } else {
        Ok(id.to_string())
    }
}
