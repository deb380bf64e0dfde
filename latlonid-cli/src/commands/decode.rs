use anyhow::{Context, Result};
use latlonid::{Coordinate, LatLonId};
use serde::Serialize;

#[derive(Serialize)]
struct DecodeResponse {
    id: LatLonId,
    #[serde(flatten)]
    coordinate: Coordinate,
    cell: String,
}

pub fn run(id: &str, json: bool) -> Result<()> {
    println!("{}", render(id, json)?);
    Ok(())
}

fn render(id: &str, json: bool) -> Result<String> {
    let id: LatLonId = id.parse().context("Failed to decode identifier")?;
    let coordinate = id.coordinate();
    tracing::debug!(%id, %coordinate, "decoded");

    if json {
        let response = DecodeResponse {
            id,
            coordinate,
            cell: coordinate.to_string(),
        };
        Ok(serde_json::to_string(&response)?)
    } else {
        Ok(format!("{} {}", coordinate.lat(), coordinate.lon()))
    }
}
