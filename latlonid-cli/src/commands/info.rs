use anyhow::Result;
use latlonid::{LatLonId, LAT_MAX, LAT_MIN, LAT_SPAN, LON_MAX, LON_MIN, LON_SPAN};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct GridInfo {
    lat_min: i32,
    lat_max: i32,
    lon_min: i32,
    lon_max: i32,
    rows: u32,
    columns: u32,
    min_id: LatLonId,
    max_id: LatLonId,
}

impl GridInfo {
    fn current() -> Self {
        Self {
            lat_min: LAT_MIN,
            lat_max: LAT_MAX,
            lon_min: LON_MIN,
            lon_max: LON_MAX,
            rows: LAT_SPAN,
            columns: LON_SPAN,
            min_id: LatLonId::MIN,
            max_id: LatLonId::MAX,
        }
    }
}

pub fn run(json: bool) -> Result<()> {
    println!("{}", render(json)?);
    Ok(())
}

fn render(json: bool) -> Result<String> {
    let info = GridInfo::current();

    if json {
        return Ok(serde_json::to_string(&info)?);
    }

    let first = info.min_id.coordinate();
    let last = info.max_id.coordinate();

    let mut out = String::new();
    writeln!(
        out,
        "Latitude:  {} to {} ({} rows)",
        info.lat_min, info.lat_max, info.rows
    )?;
    writeln!(
        out,
        "Longitude: {} to {} ({} columns)",
        info.lon_min, info.lon_max, info.columns
    )?;
    writeln!(out)?;
    writeln!(out, "Identifiers: {} to {}", info.min_id, info.max_id)?;
    writeln!(out, "First cell:  {} ({}, {})", first, first.lat(), first.lon())?;
    write!(out, "Last cell:   {} ({}, {})", last, last.lat(), last.lon())?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_plain_output() {
        let out = render(false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Latitude:  -90 to 90 (181 rows)");
        assert_eq!(lines[1], "Longitude: -180 to 180 (361 columns)");
        assert_eq!(lines[3], "Identifiers: 1 to 65341");
        assert_eq!(lines[4], "First cell:  S90W180 (-90, -180)");
        assert_eq!(lines[5], "Last cell:   N90E180 (90, 180)");
    }

    #[test]
    fn test_json_output() {
        let value: Value = serde_json::from_str(&render(true).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "lat_min": -90,
                "lat_max": 90,
                "lon_min": -180,
                "lon_max": 180,
                "rows": 181,
                "columns": 361,
                "min_id": 1,
                "max_id": 65341,
            })
        );
    }
}
