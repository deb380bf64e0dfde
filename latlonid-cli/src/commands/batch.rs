use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use latlonid::Coordinate;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Header of the appended column.
const ID_COLUMN: &str = "latlon_id";

/// Written instead of an identifier when a row's coordinates are out of range.
const INVALID: &str = "invalid";

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    rows: u64,
    invalid: u64,
}

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    lat_col: String,
    lon_col: String,
) -> Result<()> {
    let output_path = output.unwrap_or_else(|| default_output(&input));

    let summary = process_csv(&input, &output_path, &lat_col, &lon_col)?;

    if summary.invalid > 0 {
        println!(
            "{} of {} rows had out-of-range coordinates",
            summary.invalid, summary.rows
        );
    }
    println!("Output written to: {}", output_path.display());
    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_latlonid.csv", stem))
}

fn process_csv(input: &Path, output: &Path, lat_col: &str, lon_col: &str) -> Result<Summary> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let total = records.len() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let output_file = File::create(output).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    // Write header
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push(ID_COLUMN);
    writer.write_record(&new_headers)?;

    let mut summary = Summary::default();

    for (row, record) in records.iter().enumerate() {
        // Header is line 1
        let line = row + 2;

        let lat: f64 = record
            .get(lat_idx)
            .with_context(|| format!("Missing latitude on line {}", line))?
            .trim()
            .parse()
            .with_context(|| format!("Invalid latitude on line {}", line))?;
        let lon: f64 = record
            .get(lon_idx)
            .with_context(|| format!("Missing longitude on line {}", line))?
            .trim()
            .parse()
            .with_context(|| format!("Invalid longitude on line {}", line))?;

        let id = match Coordinate::from_degrees(lat, lon) {
            Ok(cell) => cell.id().to_string(),
            Err(err) => {
                tracing::warn!(line, error = %err, "coordinates out of range");
                summary.invalid += 1;
                INVALID.to_string()
            }
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&id);
        writer.write_record(&new_record)?;

        summary.rows += 1;
        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    tracing::info!(
        rows = summary.rows,
        invalid = summary.invalid,
        output = %output.display(),
        "batch complete"
    );
    Ok(summary)
}
