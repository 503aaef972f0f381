//! Import of marker locations from json and csv files.

#[cfg(test)]
#[path = "../../tests/unit/extensions/import_test.rs"]
mod import_test;

use std::io::{BufReader, Read};
use tsp_core::models::Coordinates;

pub use self::actual::read_csv_markers;

/// Reads marker locations from json array of `{"lng": .., "lat": ..}` objects.
pub fn read_json_markers<R: Read>(reader: BufReader<R>) -> Result<Vec<Coordinates>, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot read markers: '{err}'"))
}

/// Reads marker locations in given format: `json` or `csv`.
pub fn import_markers<R: Read>(input_format: &str, reader: BufReader<R>) -> Result<Vec<Coordinates>, String> {
    match input_format {
        "json" => read_json_markers(reader),
        "csv" => read_csv_markers(reader),
        _ => Err(format!("unknown markers format: '{input_format}'")),
    }
}

/// Returns markers format guessed from file extension, json is used by default.
pub fn get_markers_format(path: &str) -> &'static str {
    if path.to_lowercase().ends_with(".csv") { "csv" } else { "json" }
}

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;

    use serde::Deserialize;
    use std::io::{BufReader, Read};
    use tsp_core::models::Coordinates;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvMarker {
        lng: f64,
        lat: f64,
    }

    /// Reads marker locations from csv with `LNG,LAT` header.
    pub fn read_csv_markers<R: Read>(reader: BufReader<R>) -> Result<Vec<Coordinates>, String> {
        let mut reader = csv::Reader::from_reader(reader);

        reader
            .deserialize::<CsvMarker>()
            .map(|entry| {
                entry
                    .map(|marker| Coordinates::new(marker.lng, marker.lat))
                    .map_err(|err| format!("cannot read markers: '{err}'"))
            })
            .collect()
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use std::io::{BufReader, Read};
    use tsp_core::models::Coordinates;

    /// A stub method for reading markers from csv format.
    pub fn read_csv_markers<R: Read>(_reader: BufReader<R>) -> Result<Vec<Coordinates>, String> {
        Err("csv format is not enabled".to_string())
    }
}
