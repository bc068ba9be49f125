//! JSON booking import.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use booking_model::RawBooking;

use crate::error::{IngestError, Result};

/// Read a JSON array of raw bookings from a file.
pub fn read_bookings_json(path: &Path) -> Result<Vec<RawBooking>> {
    let file = File::open(path).map_err(|source| IngestError::open(path, source))?;
    read_bookings_json_from_reader(BufReader::new(file), path)
}

/// Read a JSON array of raw bookings; `path` only labels errors.
pub fn read_bookings_json_from_reader<R: Read>(reader: R, path: &Path) -> Result<Vec<RawBooking>> {
    serde_json::from_reader(reader).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}
