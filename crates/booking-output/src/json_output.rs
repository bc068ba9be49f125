use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use booking_model::NormalizedBooking;

use crate::error::{OutputError, Result};

/// Write bookings as a pretty-printed JSON array to a file.
pub fn write_bookings_json(path: &Path, bookings: &[NormalizedBooking]) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_bookings_json_to_writer(&mut writer, bookings)?;
    writer.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_bookings_json_to_writer<W: Write>(
    mut writer: W,
    bookings: &[NormalizedBooking],
) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, bookings)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(())
}
