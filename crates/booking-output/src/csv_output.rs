use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use booking_model::{EXPORT_HEADER, NormalizedBooking};

use crate::error::{OutputError, Result};

/// Write the CSV export to a file, replacing it if it exists.
pub fn write_bookings_csv(path: &Path, bookings: &[NormalizedBooking]) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_bookings_csv_to_writer(file, bookings)
}

/// Write the CSV export (header row plus one row per booking) to `writer`.
pub fn write_bookings_csv_to_writer<W: Write>(
    writer: W,
    bookings: &[NormalizedBooking],
) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;
    for booking in bookings {
        wtr.write_record(booking.to_row())?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
