use std::{fs::File, io::Read, path::Path};

use csv::{Reader, Result};

use crate::{
    domain::event::Event,
    error::{self, Error},
};

/// Column names of the calendar file, which ships without a header row.
pub const HEADER: &str = "Id,Year,Month,Day,EventName,NotUsedInt,NotUsedString,Urgency\n";

/// Parse [`Event`]s from a reader.
///
/// The content must start with [`HEADER`]. Events come back in file order;
/// duplicated rows are kept, since the same reminder can legitimately appear
/// twice in a calendar.
pub fn read(reader: impl Read) -> Result<Vec<Event>> {
    Reader::from_reader(reader).into_deserialize().collect()
}

pub fn read_file(path: &Path) -> error::Result<Vec<Event>> {
    let file = File::open(path).map_err(|source| Error::FileError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(read(file)?)
}
