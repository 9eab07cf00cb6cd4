use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;

use super::model::{Dataset, Record, FIELD_COUNT};

/// Field separator of the input format.
pub const DELIMITER: char = '\t';

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tab-delimited meteorite file.
///
/// The first line is a header and is always skipped. An empty file yields
/// an empty dataset.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let dataset = load_reader(BufReader::new(file)).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Header line: {:?}", dataset.header);
    if dataset.is_empty() {
        log::warn!("{} has no records after the header", path.display());
    }
    log::info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load records from any buffered source. Same rules as [`load_file`].
pub fn load_reader<R: BufRead>(reader: R) -> io::Result<Dataset> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => {
            log::warn!("Input is empty, no header and no records");
            return Ok(Dataset::default());
        }
    };

    let records = lines
        .map(|line| line.map(|l| parse_line(&l)))
        .collect::<io::Result<Vec<_>>>()?;

    Ok(Dataset {
        header: Some(header),
        records,
    })
}

// ---------------------------------------------------------------------------
// Line parser
// ---------------------------------------------------------------------------

/// Split one line (without its terminator) into a [`Record`].
///
/// Missing trailing fields become empty text; anything past the 12th field
/// is dropped. Field contents are not validated.
pub fn parse_line(line: &str) -> Record {
    let mut tokens = line.split(DELIMITER);
    let fields: [String; FIELD_COUNT] =
        std::array::from_fn(|_| tokens.next().map(str::to_owned).unwrap_or_default());
    Record::from_fields(fields)
}
