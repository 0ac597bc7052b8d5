use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{RankError, Result};
use crate::model::{parse_timestamp, ScoreEvent};

/// Number of leading fields a score row must carry: timestamp, player, score
pub const REQUIRED_FIELDS: usize = 3;

/// Parse one data row into a score event.
///
/// `line` is the 1-based line of the row in its source and is only used for
/// error reporting. Fields past the third are ignored.
pub fn parse_row(line: u64, fields: &[&str]) -> Result<ScoreEvent> {
    if fields.len() < REQUIRED_FIELDS {
        return Err(RankError::MissingFields {
            line,
            found: fields.len(),
        });
    }

    let timestamp = parse_timestamp(fields[0]).ok_or_else(|| RankError::InvalidTimestamp {
        line,
        value: fields[0].to_string(),
    })?;

    let player_id = fields[1];

    let score = fields[2]
        .parse::<i64>()
        .map_err(|source| RankError::InvalidScore {
            line,
            value: fields[2].to_string(),
            source,
        })?;

    Ok(ScoreEvent::new(timestamp, player_id, score))
}

/// Convert already-split rows into events. The first row is the header and is
/// skipped without being looked at.
pub fn events_from_rows<R, S>(rows: &[R]) -> Result<Vec<ScoreEvent>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut events = Vec::with_capacity(rows.len().saturating_sub(1));

    for (idx, row) in rows.iter().enumerate().skip(1) {
        let fields: Vec<&str> = row.as_ref().iter().map(|f| f.as_ref()).collect();
        events.push(parse_row(idx as u64 + 1, &fields)?);
    }

    Ok(events)
}

/// Read score events from CSV content.
///
/// Every record must have as many fields as the header, otherwise the csv
/// reader fails the whole read. A record short of the three required fields
/// is reported as `MissingFields` rather than a generic CSV error.
pub fn read_events<R: Read>(input: R) -> Result<Vec<ScoreEvent>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let mut events = Vec::new();

    for result in reader.records() {
        let record = result.map_err(short_record_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields: Vec<&str> = record.iter().collect();
        events.push(parse_row(line, &fields)?);
    }

    log::debug!("Parsed {} score events", events.len());
    Ok(events)
}

fn short_record_error(err: csv::Error) -> RankError {
    if let csv::ErrorKind::UnequalLengths { pos, len, .. } = err.kind() {
        if (*len as usize) < REQUIRED_FIELDS {
            return RankError::MissingFields {
                line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
                found: *len as usize,
            };
        }
    }
    RankError::Csv(err)
}

/// Read score events from a CSV file on disk
pub fn read_events_file(path: &Path) -> Result<Vec<ScoreEvent>> {
    let file = File::open(path).map_err(|source| RankError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Reading score log: {}", path.display());
    read_events(file)
}
