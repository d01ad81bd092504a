//! CSV export of the event log, for analysis outside the simulator.

use std::path::Path;

use serde::Serialize;

use crate::{LogEntry, LogKind, ServerId};

/// One flat row per log entry: `time,customer,event,server`. The server
/// column is empty for arrivals and departures.
#[derive(Debug, Serialize)]
struct Record {
    time: f64,
    customer: usize,
    event: &'static str,
    server: Option<ServerId>,
}

impl From<&LogEntry> for Record {
    fn from(entry: &LogEntry) -> Record {
        let (event, server) = match entry.kind {
            LogKind::Arrives => ("arrives", None),
            LogKind::WaitsFor(server) => ("waits", Some(server)),
            LogKind::ServedBy(server) => ("served", Some(server)),
            LogKind::DoneServedBy(server) => ("done", Some(server)),
            LogKind::Leaves => ("leaves", None),
        };
        Record {
            time: entry.time,
            customer: entry.customer,
            event,
            server,
        }
    }
}

/// Write the whole log to `path`, one row per entry plus a header.
pub fn write_log_csv(path: &Path, log: &[LogEntry]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for entry in log {
        writer.serialize(Record::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}
