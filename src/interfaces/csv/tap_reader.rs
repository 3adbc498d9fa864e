use crate::domain::event::InputEvent;
use crate::error::{CalcError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct TapRecord {
    key: InputEvent,
}

/// A tap script: a CSV with a `key` header and one keypad label per row,
/// replayed in order. Labels may carry surrounding whitespace.
pub struct TapReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TapReader<R> {
    /// Wraps a script source; nothing is read until `taps` is iterated.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Parses one row at a time. A bad row yields an error for that row only
    /// and the script carries on.
    pub fn taps(self) -> impl Iterator<Item = Result<InputEvent>> {
        self.reader
            .into_deserialize::<TapRecord>()
            .map(|result| result.map(|record| record.key).map_err(CalcError::from))
    }
}
