use crate::domain::event::InputEvent;
use crate::domain::screen::Screen;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of output: the screen as it looked after a given tap.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ScreenRecord {
    /// Number of taps applied so far.
    pub step: usize,
    /// Label of the last tap, empty before the first one.
    pub key: String,
    pub older: String,
    pub newer: String,
    pub display: String,
}

impl ScreenRecord {
    pub fn new(step: usize, key: Option<InputEvent>, screen: &Screen) -> Self {
        Self {
            step,
            key: key.map(|k| k.to_string()).unwrap_or_default(),
            older: screen.older().to_string(),
            newer: screen.newer().to_string(),
            display: screen.expression.clone(),
        }
    }
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes screen records as CSV (with a header row) or as JSON lines.
pub struct ScreenWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> ScreenWriter<W> {
    pub fn csv(destination: W) -> Self {
        Self {
            sink: Sink::Csv(csv::Writer::from_writer(destination)),
        }
    }

    pub fn json(destination: W) -> Self {
        Self {
            sink: Sink::Json(destination),
        }
    }

    pub fn write_record(&mut self, record: &ScreenRecord) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(record)?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, record)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::Digit;

    fn screen() -> Screen {
        Screen {
            expression: "7".to_string(),
            history: vec!["2×3=6".to_string(), "2+3=5".to_string()],
        }
    }

    #[test]
    fn test_csv_output() {
        let mut buffer = Vec::new();
        {
            let mut writer = ScreenWriter::csv(&mut buffer);
            let key = InputEvent::Digit(Digit::new(7).unwrap());
            writer.write_record(&ScreenRecord::new(9, Some(key), &screen())).unwrap();
            writer.flush().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "step,key,older,newer,display\n9,7,2+3=5,2×3=6,7\n");
    }

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        {
            let mut writer = ScreenWriter::json(&mut buffer);
            writer
                .write_record(&ScreenRecord::new(0, None, &screen()))
                .unwrap();
            writer.flush().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["step"], 0);
        assert_eq!(value["key"], "");
        assert_eq!(value["older"], "2+3=5");
        assert_eq!(value["display"], "7");
    }
}
