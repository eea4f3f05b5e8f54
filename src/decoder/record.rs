use super::accumulator::Accumulator;
use super::decoder::{Parser, DEFAULT_MEASUREMENT};
use crate::error::{Error, ErrorKind, Result};
use crate::model::{parse_time, Fields, Record, Timestamp, Value};

impl Parser {
    // Finalizes the accumulated block into an immutable record. The
    // accumulator is left empty whether or not the build succeeds, so a
    // failed block never bleeds into the next one.
    pub(super) fn build(&self, acc: &mut Accumulator) -> Result<Record> {
        let tags = self.default_tags.clone();

        let mut fields = Fields::new();
        for (name, raw) in acc.take() {
            fields.insert(name, Value::coerce(&raw));
        }

        let measurement = if self.measurement.is_empty() {
            DEFAULT_MEASUREMENT.into()
        } else {
            self.measurement.clone()
        };

        let timestamp = self.resolve_timestamp(&fields)?;

        Ok(Record::new(measurement, tags, fields, timestamp))
    }

    // Without a configured column the clock decides. With one, the column
    // must be present and a format must be configured even when the value
    // is a plain epoch integer.
    fn resolve_timestamp(&self, fields: &Fields) -> Result<Timestamp> {
        let column = match &self.timestamp_column {
            Some(column) => column,
            None => return Ok((self.time_func)()),
        };

        let value = fields.get(column).ok_or_else(|| {
            Error::new(
                ErrorKind::MissingTimestampColumn,
                &format!("timestamp column {} could not be found", column),
            )
        })?;

        let format = self.timestamp_format.as_ref().ok_or_else(|| {
            Error::new(
                ErrorKind::MissingTimestampFormat,
                "timestamp format must be specified",
            )
        })?;

        let raw = value.to_string();
        match raw.parse::<i64>() {
            Ok(secs) => Ok(secs * 1000),
            Err(_) => parse_time(&raw, format).map_err(|e| {
                Error::with_source(ErrorKind::TimestampParseFailure, "couldn't parse timestamp", e)
            }),
        }
    }
}
