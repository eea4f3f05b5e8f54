use super::accumulator::Accumulator;
use super::line::classify;
use super::session::Session;
use crate::error::Error;
use crate::model::{now, Record, Tags, TimeFunc};
use crate::reader::LineReader;

// Measurement assigned when the configuration leaves the name empty.
pub const DEFAULT_MEASUREMENT: &str = "radius";

// Read-only decoding configuration. Safe to share between callers; all the
// mutable per-stream state lives in a call-local accumulator (batch) or in
// a Session (stream).
pub struct Parser {
    pub(super) measurement: String,
    pub(super) timestamp_column: Option<String>,
    pub(super) timestamp_format: Option<String>,
    pub(super) default_tags: Tags,
    pub(super) time_func: TimeFunc,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            measurement: String::new(),
            timestamp_column: None,
            timestamp_format: None,
            default_tags: Tags::new(),
            time_func: now,
        }
    }

    pub fn with_measurement(mut self, name: &str) -> Self {
        self.measurement = name.into();
        self
    }

    pub fn with_timestamp_column(mut self, column: &str) -> Self {
        self.timestamp_column = Some(column.into());
        self
    }

    pub fn with_timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    pub fn with_default_tags(mut self, tags: Tags) -> Self {
        self.default_tags = tags;
        self
    }

    pub fn with_time_func(mut self, time_func: TimeFunc) -> Self {
        self.time_func = time_func;
        self
    }

    // Decodes a whole buffer of blank-line-separated blocks. Stops at the
    // first failure, returning the records built up to that point together
    // with the error. Attributes of an unterminated trailing block are
    // discarded.
    pub fn decode(&self, buf: &[u8]) -> (Vec<Record>, Option<Error>) {
        let mut records = Vec::new();
        let mut acc = Accumulator::new();

        for line in LineReader::new(buf) {
            let line = match line {
                Ok(line) => line,
                Err(e) => return (records, Some(e)),
            };

            if classify(&line, self.timestamp_format.as_deref(), &mut acc) {
                match self.build(&mut acc) {
                    Ok(record) => records.push(record),
                    Err(e) => return (records, Some(e)),
                }
            }
        }

        (records, None)
    }

    pub fn session(&self) -> Session<'_> {
        Session::new(self)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
