use super::accumulator::Accumulator;
use super::decoder::Parser;
use super::line::classify;
use crate::error::Result;
use crate::model::Record;

// Incremental, line-at-a-time decoding. The session owns the in-progress
// accumulator, so one session is required per independent line stream and
// feeding is an exclusive (&mut) operation.
pub struct Session<'a> {
    parser: &'a Parser,
    acc: Accumulator,
}

impl<'a> Session<'a> {
    pub(super) fn new(parser: &'a Parser) -> Self {
        Self {
            parser,
            acc: Accumulator::new(),
        }
    }

    // Applies exactly one line (terminator stripped). Returns Ok(None)
    // until a blank line terminates the block, then either the completed
    // record or the build error. The accumulator is empty again after a
    // boundary, whatever the outcome.
    pub fn feed(&mut self, line: &str) -> Result<Option<Record>> {
        if classify(line, self.parser.timestamp_format.as_deref(), &mut self.acc) {
            return self.parser.build(&mut self.acc).map(Some);
        }
        Ok(None)
    }
}
