use serde::Serialize;

use super::{Fields, Tags, Timestamp, Value};

// A completed accounting detail block. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    measurement: String,
    tags: Tags,
    fields: Fields,
    timestamp: Timestamp,
}

impl Record {
    pub(crate) fn new(measurement: String, tags: Tags, fields: Fields, timestamp: Timestamp) -> Self {
        Self {
            measurement,
            tags,
            fields,
            timestamp,
        }
    }

    #[inline]
    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    #[inline]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
