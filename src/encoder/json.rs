use super::encoder::Encoder;
use crate::error::Result;
use crate::model::Record;

// One JSON object per record, line-delimited-friendly:
//
// {
//   "measurement": "radius",
//   "tags": {"nas": "img-sde-1"},
//   "fields": {"Acct-Status-Type": "Start", "NAS-Port": 1813},
//   "timestamp": 1537135341000
// }
pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(record).map_err(|e| ("JSON serialization failed", e))?)
    }
}
