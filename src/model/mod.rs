mod record;
mod timestamp;
mod value;

pub use record::*;
pub use timestamp::*;
pub use value::*;

use std::collections::HashMap;

pub type FieldName = String;

pub type TagName = String;

pub type TagValue = String;

pub type Tags = HashMap<TagName, TagValue>;

pub type Fields = HashMap<FieldName, Value>;
