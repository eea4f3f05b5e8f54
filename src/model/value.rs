use std::fmt;

use serde::Serialize;

// A field value with its variant decided once, at record build time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl Value {
    // The attempt order decides the stored variant: integer, then float,
    // then boolean, then verbatim string. "1"/"0" never reach the boolean
    // step, and base-10 parsing leaves 0x-prefixed literals as strings.
    pub fn coerce(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Value::Float(f);
        }
        match raw.to_ascii_lowercase().as_str() {
            "1" | "t" | "true" => return Value::Boolean(true),
            "0" | "f" | "false" => return Value::Boolean(false),
            _ => (),
        }
        Value::String(raw.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce() {
        #[rustfmt::skip]
        let tests = [
            ("4",          Value::Integer(4)),
            ("-17",        Value::Integer(-17)),
            ("1",          Value::Integer(1)),
            ("0",          Value::Integer(0)),
            ("1537135341", Value::Integer(1537135341)),
            ("3.3",        Value::Float(3.3)),
            ("-0.5",       Value::Float(-0.5)),
            ("true",       Value::Boolean(true)),
            ("True",       Value::Boolean(true)),
            ("t",          Value::Boolean(true)),
            ("FALSE",      Value::Boolean(false)),
            ("f",          Value::Boolean(false)),
            ("hello",      Value::String("hello".into())),
            ("",           Value::String("".into())),
            ("0x34313337", Value::String("0x34313337".into())),
            ("Start",      Value::String("Start".into())),
            ("172.16.31.4", Value::String("172.16.31.4".into())),
        ];

        for (raw, expected) in &tests {
            assert_eq!(*expected, Value::coerce(raw), "coercing {:?}", raw);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("1537135341", Value::Integer(1537135341).to_string());
        assert_eq!("3.3", Value::Float(3.3).to_string());
        assert_eq!("true", Value::Boolean(true).to_string());
        assert_eq!("Start", Value::String("Start".into()).to_string());
    }
}
