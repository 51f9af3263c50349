// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! This module decodes the event delivered by the platform into a [`Request`]
//! and coerces its operands into [`Operands`].
//!
//! The event is expected to be an object whose `body` field holds the
//! JSON-encoded request, as API Gateway's proxy integration delivers it. A
//! missing body is treated as an empty object, and missing operands default to
//! zero.

use crate::configs::SUBTRACT_DEFAULT_BODY;
use crate::error::{Result, SubtractError};
use log::debug;
use serde_json::{Map, Value};

/// The key of the event field holding the serialized request body.
pub const BODY_KEY: &str = "body";
/// The key of the API Gateway flag marking a base64-encoded body.
pub const BASE64_FLAG_KEY: &str = "isBase64Encoded";

/// The decoded request body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    body: Map<String, Value>,
}

/// The two operands of the subtraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    /// The minuend.
    pub a: f64,
    /// The subtrahend.
    pub b: f64,
}

impl Operands {
    /// Returns `a - b`.
    pub fn difference(&self) -> f64 {
        self.a - self.b
    }
}

impl Request {
    /// Extracts and decodes the request body carried by the event.
    pub fn try_from_event(event: &Value) -> Result<Request> {
        let event = event.as_object().ok_or_else(|| {
            SubtractError::InvalidEvent(format!("expected an object, got {}", describe(event)))
        })?;

        let decoded;
        let body: &[u8] = match event.get(BODY_KEY) {
            None => {
                debug!("Event carries no body, assuming {}", *SUBTRACT_DEFAULT_BODY);
                SUBTRACT_DEFAULT_BODY.as_bytes()
            }
            Some(Value::String(s)) if is_base64_encoded(event) => {
                decoded = base64::decode(s)?;
                &decoded
            }
            Some(Value::String(s)) => s.as_bytes(),
            Some(other) => {
                return Err(SubtractError::InvalidEvent(format!(
                    "`{}` must be a JSON-encoded string, got {}",
                    BODY_KEY,
                    describe(other)
                )));
            }
        };

        Request::from_slice(body)
    }

    /// Decodes a JSON-encoded request body.
    pub fn from_slice(body: &[u8]) -> Result<Request> {
        match serde_json::from_slice(body).map_err(SubtractError::Decode)? {
            Value::Object(body) => Ok(Request { body }),
            other => Err(SubtractError::InvalidBody(format!("got {}", describe(&other)))),
        }
    }

    /// Coerces both operands, defaulting absent ones to zero.
    pub fn operands(&self) -> Result<Operands> {
        Ok(Operands {
            a: self.operand("a")?,
            b: self.operand("b")?,
        })
    }

    fn operand(&self, name: &str) -> Result<f64> {
        match self.body.get(name) {
            None => Ok(0.0),
            Some(value) => to_f64(value)
                .map_err(|desc| SubtractError::Conversion(format!("field `{}` {}", name, desc))),
        }
    }
}

fn is_base64_encoded(event: &Map<String, Value>) -> bool {
    event
        .get(BASE64_FLAG_KEY)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Converts a JSON value to a float the way a generic float conversion does:
/// numbers pass through, booleans become 1 or 0, and strings are parsed as
/// float literals.
fn to_f64(value: &Value) -> std::result::Result<f64, String> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("holds a number out of range: {}", n)),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_float_literal(s)
            .ok_or_else(|| format!("could not convert string to a number: {:?}", s)),
        other => Err(format!(
            "must be a number or a numeric string, got {}",
            describe(other)
        )),
    }
}

/// Parses a float literal, ignoring surrounding whitespace. `inf`, `infinity`
/// and `nan` are accepted in any case, and single underscores may separate
/// digits.
fn parse_float_literal(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.contains('_') {
        strip_digit_separators(s)?.parse::<f64>().ok()
    } else {
        s.parse::<f64>().ok()
    }
}

fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, &c) in bytes.iter().enumerate() {
        if c != b'_' {
            continue;
        }
        let before = i > 0 && bytes[i - 1].is_ascii_digit();
        let after = bytes.get(i + 1).map_or(false, u8::is_ascii_digit);
        if !(before && after) {
            return None;
        }
    }
    Some(s.replace('_', ""))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_of(body: Value) -> Value {
        json!({ "body": body.to_string() })
    }

    #[test]
    fn operands_from_body() -> Result<()> {
        let request = Request::try_from_event(&event_of(json!({"a": 10, "b": 3.5})))?;
        let operands = request.operands()?;
        assert_eq!(10.0, operands.a);
        assert_eq!(3.5, operands.b);
        assert_eq!(6.5, operands.difference());
        Ok(())
    }

    #[test]
    fn missing_operands_default_to_zero() -> Result<()> {
        let operands = Request::try_from_event(&event_of(json!({"b": 5})))?.operands()?;
        assert_eq!(Operands { a: 0.0, b: 5.0 }, operands);

        let operands = Request::try_from_event(&event_of(json!({"a": 5})))?.operands()?;
        assert_eq!(Operands { a: 5.0, b: 0.0 }, operands);

        let operands = Request::try_from_event(&json!({}))?.operands()?;
        assert_eq!(Operands { a: 0.0, b: 0.0 }, operands);
        Ok(())
    }

    #[test]
    fn extra_fields_are_ignored() -> Result<()> {
        let request = Request::try_from_event(&event_of(json!({"a": 1, "b": 2, "c": "x"})))?;
        assert_eq!(-1.0, request.operands()?.difference());
        Ok(())
    }

    #[test]
    fn numeric_strings_and_booleans_convert() -> Result<()> {
        let request = Request::from_slice(br#"{"a": " 12.5 ", "b": true}"#)?;
        assert_eq!(Operands { a: 12.5, b: 1.0 }, request.operands()?);

        let request = Request::from_slice(br#"{"a": "1_000", "b": "-2e3"}"#)?;
        assert_eq!(Operands { a: 1000.0, b: -2000.0 }, request.operands()?);

        let request = Request::from_slice(br#"{"a": "-Infinity", "b": "nan"}"#)?;
        let operands = request.operands()?;
        assert!(operands.a.is_infinite() && operands.a.is_sign_negative());
        assert!(operands.b.is_nan());
        Ok(())
    }

    #[test]
    fn non_numeric_operands_are_rejected() -> Result<()> {
        for body in [
            r#"{"a": "x"}"#,
            r#"{"a": ""}"#,
            r#"{"a": "1__0"}"#,
            r#"{"a": "_1"}"#,
            r#"{"b": null}"#,
            r#"{"b": [1]}"#,
            r#"{"b": {"v": 1}}"#,
        ] {
            let request = Request::from_slice(body.as_bytes())?;
            match request.operands() {
                Err(SubtractError::Conversion(_)) => {}
                other => panic!("expected a conversion error for {}, got {:?}", body, other),
            }
        }
        Ok(())
    }

    #[test]
    fn conversion_error_names_the_field() -> Result<()> {
        let err = Request::from_slice(br#"{"a": 1, "b": "seven"}"#)?
            .operands()
            .unwrap_err();
        assert!(err.to_string().contains("field `b`"));
        Ok(())
    }

    #[test]
    fn malformed_body_fails_to_decode() {
        let event = json!({ "body": "not json" });
        assert!(matches!(
            Request::try_from_event(&event),
            Err(SubtractError::Decode(_))
        ));
    }

    #[test]
    fn body_must_be_an_object() {
        for body in ["[1, 2]", "42", "\"a\"", "null"] {
            let event = json!({ "body": body });
            assert!(matches!(
                Request::try_from_event(&event),
                Err(SubtractError::InvalidBody(_))
            ));
        }
    }

    #[test]
    fn event_shape_is_checked() {
        assert!(matches!(
            Request::try_from_event(&json!("body")),
            Err(SubtractError::InvalidEvent(_))
        ));
        assert!(matches!(
            Request::try_from_event(&json!({ "body": null })),
            Err(SubtractError::InvalidEvent(_))
        ));
        assert!(matches!(
            Request::try_from_event(&json!({ "body": {"a": 1} })),
            Err(SubtractError::InvalidEvent(_))
        ));
    }

    #[test]
    fn base64_body_is_decoded() -> Result<()> {
        let event = json!({
            "body": base64::encode(r#"{"a": 9, "b": 4}"#),
            "isBase64Encoded": true,
        });
        let operands = Request::try_from_event(&event)?.operands()?;
        assert_eq!(5.0, operands.difference());

        let event = json!({ "body": "%%%", "isBase64Encoded": true });
        assert!(matches!(
            Request::try_from_event(&event),
            Err(SubtractError::Base64(_))
        ));
        Ok(())
    }

    #[test]
    fn plain_body_ignores_false_base64_flag() -> Result<()> {
        let event = json!({ "body": r#"{"a": 2}"#, "isBase64Encoded": false });
        assert_eq!(2.0, Request::try_from_event(&event)?.operands()?.a);
        Ok(())
    }
}
