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

//! Subtract error types

use std::error;
use std::fmt::{Display, Formatter};
use std::result;

/// Result type for operations that could result in an [SubtractError]
pub type Result<T> = result::Result<T, SubtractError>;

/// Subtract error
#[derive(Debug)]
pub enum SubtractError {
    /// Error associated to Lambda runtime execution.
    LambdaError(Box<dyn std::error::Error + Send + Sync>),
    /// Error returned when the event handed over by the platform has no usable
    /// shape, e.g. it is not an object or its `body` is not a string.
    InvalidEvent(String),
    /// Error returned when the request body is not valid JSON.
    Decode(serde_json::Error),
    /// Error returned when a base64-encoded request body fails to decode.
    Base64(base64::DecodeError),
    /// Error returned when the request body is valid JSON but not an object.
    InvalidBody(String),
    /// Error returned when an operand is present but cannot be converted to a
    /// floating-point number.
    Conversion(String),
    /// Error returned when serde_json failed to serialize the response.
    SerdeJson(serde_json::Error),
}

impl From<base64::DecodeError> for SubtractError {
    fn from(e: base64::DecodeError) -> Self {
        SubtractError::Base64(e)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for SubtractError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        SubtractError::LambdaError(e)
    }
}

impl Display for SubtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            SubtractError::LambdaError(ref desc) => write!(f, "Lambda error: {}", desc),
            SubtractError::InvalidEvent(ref desc) => write!(f, "Invalid event: {}", desc),
            SubtractError::Decode(ref desc) => {
                write!(f, "Request body is not valid JSON: {}", desc)
            }
            SubtractError::Base64(ref desc) => {
                write!(f, "Request body is not valid base64: {}", desc)
            }
            SubtractError::InvalidBody(ref desc) => {
                write!(f, "Request body must be a JSON object: {}", desc)
            }
            SubtractError::Conversion(ref desc) => write!(f, "Conversion error: {}", desc),
            SubtractError::SerdeJson(ref desc) => write!(f, "Serde json error: {}", desc),
        }
    }
}

impl error::Error for SubtractError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SubtractError::Decode(e) | SubtractError::SerdeJson(e) => Some(e),
            SubtractError::Base64(e) => Some(e),
            _ => None,
        }
    }
}
