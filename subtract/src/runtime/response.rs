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

//! The response handed back to the platform, in the shape API Gateway's proxy
//! integration expects: a status code, a flat header map, and a JSON-encoded
//! body.

use crate::configs::*;
use crate::error::{Result, SubtractError};
use crate::runtime::request::Operands;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The response of a single invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers:     HashMap<String, String>,
    /// JSON-encoded response body.
    pub body:        String,
}

/// The body of a successful subtraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessBody {
    /// `a - b`.
    pub result:    f64,
    /// Always `subtract`.
    pub operation: String,
    /// The minuend as it was coerced.
    pub a:         f64,
    /// The subtrahend as it was coerced.
    pub b:         f64,
}

/// The body of a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Description of the failure.
    pub error: String,
}

impl SuccessBody {
    /// Builds the body reporting the subtraction of `operands`.
    pub fn new(operands: &Operands) -> Self {
        Self {
            result:    operands.difference(),
            operation: SUBTRACT_OPERATION.clone(),
            a:         operands.a,
            b:         operands.b,
        }
    }
}

impl Response {
    /// Returns the 200 response carrying the subtraction result, along with
    /// the full set of CORS headers.
    pub fn success(operands: &Operands) -> Result<Response> {
        let body = serde_json::to_string(&SuccessBody::new(operands))
            .map_err(SubtractError::SerdeJson)?;

        let mut headers = Self::common_headers();
        headers.insert(
            ALLOW_METHODS_HEADER.to_owned(),
            SUBTRACT_CORS_ALLOW_METHODS.clone(),
        );
        headers.insert(
            ALLOW_HEADERS_HEADER.to_owned(),
            SUBTRACT_CORS_ALLOW_HEADERS.clone(),
        );

        Ok(Response {
            status_code: *SUBTRACT_SUCCESS_STATUS,
            headers,
            body,
        })
    }

    /// Returns the 400 response describing `err`. Only the content type and
    /// the allowed origin are set.
    pub fn error(err: &SubtractError) -> Response {
        let error = err.to_string();
        // A struct with a single string field always serializes.
        let body = serde_json::to_string(&ErrorBody {
            error: error.clone(),
        })
        .unwrap_or_else(|_| serde_json::json!({ "error": error }).to_string());

        Response {
            status_code: *SUBTRACT_ERROR_STATUS,
            headers: Self::common_headers(),
            body,
        }
    }

    fn common_headers() -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            CONTENT_TYPE_HEADER.to_owned(),
            SUBTRACT_CONTENT_TYPE.clone(),
        );
        headers.insert(
            ALLOW_ORIGIN_HEADER.to_owned(),
            SUBTRACT_CORS_ALLOW_ORIGIN.clone(),
        );
        headers
    }
}
