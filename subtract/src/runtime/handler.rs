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

//! The request handler. Every failure is caught here and turned into an
//! error response, so callers always get a well-formed [`Response`].

use crate::error::Result;
use crate::runtime::request::Request;
use crate::runtime::response::Response;
use log::{debug, warn};
use serde_json::Value;

/// Subtracts the operands carried by `event` and returns the response to
/// hand back to the platform.
pub fn handle(event: &Value) -> Response {
    match try_handle(event) {
        Ok(response) => response,
        Err(e) => {
            warn!("Failed to handle the request: {}", e);
            Response::error(&e)
        }
    }
}

fn try_handle(event: &Value) -> Result<Response> {
    let operands = Request::try_from_event(event)?.operands()?;
    debug!(
        "{} - {} = {}",
        operands.a,
        operands.b,
        operands.difference()
    );
    Response::success(&operands)
}
