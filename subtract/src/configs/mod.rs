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

//! This module provides the default configurations for the subtract function.

mod subtract;
pub use self::subtract::SUBTRACT_CONF;
use lazy_static::lazy_static;

/// Response header carrying the media type of the body.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
/// CORS response header listing the origins allowed to read the response.
pub const ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
/// CORS response header listing the methods allowed on the endpoint.
pub const ALLOW_METHODS_HEADER: &str = "Access-Control-Allow-Methods";
/// CORS response header listing the request headers the endpoint accepts.
pub const ALLOW_HEADERS_HEADER: &str = "Access-Control-Allow-Headers";

lazy_static! {
    /// Operation name reported in every success body.
    pub static ref SUBTRACT_OPERATION: String = SUBTRACT_CONF["function"]["operation"].to_string();
    /// Body assumed when the event has no `body` field.
    pub static ref SUBTRACT_DEFAULT_BODY: String = SUBTRACT_CONF["function"]["default_body"].to_string();

    /// Media type of every response body.
    pub static ref SUBTRACT_CONTENT_TYPE: String = SUBTRACT_CONF["response"]["content_type"].to_string();
    /// Status code of a successful subtraction.
    pub static ref SUBTRACT_SUCCESS_STATUS: u16 = SUBTRACT_CONF["response"]["success_status"].parse::<u16>().unwrap();
    /// Status code of a failed request.
    pub static ref SUBTRACT_ERROR_STATUS: u16 = SUBTRACT_CONF["response"]["error_status"].parse::<u16>().unwrap();

    /// Allowed CORS origin.
    pub static ref SUBTRACT_CORS_ALLOW_ORIGIN: String = SUBTRACT_CONF["cors"]["allow_origin"].to_string();
    /// Allowed CORS methods.
    pub static ref SUBTRACT_CORS_ALLOW_METHODS: String = SUBTRACT_CONF["cors"]["allow_methods"].to_string();
    /// Allowed CORS request headers.
    pub static ref SUBTRACT_CORS_ALLOW_HEADERS: String = SUBTRACT_CONF["cors"]["allow_headers"].to_string();
}
