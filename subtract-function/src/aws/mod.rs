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

//! The AWS Lambda adapter of the subtract function.

use lambda_runtime::LambdaEvent;
use log::info;
use serde_json::Value;
use subtract::prelude::*;

/// Handles one Lambda invocation.
///
/// The event is passed to [`handle`], which never fails: malformed requests
/// come back as 400 responses. An error is only returned to the runtime if the
/// response cannot be serialized.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Value> {
    info!("Request id: {}", event.context.request_id);

    let response = handle(&event.payload);
    info!("Response status: {}", response.status_code);

    serde_json::to_value(&response).map_err(SubtractError::SerdeJson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    async fn invoke(payload: Value) -> Result<Value> {
        handler(LambdaEvent {
            payload,
            context: Context::default(),
        })
        .await
    }

    #[tokio::test]
    async fn handler_handles() -> Result<()> {
        let output = invoke(json!({ "body": r#"{"a": 42, "b": 0.5}"# })).await?;

        assert_eq!(json!(200), output["statusCode"]);
        assert_eq!(json!("POST, OPTIONS"), output["headers"]["Access-Control-Allow-Methods"]);

        let body: Value = serde_json::from_str(output["body"].as_str().unwrap()).unwrap();
        assert_eq!(
            json!({"result": 41.5, "operation": "subtract", "a": 42.0, "b": 0.5}),
            body
        );
        Ok(())
    }

    #[tokio::test]
    async fn handler_answers_bad_requests() -> Result<()> {
        let output = invoke(json!({ "body": "not json" })).await?;

        assert_eq!(json!(400), output["statusCode"]);
        let headers = output["headers"].as_object().unwrap();
        assert_eq!(2, headers.len());
        assert!(headers.contains_key("Access-Control-Allow-Origin"));

        let body: Value = serde_json::from_str(output["body"].as_str().unwrap()).unwrap();
        assert!(body["error"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn handler_handles_api_gateway_events() -> Result<()> {
        let output = invoke(json!({
            "resource": "/subtract",
            "httpMethod": "POST",
            "requestContext": {"stage": "prod"},
            "isBase64Encoded": true,
            "body": "eyJhIjogMTAsICJiIjogNH0=",
        }))
        .await?;

        assert_eq!(json!(200), output["statusCode"]);
        let body: Value = serde_json::from_str(output["body"].as_str().unwrap()).unwrap();
        assert_eq!(json!(6.0), body["result"]);
        Ok(())
    }
}
