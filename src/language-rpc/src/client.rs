// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A minimal client for Google Cloud `$rpc` endpoints.
//!
//! These endpoints accept a binary protobuf request in the body of a `POST`
//! request to `/$rpc/{service}/{method}`. Successful calls return the binary
//! protobuf response with a `200 OK` status. Any other status carries a
//! binary `google.rpc.Status` in the body.

use crate::error::{Error, Result};
use crate::model::Status;
use crate::options::ClientConfig;
use crate::response::{Parts, Response};
use http::HeaderValue;
use http::header::{CONTENT_TYPE, USER_AGENT};

/// The header used to send API keys.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// The content type for binary protobuf payloads.
pub const PROTOBUF_CONTENT_TYPE: &str = "application/x-protobuf";

#[derive(Clone, Debug)]
pub struct RpcClient {
    inner: reqwest::Client,
    endpoint: String,
    api_key: String,
    user_agent: String,
}

impl RpcClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();
        let builder = config
            .timeout
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let inner = builder.build().map_err(Error::io)?;
        let endpoint = config.effective_endpoint().to_string();
        Ok(Self {
            inner,
            endpoint,
            api_key: config.api_key,
            user_agent: config.user_agent,
        })
    }

    /// The URL for `method` in `service`.
    pub fn rpc_url(&self, service: &str, method: &str) -> String {
        format!("{}/$rpc/{service}/{method}", &self.endpoint)
    }

    #[tracing::instrument(level = "debug", skip(self, request))]
    pub async fn execute<I, O>(&self, service: &str, method: &str, request: &I) -> Result<Response<O>>
    where
        I: prost::Message,
        O: prost::Message + Default,
    {
        let body = encode(request)?;
        let api_key = header_value(API_KEY_HEADER, &self.api_key)?;
        let user_agent = header_value("user-agent", &self.user_agent)?;
        let response = self
            .inner
            .post(self.rpc_url(service, method))
            .header(API_KEY_HEADER, api_key)
            .header(USER_AGENT, user_agent)
            .header(CONTENT_TYPE, HeaderValue::from_static(PROTOBUF_CONTENT_TYPE))
            .body(body)
            .send()
            .await
            .map_err(Self::map_send_error)?;
        tracing::debug!(
            status = %response.status(),
            headers = ?response.headers(),
            "received response"
        );
        if response.status() != reqwest::StatusCode::OK {
            return self::to_rpc_error(response).await;
        }
        self::to_rpc_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum CodecError {
    #[error("invalid value for the {0} header")]
    InvalidHeader(&'static str, #[source] http::header::InvalidHeaderValue),
    #[error("cannot encode {0}")]
    Encode(&'static str, #[source] prost::EncodeError),
    #[error("cannot decode {0} from a {1} byte payload")]
    Decode(&'static str, usize, #[source] prost::DecodeError),
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::ser(CodecError::InvalidHeader(name, e)))
}

fn encode<I: prost::Message>(request: &I) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(request.encoded_len());
    request
        .encode(&mut buf)
        .map_err(|e| Error::ser(CodecError::Encode(std::any::type_name::<I>(), e)))?;
    Ok(buf)
}

fn decode<O: prost::Message + Default>(payload: &bytes::Bytes) -> Result<O> {
    O::decode(payload.as_ref()).map_err(|e| {
        Error::deser(CodecError::Decode(
            std::any::type_name::<O>(),
            payload.len(),
            e,
        ))
    })
}

async fn read_body(response: reqwest::Response) -> Result<(Parts, bytes::Bytes)> {
    let parts = Parts::new()
        .set_status(response.status())
        .set_headers(response.headers().clone());
    let body = response
        .bytes()
        .await
        .map_err(RpcClient::map_send_error)?;
    Ok((parts, body))
}

pub async fn to_rpc_error<O>(response: reqwest::Response) -> Result<O> {
    let (parts, body) = read_body(response).await?;
    let status = Status::try_from(&body).map_err(|e| {
        Error::deser(CodecError::Decode(
            std::any::type_name::<Status>(),
            body.len(),
            e,
        ))
    })?;
    Err(Error::service_with_http_metadata(
        status,
        Some(parts.status.as_u16()),
        Some(parts.headers),
    ))
}

async fn to_rpc_response<O: prost::Message + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let (parts, body) = read_body(response).await?;
    let response = decode::<O>(&body)?;
    Ok(Response::from_parts(parts, response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalyzeEntitiesResponse, Entity};
    use http::HeaderMap;
    use prost::Message;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn resp_from_status_content(
        code: reqwest::StatusCode,
        content: Vec<u8>,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", PROTOBUF_CONTENT_TYPE)
            .status(code)
            .body(content)?;
        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }

    #[test]
    fn rpc_url() -> TestResult {
        let client = RpcClient::new(ClientConfig::default())?;
        assert_eq!(
            client.rpc_url("google.cloud.language.v1.LanguageService", "AnalyzeEntities"),
            "https://language.googleapis.com/$rpc/google.cloud.language.v1.LanguageService/AnalyzeEntities"
        );

        let config = ClientConfig::default().set_endpoint("http://127.0.0.1:1234/");
        let client = RpcClient::new(config)?;
        assert_eq!(
            client.rpc_url("my.Service", "MyMethod"),
            "http://127.0.0.1:1234/$rpc/my.Service/MyMethod"
        );
        Ok(())
    }

    #[test]
    fn invalid_header() {
        let got = header_value(API_KEY_HEADER, "bad\nkey");
        let err = got.unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        assert!(err.to_string().contains(API_KEY_HEADER), "{err}");
    }

    #[test_case(""; "empty")]
    #[test_case("test-api-key"; "typical")]
    fn valid_header(input: &str) -> TestResult {
        let got = header_value(API_KEY_HEADER, input)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[tokio::test]
    async fn response_success() -> TestResult {
        let want = AnalyzeEntitiesResponse {
            entities: vec![Entity {
                name: "Spain".into(),
                ..Default::default()
            }],
            language: "en".into(),
        };
        let response = resp_from_status_content(reqwest::StatusCode::OK, want.encode_to_vec())?;
        let response = super::to_rpc_response::<AnalyzeEntitiesResponse>(response).await?;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static(PROTOBUF_CONTENT_TYPE));
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.into_body(), want);
        Ok(())
    }

    #[tokio::test]
    async fn response_empty_body() -> TestResult {
        let response = resp_from_status_content(reqwest::StatusCode::OK, Vec::new())?;
        let response = super::to_rpc_response::<AnalyzeEntitiesResponse>(response).await?;
        assert_eq!(response.into_body(), AnalyzeEntitiesResponse::default());
        Ok(())
    }

    #[tokio::test]
    async fn response_bad_body() -> TestResult {
        let response =
            resp_from_status_content(reqwest::StatusCode::OK, b"{\"error\": 1}".to_vec())?;
        let err = super::to_rpc_response::<AnalyzeEntitiesResponse>(response)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn error_with_status() -> TestResult {
        let want = Status::default()
            .set_code(3)
            .set_message("document content is required");
        let response =
            resp_from_status_content(reqwest::StatusCode::BAD_REQUEST, want.encode_to_vec())?;
        let err = super::to_rpc_error::<()>(response).await.unwrap_err();
        assert_eq!(err.status(), Some(&want));
        assert_eq!(err.http_status_code(), Some(400));
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static(PROTOBUF_CONTENT_TYPE));
        assert_eq!(err.http_headers(), Some(&headers));
        Ok(())
    }

    #[tokio::test]
    async fn error_with_bad_status() -> TestResult {
        let response = resp_from_status_content(
            reqwest::StatusCode::FORBIDDEN,
            b"<html>forbidden</html>".to_vec(),
        )?;
        let err = super::to_rpc_error::<()>(response).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert!(err.to_string().contains("Status"), "{err}");
        Ok(())
    }
}
