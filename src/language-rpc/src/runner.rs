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

//! Runs a single `AnalyzeEntities` call and reports the outcome.

use crate::client::RpcClient;
use crate::error::{EXIT_SUCCESS, Result};
use crate::model::{
    ANALYZE_ENTITIES, AnalyzeEntitiesRequest, AnalyzeEntitiesResponse, Document, EncodingType,
    LANGUAGE_SERVICE, document,
};
use crate::options::ClientConfig;

/// The text analyzed by [RequestRunner::run].
pub const DOCUMENT_CONTENT: &str = "The rain in Spain stays mainly in the plain.";

/// Returns the request sent by [RequestRunner::run].
pub fn analyze_entities_request() -> AnalyzeEntitiesRequest {
    let mut request = AnalyzeEntitiesRequest::new()
        .set_document(Document::new(document::Type::PlainText, DOCUMENT_CONTENT));
    request.set_encoding_type(EncodingType::Utf8);
    request
}

/// The request sent and the response received in a successful run.
#[derive(Clone, Debug, PartialEq)]
pub struct Exchange {
    pub request: AnalyzeEntitiesRequest,
    pub response: AnalyzeEntitiesResponse,
}

#[derive(Clone, Debug)]
pub struct RequestRunner {
    client: RpcClient,
}

impl RequestRunner {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(RpcClient::new(config)?))
    }

    pub fn from_client(client: RpcClient) -> Self {
        Self { client }
    }

    /// Sends the fixed request and decodes the response.
    ///
    /// Returns an error if the service responds with anything other than
    /// `200 OK`. The error carries the decoded status in that case.
    pub async fn run(&self) -> Result<Exchange> {
        let request = analyze_entities_request();
        let response = self
            .client
            .execute::<_, AnalyzeEntitiesResponse>(LANGUAGE_SERVICE, ANALYZE_ENTITIES, &request)
            .await?
            .into_body();
        Ok(Exchange { request, response })
    }
}

/// Logs the outcome of [RequestRunner::run] and returns the process exit code.
pub fn report(result: &Result<Exchange>) -> u8 {
    let e = match result {
        Ok(exchange) => {
            tracing::info!("REQUEST: {:?}", exchange.request);
            tracing::info!("RESPONSE: {:?}", exchange.response);
            return EXIT_SUCCESS;
        }
        Err(e) => e,
    };
    match e.status() {
        Some(status) => tracing::error!(
            code = status.code,
            message = %status.message,
            http_status_code = ?e.http_status_code()
        ),
        None => tracing::error!("{e}"),
    }
    e.exit_code()
}
