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

use std::time::Duration;

/// The default endpoint for the Cloud Natural Language API.
pub const DEFAULT_ENDPOINT: &str = "https://language.googleapis.com";

/// The user agent sent with each request.
pub const DEFAULT_USER_AGENT: &str = "myapp/0.1";

/// The environment variable holding the API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// The client configuration for [crate::client::RpcClient].
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Overrides the scheme and host, if set.
    pub endpoint: Option<String>,
    /// Sent verbatim in the `X-Goog-Api-Key` header, it may be empty.
    pub api_key: String,
    pub user_agent: String,
    /// No timeout applies if `None`.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    pub fn set_api_key<T: Into<String>>(mut self, v: T) -> Self {
        self.api_key = v.into();
        self
    }

    pub fn set_timeout(mut self, v: Duration) -> Self {
        self.timeout = Some(v);
        self
    }

    pub(crate) fn effective_endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT)
            .trim_end_matches('/')
    }
}

impl std::default::Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}
