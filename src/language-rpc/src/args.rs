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

use crate::options::{API_KEY_VAR, ClientConfig, DEFAULT_ENDPOINT};
use clap::Parser;
use humantime::parse_duration;
use std::time::Duration;

const DESCRIPTION: &str = concat!(
    "Analyzes the entities in a fixed sentence using the Cloud Natural Language API.",
    " The request and response are sent as binary protobuf messages over the",
    " `$rpc` HTTP endpoint."
);

/// Command line arguments for `analyze-entities`.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
pub struct Args {
    /// The API key sent in the `X-Goog-Api-Key` header.
    ///
    /// The key is not validated. An empty key is sent as an empty header.
    #[arg(long, env = API_KEY_VAR, default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// The scheme and host of the service.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Bounds the time to complete the request, e.g. `30s` or `1m`.
    ///
    /// By default there is no timeout.
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

impl Args {
    /// The client configuration for these arguments.
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::default()
            .set_endpoint(&self.endpoint)
            .set_api_key(&self.api_key);
        self.timeout
            .iter()
            .fold(config, |c, t| c.set_timeout(*t))
    }
}
