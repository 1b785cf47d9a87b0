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

//! Calls the Cloud Natural Language API using binary RPC-over-HTTP.
//!
//! The `analyze-entities` program in this crate sends a single
//! `google.cloud.language.v1.LanguageService/AnalyzeEntities` request,
//! serialized as a binary protobuf message, to the service `$rpc` endpoint.
//! Authentication uses an API key from the `GOOGLE_API_KEY` environment
//! variable.
//!
//! The library exposes the pieces used by the program, mostly to test them.
//!
//! # Example
//! ```no_run
//! use language_rpc::options::ClientConfig;
//! use language_rpc::runner::RequestRunner;
//! # async fn sample() -> language_rpc::error::Result<()> {
//! let config = ClientConfig::default().set_api_key("my-api-key");
//! let exchange = RequestRunner::new(config)?.run().await?;
//! for entity in exchange.response.entities {
//!     println!("{} {}", entity.name, entity.salience);
//! }
//! # Ok(()) }
//! ```

pub mod args;
pub mod client;
pub mod error;
pub mod model;
pub mod options;
pub mod response;
pub mod runner;
