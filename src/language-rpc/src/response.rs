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

//! A decoded response together with the HTTP metadata that came with it.

/// The response to a successful RPC.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    pub fn new() -> Self {
        Parts::default()
    }

    pub fn set_status(mut self, v: http::StatusCode) -> Self {
        self.status = v;
        self
    }

    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parts() {
        let response = Response::from_parts(Parts::default(), "abc".to_string());
        assert_eq!(response.status(), http::StatusCode::OK);
        assert!(response.headers().is_empty());
        assert_eq!(response.into_body(), "abc");
    }

    #[test]
    fn parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-test", http::HeaderValue::from_static("v"));
        let parts = Parts::new()
            .set_status(http::StatusCode::NO_CONTENT)
            .set_headers(headers.clone());
        let response = Response::from_parts(parts, 42);
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.into_body(), 42);
    }
}
