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

use crate::model::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The exit code when the program completes successfully.
pub const EXIT_SUCCESS: u8 = 0;

/// The exit code when the service returns an error status.
///
/// This is `-1` truncated to the 8 bits available for a process exit status.
pub const EXIT_SERVICE_ERROR: u8 = 255;

/// The exit code for any other failure.
pub const EXIT_FAILURE: u8 = 1;

/// The error returned by [RpcClient][crate::client::RpcClient] and
/// [RequestRunner][crate::runner::RequestRunner].
///
/// A call fails in one of four ways: the request cannot be serialized, the
/// transport cannot complete the request (including timeouts), the response
/// cannot be deserialized, or the service returns an error status. This type
/// offers a predicate for each case, and accessors for the service status and
/// the HTTP metadata that came with it.
///
/// # Example
/// ```
/// use language_rpc::error::Error;
/// use language_rpc::model::Status;
/// let status = Status::default().set_code(5).set_message("NOT FOUND");
/// let error = Error::service_with_http_metadata(status.clone(), Some(404), None);
/// assert_eq!(error.status(), Some(&status));
/// assert!(!error.is_transport());
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the status returned by the service, and the
    /// HTTP status code and headers of the response that carried it.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error. The request was not
    /// sent.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response, or the error status in a non-200 response, could not be
    /// deserialized.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is an endpoint that is not a `$rpc` endpoint, for
    /// example a proxy, which returns JSON or HTML instead of protobuf.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport(TransportKind::Timeout),
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before the configured timeout.
    ///
    /// Timeouts are transport errors, [is_transport][Error::is_transport] also
    /// returns `true`.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(TransportKind::Timeout))
    }

    /// Creates an error representing an I/O problem, such as a refused
    /// connection or a failure reading the response body.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport(TransportKind::Io),
            source: Some(source.into()),
        }
    }

    /// The HTTP call did not complete.
    ///
    /// # Troubleshooting
    ///
    /// Check the endpoint URL and network connectivity. The request may or
    /// may not have reached the service.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// The status returned by the service, if this is a service error.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The HTTP status code of the response that carried the service error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The HTTP headers of the response that carried the service error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match &self.kind {
            ErrorKind::Service(_) => EXIT_SERVICE_ERROR,
            _ => EXIT_FAILURE,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Transport(TransportKind::Timeout), Some(e)) => {
                write!(f, "the request exceeded the configured timeout {e}")
            }
            (ErrorKind::Transport(TransportKind::Io), Some(e)) => {
                write!(f, "the transport reports an error: {e}")
            }
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Transport(TransportKind),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
enum TransportKind {
    Io,
    Timeout,
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}
