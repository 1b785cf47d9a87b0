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

//! Protobuf messages for the `AnalyzeEntities` RPC.
//!
//! These are a subset of the `google.cloud.language.v1` and `google.rpc`
//! packages. Only the fields used by this program, or needed to display a
//! useful response, are modelled. The decoder skips any other fields.

use prost::Message as _;

/// The fully qualified name of the service.
pub const LANGUAGE_SERVICE: &str = "google.cloud.language.v1.LanguageService";

/// The name of the entity analysis method.
pub const ANALYZE_ENTITIES: &str = "AnalyzeEntities";

/// Represents the input to API methods.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Document {
    /// Required. If the type is not set or is `TYPE_UNSPECIFIED`,
    /// returns an `INVALID_ARGUMENT` error.
    #[prost(enumeration = "document::Type", tag = "1")]
    pub r#type: i32,

    /// The language of the document. If unset the service auto-detects it.
    #[prost(string, tag = "4")]
    pub language: ::prost::alloc::string::String,

    /// The source of the document: a string containing the content or a
    /// Google Cloud Storage URI.
    #[prost(oneof = "document::Source", tags = "2, 3")]
    pub source: ::core::option::Option<document::Source>,
}

impl Document {
    /// Creates a new document with the given type and inline content.
    pub fn new<T: Into<String>>(r#type: document::Type, content: T) -> Self {
        Self {
            r#type: r#type as i32,
            language: String::new(),
            source: Some(document::Source::Content(content.into())),
        }
    }

    /// The inline content, if the document source is a string.
    pub fn content(&self) -> Option<&str> {
        match &self.source {
            Some(document::Source::Content(c)) => Some(c.as_str()),
            _ => None,
        }
    }

    /// The document type, `None` if the wire value is not a known type.
    pub fn document_type(&self) -> Option<document::Type> {
        document::Type::try_from(self.r#type).ok()
    }
}

/// Nested message and enum types in `Document`.
pub mod document {
    /// The document types enum.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        /// The content type is not specified.
        Unspecified = 0,
        /// Plain text
        PlainText = 1,
        /// HTML
        Html = 2,
    }

    /// The source of the document.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Source {
        /// The content of the input in string format.
        #[prost(string, tag = "2")]
        Content(::prost::alloc::string::String),
        /// The Google Cloud Storage URI where the file content is located.
        #[prost(string, tag = "3")]
        GcsContentUri(::prost::alloc::string::String),
    }
}

/// Represents the text encoding that the caller uses to process the output.
///
/// The service uses this to compute the offsets in [TextSpan].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EncodingType {
    /// If `EncodingType` is not specified, encoding-dependent information
    /// (such as `begin_offset`) will be set at `-1`.
    None = 0,
    Utf8 = 1,
    Utf16 = 2,
    Utf32 = 3,
}

/// The entity analysis request message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnalyzeEntitiesRequest {
    /// Required. Input document.
    #[prost(message, optional, tag = "1")]
    pub document: ::core::option::Option<Document>,

    /// The encoding type used by the API to calculate offsets.
    #[prost(enumeration = "EncodingType", tag = "2")]
    pub encoding_type: i32,
}

impl AnalyzeEntitiesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }
}

/// The entity analysis response message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnalyzeEntitiesResponse {
    /// The recognized entities in the input document.
    #[prost(message, repeated, tag = "1")]
    pub entities: ::prost::alloc::vec::Vec<Entity>,

    /// The language of the text, which will be the same as the language
    /// specified in the request or, if not specified, the automatically
    /// detected language.
    #[prost(string, tag = "2")]
    pub language: ::prost::alloc::string::String,
}

/// Represents a phrase in the text that is a known entity, such as a person,
/// an organization, or location.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Entity {
    /// The representative name for the entity.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,

    /// The entity type.
    #[prost(enumeration = "entity::Type", tag = "2")]
    pub r#type: i32,

    /// Metadata associated with the entity, such as `wikipedia_url` and
    /// `mid`, if available.
    #[prost(map = "string, string", tag = "3")]
    pub metadata:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,

    /// The salience score associated with the entity in the [0, 1.0] range.
    #[prost(float, tag = "4")]
    pub salience: f32,

    /// The mentions of this entity in the input document.
    #[prost(message, repeated, tag = "5")]
    pub mentions: ::prost::alloc::vec::Vec<EntityMention>,
}

/// Nested message and enum types in `Entity`.
pub mod entity {
    /// The type of the entity.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Unknown = 0,
        Person = 1,
        Location = 2,
        Organization = 3,
        Event = 4,
        WorkOfArt = 5,
        ConsumerGood = 6,
        Other = 7,
        PhoneNumber = 9,
        Address = 10,
        Date = 11,
        Number = 12,
        Price = 13,
    }
}

/// Represents a mention for an entity in the text.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntityMention {
    /// The mention text.
    #[prost(message, optional, tag = "1")]
    pub text: ::core::option::Option<TextSpan>,

    /// The type of the entity mention.
    #[prost(enumeration = "entity_mention::Type", tag = "2")]
    pub r#type: i32,
}

/// Nested message and enum types in `EntityMention`.
pub mod entity_mention {
    /// The supported types of mentions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Unknown = 0,
        /// Proper name
        Proper = 1,
        /// Common noun (or noun compound)
        Common = 2,
    }
}

/// Represents an output piece of text.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextSpan {
    /// The content of the output text.
    #[prost(string, tag = "1")]
    pub content: ::prost::alloc::string::String,

    /// The API calculates the beginning offset of the content in the original
    /// document according to the [EncodingType] specified in the request.
    #[prost(int32, tag = "2")]
    pub begin_offset: i32,
}

/// The `Status` type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs.
///
/// Services using the `$rpc` endpoints return this message, in binary
/// protobuf format, as the body of any non-200 response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    /// The status code, which should be an enum value of `google.rpc.Code`.
    #[prost(int32, tag = "1")]
    pub code: i32,

    /// A developer-facing error message, which should be in English.
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,

    /// A list of messages that carry the error details.
    #[prost(message, repeated, tag = "3")]
    pub details: ::prost::alloc::vec::Vec<::prost_types::Any>,
}

impl Status {
    pub fn set_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = prost::DecodeError;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        Self::decode(value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use test_case::test_case;

    #[test]
    fn document_accessors() {
        let doc = Document::new(document::Type::PlainText, "abc");
        assert_eq!(doc.content(), Some("abc"));
        assert_eq!(doc.document_type(), Some(document::Type::PlainText));

        let doc = Document {
            r#type: 42,
            source: Some(document::Source::GcsContentUri("gs://b/o".into())),
            ..Default::default()
        };
        assert_eq!(doc.content(), None);
        assert_eq!(doc.document_type(), None);
    }

    #[test_case(document::Type::Unspecified, 0)]
    #[test_case(document::Type::PlainText, 1)]
    #[test_case(document::Type::Html, 2)]
    fn document_type_wire_values(input: document::Type, want: i32) {
        assert_eq!(input as i32, want);
        assert_eq!(document::Type::try_from(want), Ok(input));
    }

    #[test]
    fn request_wire_format() {
        let mut request = AnalyzeEntitiesRequest::new()
            .set_document(Document::new(document::Type::Html, "<b>x</b>"));
        request.set_encoding_type(EncodingType::Utf8);
        assert_eq!(request.encoding_type(), EncodingType::Utf8);
        let got = request.encode_to_vec();
        // field 1 (document, len 12) { field 1 (type) = 2, field 2 (content) = "<b>x</b>" }
        // field 2 (encoding_type) = 1
        let want = [
            0x0a, 12, 0x08, 2, 0x12, 8, b'<', b'b', b'>', b'x', b'<', b'/', b'b', b'>', 0x10, 1,
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn response_ignores_unknown_fields() -> anyhow::Result<()> {
        let want = AnalyzeEntitiesResponse {
            entities: vec![Entity {
                name: "Spain".into(),
                r#type: entity::Type::Location as i32,
                salience: 0.5,
                ..Default::default()
            }],
            language: "en".into(),
        };
        let mut encoded = want.encode_to_vec();
        // field 99, varint 7
        encoded.extend_from_slice(&[0x98, 0x06, 7]);
        let got = AnalyzeEntitiesResponse::decode(encoded.as_slice())?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn status_from_bytes() -> anyhow::Result<()> {
        let want = Status {
            code: 7,
            message: "permission denied".into(),
            details: vec![::prost_types::Any {
                type_url: "type.googleapis.com/google.rpc.ErrorInfo".into(),
                value: vec![0x0a, 3, b'a', b'b', b'c'],
            }],
        };
        let payload = bytes::Bytes::from(want.encode_to_vec());
        let got = Status::try_from(&payload)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn status_from_bad_bytes() {
        // field 2 claims 16 bytes but the payload ends early.
        let payload = bytes::Bytes::from_static(&[0x12, 16, b'a']);
        let got = Status::try_from(&payload);
        assert!(got.is_err(), "{got:?}");
    }
}
