//! Per-item parameters and the request bodies built from them.
//!
//! Parameter structs mirror the names the host resolves (`yearFrom`,
//! `additionalFields`, `useLLM`, ...) and carry the node's defaults, so an item
//! that only sets `query` still produces a complete search body.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use super::{FileType, Provider, PublicationField, UseLlm};
use crate::error::{DispatchError, DispatchResult};

/// Parameters that turn into one request body.
pub trait RequestParams: DeserializeOwned {
    /// Body sent to the API.
    type Body: Serialize;

    /// Check required values and build the body.
    fn into_body(self) -> DispatchResult<Self::Body>;
}

/// Split a comma-separated id list, trimming pieces and dropping empty ones.
///
/// `"10.1/x, , PMC1"` becomes `["10.1/x", "PMC1"]`.
#[must_use]
pub fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|id| !id.is_empty()).map(String::from).collect()
}

fn require_non_empty(field: &str, value: &str) -> DispatchResult<()> {
    if value.trim().is_empty() {
        return Err(DispatchError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn default_providers() -> Vec<Provider> {
    vec![Provider::SemanticScholar]
}

fn default_limit() -> Number {
    Number::from(50)
}

fn default_offset() -> Number {
    Number::from(0)
}

fn default_year_from() -> Number {
    Number::from(1900)
}

fn default_year_to() -> Number {
    Number::from(2050)
}

/// Read a list where the host may send `null` for "nothing selected".
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Read the `ids` parameter as text.
///
/// Hosts hand over a bare PubMed id as a number, and some send a list of ids;
/// both are folded into the comma-separated form [`split_ids`] expects.
fn ids_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    fn piece<E: de::Error>(value: Value) -> Result<String, E> {
        match value {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(E::custom(format!("expected a string or number id, got {other}"))),
        }
    }

    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            let pieces = items.into_iter().map(piece).collect::<Result<Vec<_>, _>>()?;
            Ok(pieces.join(","))
        }
        other => piece(other),
    }
}

/// Optional extras of `academic/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFields {
    /// Fields to include in the response.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<PublicationField>,
}

/// Parameters of `academic/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSearchParams {
    /// Search query.
    #[serde(default)]
    pub query: String,

    /// Databases to search.
    #[serde(default = "default_providers")]
    pub providers: Vec<Provider>,

    /// Maximum number of results. Sent as given, fractional values included.
    #[serde(default = "default_limit")]
    pub limit: Number,

    /// Results to skip per provider.
    #[serde(default = "default_offset")]
    pub offset: Number,

    /// Earliest publication year (inclusive).
    #[serde(default = "default_year_from")]
    pub year_from: Number,

    /// Latest publication year (inclusive).
    #[serde(default = "default_year_to")]
    pub year_to: Number,

    /// Optional extras.
    #[serde(default)]
    pub additional_fields: AdditionalFields,
}

/// Body of `POST /academic-search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSearchRequest {
    pub query: String,
    pub providers: Vec<Provider>,
    pub limit: Number,
    pub offset: Number,
    pub year_from: Number,
    pub year_to: Number,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<PublicationField>,
}

impl RequestParams for AcademicSearchParams {
    type Body = AcademicSearchRequest;

    fn into_body(self) -> DispatchResult<Self::Body> {
        require_non_empty("query", &self.query)?;

        Ok(AcademicSearchRequest {
            query: self.query,
            providers: self.providers,
            limit: self.limit,
            offset: self.offset,
            year_from: self.year_from,
            year_to: self.year_to,
            fields: self.additional_fields.fields,
        })
    }
}

/// Parameters of `academic/fetch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicFetchParams {
    /// Comma-separated publication ids (DOI, PubMed ID, ArXiv ID, ...).
    #[serde(default, deserialize_with = "ids_as_text")]
    pub ids: String,

    /// Fields to include in the response.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<PublicationField>,
}

/// Body of `POST /academic-fetch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicFetchRequest {
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<PublicationField>,
}

impl RequestParams for AcademicFetchParams {
    type Body = AcademicFetchRequest;

    fn into_body(self) -> DispatchResult<Self::Body> {
        let ids = split_ids(&self.ids);
        if ids.is_empty() {
            return Err(DispatchError::validation("ids", "must contain at least one id"));
        }

        Ok(AcademicFetchRequest { ids, fields: self.fields })
    }
}

/// Parameters of `document/parse`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentParseParams {
    /// URL of the document to parse.
    #[serde(default)]
    pub url: String,

    /// LLM strategy.
    #[serde(default, rename = "useLLM")]
    pub use_llm: UseLlm,
}

/// Body of `POST /parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRequest {
    pub url: String,
    #[serde(rename = "useLLM")]
    pub use_llm: UseLlm,
}

impl RequestParams for DocumentParseParams {
    type Body = ParseRequest;

    fn into_body(self) -> DispatchResult<Self::Body> {
        require_non_empty("url", &self.url)?;
        Ok(ParseRequest { url: self.url, use_llm: self.use_llm })
    }
}

/// Parameters of `document/upload`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUploadParams {
    /// Type of file to upload.
    #[serde(default)]
    pub file_type: FileType,
}

/// Body of `POST /temporary-upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_type: FileType,
}

impl RequestParams for DocumentUploadParams {
    type Body = UploadRequest;

    fn into_body(self) -> DispatchResult<Self::Body> {
        Ok(UploadRequest { file_type: self.file_type })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_split_ids_examples() {
        assert_eq!(split_ids("10.1/x, , PMC1"), vec!["10.1/x", "PMC1"]);
        assert_eq!(split_ids(" a, b ,,c "), vec!["a", "b", "c"]);
        assert!(split_ids(" , ,").is_empty());
    }

    #[test]
    fn test_search_defaults() {
        let params: AcademicSearchParams =
            serde_json::from_value(json!({"query": "crispr"})).unwrap();
        assert_eq!(params.providers, vec![Provider::SemanticScholar]);
        assert_eq!(params.limit, Number::from(50));
        assert_eq!(params.offset, Number::from(0));
        assert_eq!(params.year_from, Number::from(1900));
        assert_eq!(params.year_to, Number::from(2050));
        assert!(params.additional_fields.fields.is_empty());
    }

    #[test]
    fn test_search_requires_query() {
        let params: AcademicSearchParams =
            serde_json::from_value(json!({"query": "   "})).unwrap();
        let err = params.into_body().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_fetch_requires_an_id() {
        let params = AcademicFetchParams { ids: " , ".to_string(), fields: vec![] };
        assert!(params.into_body().unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_requires_url() {
        let params = DocumentParseParams::default();
        assert!(params.into_body().unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_body_uses_llm_key() {
        let params: DocumentParseParams = serde_json::from_value(
            json!({"url": "https://example.com/a.pdf", "useLLM": "never"}),
        )
        .unwrap();
        let body = serde_json::to_value(params.into_body().unwrap()).unwrap();
        assert_eq!(body, json!({"url": "https://example.com/a.pdf", "useLLM": "never"}));
    }

    #[test]
    fn test_search_keeps_fractional_numbers() {
        let params: AcademicSearchParams =
            serde_json::from_value(json!({"query": "q", "limit": 10.5, "yearFrom": 2015.0}))
                .unwrap();
        let body = serde_json::to_value(params.into_body().unwrap()).unwrap();
        assert_eq!(body["limit"], json!(10.5));
        assert_eq!(body["yearFrom"], json!(2015.0));
        assert!(body["yearFrom"].is_f64());
    }

    #[test]
    fn test_null_field_lists_read_as_empty() {
        let search: AcademicSearchParams =
            serde_json::from_value(json!({"query": "q", "additionalFields": {"fields": null}}))
                .unwrap();
        assert!(search.additional_fields.fields.is_empty());

        let fetch: AcademicFetchParams =
            serde_json::from_value(json!({"ids": "PMC1", "fields": null})).unwrap();
        assert!(fetch.fields.is_empty());
        assert!(serde_json::to_value(fetch.into_body().unwrap()).unwrap().get("fields").is_none());
    }

    #[test]
    fn test_numeric_ids_are_accepted() {
        let fetch: AcademicFetchParams = serde_json::from_value(json!({"ids": 12345678})).unwrap();
        assert_eq!(fetch.into_body().unwrap().ids, vec!["12345678"]);

        let fetch: AcademicFetchParams =
            serde_json::from_value(json!({"ids": ["10.1/x", 42, " PMC1 "]})).unwrap();
        assert_eq!(fetch.into_body().unwrap().ids, vec!["10.1/x", "42", "PMC1"]);
    }

    #[test]
    fn test_ids_reject_objects() {
        let err = serde_json::from_value::<AcademicFetchParams>(json!({"ids": {"doi": "x"}}))
            .unwrap_err();
        assert!(err.to_string().contains("string or number id"));
    }
}
