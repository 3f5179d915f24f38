//! Dispatch table: (resource, operation) → (body builder, endpoint, method).

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::{DispatchError, DispatchResult};
use crate::models::{
    AcademicFetchParams, AcademicSearchParams, DocumentParseParams, DocumentUploadParams,
    RequestParams, Selection,
};

/// Builds the request body from an item's resolved parameters.
pub type BodyBuilder = fn(&Map<String, Value>) -> DispatchResult<Option<Value>>;

/// Where and how one selection is sent.
#[derive(Debug, Clone)]
pub struct Route {
    /// HTTP method of the request.
    pub method: Method,
    /// Path under the API base URL.
    pub endpoint: &'static str,
    /// Turns an item's parameters into the request body.
    pub build: BodyBuilder,
}

/// Look up the route of a selection.
#[must_use]
pub fn route(selection: Selection) -> Route {
    match selection {
        Selection::AcademicSearch => Route {
            method: Method::POST,
            endpoint: "academic-search",
            build: json_body::<AcademicSearchParams>,
        },
        Selection::AcademicFetch => Route {
            method: Method::POST,
            endpoint: "academic-fetch",
            build: json_body::<AcademicFetchParams>,
        },
        Selection::DocumentParse => Route {
            method: Method::POST,
            endpoint: "parse",
            build: json_body::<DocumentParseParams>,
        },
        Selection::DocumentUpload => Route {
            method: Method::POST,
            endpoint: "temporary-upload",
            build: json_body::<DocumentUploadParams>,
        },
        Selection::KeyValidate => {
            Route { method: Method::GET, endpoint: "validate-key", build: no_body }
        }
    }
}

/// Build the request body for an item, as the route would send it.
///
/// # Errors
///
/// Returns a validation error when a parameter is missing, empty or malformed.
pub fn build_body(
    selection: Selection,
    parameters: &Map<String, Value>,
) -> DispatchResult<Option<Value>> {
    (route(selection).build)(parameters)
}

fn json_body<P: RequestParams>(parameters: &Map<String, Value>) -> DispatchResult<Option<Value>> {
    // Unset parameters arrive as null; treat them as absent so defaults apply.
    let resolved: Map<String, Value> = parameters
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    let params: P = match serde_json::from_value(Value::Object(resolved.clone())) {
        Ok(params) => params,
        Err(e) => {
            let field = failing_parameter::<P>(&resolved).unwrap_or("parameters");
            return Err(DispatchError::validation(field, e.to_string()));
        }
    };

    Ok(Some(serde_json::to_value(params.into_body()?)?))
}

/// Name the parameter that `P` cannot read.
///
/// Every parameter struct defaults its fields, so a map holding only one
/// parameter fails exactly when that parameter's value is malformed.
fn failing_parameter<P: RequestParams>(parameters: &Map<String, Value>) -> Option<&str> {
    parameters.iter().find_map(|(name, value)| {
        let single: Map<String, Value> =
            std::iter::once((name.clone(), value.clone())).collect();
        serde_json::from_value::<P>(Value::Object(single)).is_err().then_some(name.as_str())
    })
}

#[allow(clippy::unnecessary_wraps)]
fn no_body(_parameters: &Map<String, Value>) -> DispatchResult<Option<Value>> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_every_selection_has_a_route() {
        let endpoints: Vec<_> = Selection::ALL.iter().map(|&s| route(s).endpoint).collect();
        assert_eq!(
            endpoints,
            vec!["academic-search", "academic-fetch", "parse", "temporary-upload", "validate-key"]
        );
    }

    #[test]
    fn test_only_validate_is_get() {
        for selection in Selection::ALL {
            let expected =
                if selection == Selection::KeyValidate { Method::GET } else { Method::POST };
            assert_eq!(route(selection).method, expected);
        }
    }

    #[test]
    fn test_validate_has_no_body() {
        let body = build_body(Selection::KeyValidate, &params(json!({"query": "x"}))).unwrap();
        assert!(body.is_none());
    }

    #[test]
    fn test_null_parameters_fall_back_to_defaults() {
        let body = build_body(
            Selection::AcademicSearch,
            &params(json!({"query": "graphene", "limit": null, "providers": null})),
        )
        .unwrap()
        .unwrap();

        assert_eq!(body["limit"], 50);
        assert_eq!(body["providers"], json!(["semantic-scholar"]));
    }

    #[test]
    fn test_malformed_parameter_is_validation_error() {
        let err =
            build_body(Selection::DocumentUpload, &params(json!({"fileType": "txt"}))).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_malformed_parameter_is_named() {
        let err =
            build_body(Selection::DocumentUpload, &params(json!({"fileType": "txt"}))).unwrap_err();
        match err {
            DispatchError::Validation { field, message } => {
                assert_eq!(field, "fileType");
                assert!(message.contains("txt"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_parameter_is_named_among_valid_ones() {
        let err = build_body(
            Selection::AcademicSearch,
            &params(json!({"query": "q", "limit": 10, "providers": ["scopus"], "yearTo": 2000})),
        )
        .unwrap_err();
        assert!(err.to_user_message().starts_with("Invalid value for 'providers'"));
    }

    #[test]
    fn test_bounds_are_not_enforced() {
        let body = build_body(
            Selection::AcademicSearch,
            &params(json!({"query": "q", "limit": 0, "offset": -3, "yearFrom": 1800, "yearTo": 2500})),
        )
        .unwrap()
        .unwrap();

        assert_eq!(body["limit"], 0);
        assert_eq!(body["offset"], -3);
        assert_eq!(body["yearFrom"], 1800);
        assert_eq!(body["yearTo"], 2500);
    }
}
