//! Node description: the typed parameter schema of every operation.
//!
//! Parameters are keyed by [`Selection`], so each (resource, operation) pair
//! owns exactly the descriptors it reads. Numeric bounds are hints for the
//! host's input widgets; [`advisories`] reports violations without rejecting
//! anything.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::credentials::CREDENTIAL_NAME;
use crate::models::{FileType, Operation, Provider, PublicationField, Resource, Selection, UseLlm};

/// One selectable value of an options parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionValue {
    /// Label shown to users.
    pub name: &'static str,
    /// Value the host resolves.
    pub value: &'static str,
    /// Help text shown under the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl OptionValue {
    /// An option with a label and a value.
    #[must_use]
    pub const fn new(name: &'static str, value: &'static str) -> Self {
        Self { name, value, description: None }
    }

    /// An option with help text.
    #[must_use]
    pub const fn described(name: &'static str, value: &'static str, description: &'static str) -> Self {
        Self { name, value, description: Some(description) }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Value type and constraints of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ParameterKind {
    /// Free text.
    String {
        /// Initial value.
        default: &'static str,
        /// Masked in the host UI.
        #[serde(skip_serializing_if = "is_false")]
        password: bool,
    },
    /// A number with optional advisory bounds.
    Number {
        /// Initial value.
        default: i64,
        /// Lowest suggested value.
        #[serde(skip_serializing_if = "Option::is_none")]
        min_value: Option<i64>,
        /// Highest suggested value.
        #[serde(skip_serializing_if = "Option::is_none")]
        max_value: Option<i64>,
    },
    /// One value out of a fixed list.
    Options {
        /// Selectable values.
        options: Vec<OptionValue>,
        /// Preselected value.
        default: &'static str,
    },
    /// Any number of values out of a fixed list.
    MultiOptions {
        /// Selectable values.
        options: Vec<OptionValue>,
        /// Preselected values.
        default: Vec<&'static str>,
    },
    /// A group of optional parameters added one by one.
    Collection {
        /// Parameters the group offers.
        options: Vec<ParameterDescriptor>,
    },
}

/// A typed parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Label shown to users.
    pub display_name: &'static str,
    /// Key the host resolves the value under.
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: ParameterKind,
    /// Must be set before the item is sent.
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl ParameterDescriptor {
    fn new(name: &'static str, display_name: &'static str, kind: ParameterKind) -> Self {
        Self { display_name, name, kind, required: false, description: None, placeholder: None }
    }

    /// Free-text parameter, default empty.
    #[must_use]
    pub fn string(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, ParameterKind::String { default: "", password: false })
    }

    /// Secret text parameter, default empty.
    #[must_use]
    pub fn password(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, ParameterKind::String { default: "", password: true })
    }

    /// Integer parameter.
    #[must_use]
    pub fn number(name: &'static str, display_name: &'static str, default: i64) -> Self {
        Self::new(
            name,
            display_name,
            ParameterKind::Number { default, min_value: None, max_value: None },
        )
    }

    /// Single-choice parameter.
    #[must_use]
    pub fn options(
        name: &'static str,
        display_name: &'static str,
        options: Vec<OptionValue>,
        default: &'static str,
    ) -> Self {
        Self::new(name, display_name, ParameterKind::Options { options, default })
    }

    /// Multi-choice parameter.
    #[must_use]
    pub fn multi_options(
        name: &'static str,
        display_name: &'static str,
        options: Vec<OptionValue>,
        default: Vec<&'static str>,
    ) -> Self {
        Self::new(name, display_name, ParameterKind::MultiOptions { options, default })
    }

    /// Group of optional parameters added on demand.
    #[must_use]
    pub fn collection(
        name: &'static str,
        display_name: &'static str,
        options: Vec<Self>,
    ) -> Self {
        Self::new(name, display_name, ParameterKind::Collection { options })
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the lower bound of a number parameter.
    #[must_use]
    pub fn min(mut self, bound: i64) -> Self {
        if let ParameterKind::Number { min_value, .. } = &mut self.kind {
            *min_value = Some(bound);
        }
        self
    }

    /// Set the upper bound of a number parameter.
    #[must_use]
    pub fn max(mut self, bound: i64) -> Self {
        if let ParameterKind::Number { max_value, .. } = &mut self.kind {
            *max_value = Some(bound);
        }
        self
    }

    /// Describe how `value` breaks this parameter's bounds, if it does.
    #[must_use]
    pub fn advisory(&self, value: &Value) -> Option<String> {
        let ParameterKind::Number { min_value, max_value, .. } = self.kind else {
            return None;
        };

        if let Some(min) = min_value {
            if compare_to_bound(value, min)? == Ordering::Less {
                return Some(format!("{} = {} is below the minimum of {}", self.name, value, min));
            }
        }
        if let Some(max) = max_value {
            if compare_to_bound(value, max)? == Ordering::Greater {
                return Some(format!("{} = {} is above the maximum of {}", self.name, value, max));
            }
        }
        None
    }
}

/// Order a JSON number against an integer bound. `None` for non-numbers.
#[allow(clippy::cast_precision_loss)] // bounds are years and counts, exact in an f64
fn compare_to_bound(value: &Value, bound: i64) -> Option<Ordering> {
    if let Some(integer) = value.as_i64() {
        return Some(integer.cmp(&bound));
    }
    value.as_f64()?.partial_cmp(&(bound as f64))
}

fn provider_options() -> Vec<OptionValue> {
    Provider::ALL.iter().map(|p| OptionValue::new(p.label(), p.value())).collect()
}

fn field_options() -> Vec<OptionValue> {
    PublicationField::ALL.iter().map(|f| OptionValue::new(f.label(), f.value())).collect()
}

fn publication_fields() -> ParameterDescriptor {
    ParameterDescriptor::multi_options("fields", "Fields", field_options(), vec![])
        .describe("Fields to include in the response")
}

/// Parameters read for a selection, in display order.
#[must_use]
pub fn parameters_for(selection: Selection) -> Vec<ParameterDescriptor> {
    match selection {
        Selection::AcademicSearch => vec![
            ParameterDescriptor::string("query", "Query")
                .required()
                .describe("Search query for academic publications"),
            ParameterDescriptor::multi_options(
                "providers",
                "Providers",
                provider_options(),
                vec![Provider::SemanticScholar.value()],
            )
            .describe("Database providers to search"),
            ParameterDescriptor::number("limit", "Limit", 50)
                .min(1)
                .describe("Max number of results to return"),
            ParameterDescriptor::number("offset", "Offset", 0)
                .min(0)
                .describe("Number of results to skip per provider"),
            ParameterDescriptor::number("yearFrom", "Year From", 1900)
                .min(1900)
                .describe("Filter results published after this year (inclusive)"),
            ParameterDescriptor::number("yearTo", "Year To", 2050)
                .max(2100)
                .describe("Filter results published before this year (inclusive)"),
            ParameterDescriptor::collection(
                "additionalFields",
                "Additional Fields",
                vec![publication_fields()],
            )
            .with_placeholder("Add Field"),
        ],
        Selection::AcademicFetch => vec![
            ParameterDescriptor::string("ids", "IDs")
                .required()
                .describe(
                    "Publication IDs (DOI, PubMed ID, ArXiv ID, etc.). Separate multiple IDs with commas.",
                )
                .with_placeholder("10.1038/nature12373, PMC3883140, arXiv:1234.5678"),
            publication_fields(),
        ],
        Selection::DocumentParse => vec![
            ParameterDescriptor::string("url", "Document URL")
                .required()
                .describe("URL of the document to parse"),
            ParameterDescriptor::options(
                "useLLM",
                "Use LLM",
                UseLlm::ALL
                    .iter()
                    .map(|s| OptionValue::described(s.label(), s.value(), s.description()))
                    .collect(),
                UseLlm::default().value(),
            )
            .describe("Determines LLM parsing approach"),
        ],
        Selection::DocumentUpload => vec![
            ParameterDescriptor::options(
                "fileType",
                "File Type",
                FileType::ALL.iter().map(|t| OptionValue::new(t.label(), t.value())).collect(),
                FileType::default().value(),
            )
            .required()
            .describe("Type of file to upload"),
        ],
        Selection::KeyValidate => vec![],
    }
}

/// Bound violations in an item's parameters. Never blocks a request.
#[must_use]
pub fn advisories(selection: Selection, parameters: &Map<String, Value>) -> Vec<String> {
    parameters_for(selection)
        .iter()
        .filter_map(|descriptor| {
            let value = parameters.get(descriptor.name)?;
            descriptor.advisory(value)
        })
        .collect()
}

/// One operation as listed under its resource.
#[derive(Debug, Clone, Serialize)]
pub struct OperationDescription {
    /// Label shown to users.
    pub name: &'static str,
    /// Operation the host resolves.
    pub value: Operation,
    /// One-line summary.
    pub description: &'static str,
    /// Action text shown in the host's node picker.
    pub action: &'static str,
    /// Parameters the operation reads, in display order.
    pub parameters: Vec<ParameterDescriptor>,
}

impl OperationDescription {
    fn for_selection(selection: Selection) -> Self {
        let (name, description, action) = match selection {
            Selection::AcademicSearch => {
                ("Search", "Search academic publications", "Search academic publications")
            }
            Selection::AcademicFetch => {
                ("Fetch", "Fetch a specific publication", "Fetch a specific publication")
            }
            Selection::DocumentParse => {
                ("Parse", "Parse a PDF or Word document", "Parse a document")
            }
            Selection::DocumentUpload => {
                ("Upload", "Get a temporary upload URL", "Get temporary upload URL")
            }
            Selection::KeyValidate => ("Validate", "Validate API key", "Validate API key"),
        };

        Self {
            name,
            value: selection.operation(),
            description,
            action,
            parameters: parameters_for(selection),
        }
    }
}

/// A resource with its operations.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceDescription {
    /// Label shown to users.
    pub name: &'static str,
    /// Resource the host resolves.
    pub value: Resource,
    /// Operation preselected for this resource.
    pub default: Operation,
    /// Operations of this resource.
    pub operations: Vec<OperationDescription>,
}

/// Credential the node needs.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialRequirement {
    /// Credential type name.
    pub name: &'static str,
    /// Whether the node refuses to run without it.
    pub required: bool,
}

/// Full node description rendered by the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    /// Name shown in the host UI.
    pub display_name: &'static str,
    /// Internal node name.
    pub name: &'static str,
    /// Icon reference.
    pub icon: &'static str,
    /// Node groups in the host palette.
    pub group: Vec<&'static str>,
    /// Node version.
    pub version: u32,
    /// Subtitle template built from the selected operation and resource.
    pub subtitle: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Credentials the node needs.
    pub credentials: Vec<CredentialRequirement>,
    /// Resources and their operations.
    pub resources: Vec<ResourceDescription>,
}

impl NodeDescription {
    /// Operations of a resource.
    #[must_use]
    pub fn resource(&self, resource: Resource) -> Option<&ResourceDescription> {
        self.resources.iter().find(|r| r.value == resource)
    }
}

/// Describe the PDFVector node.
#[must_use]
pub fn describe() -> NodeDescription {
    let resources = Resource::ALL
        .iter()
        .map(|&resource| ResourceDescription {
            name: resource.label(),
            value: resource,
            default: resource.default_operation(),
            operations: Selection::ALL
                .iter()
                .filter(|selection| selection.resource() == resource)
                .map(|&selection| OperationDescription::for_selection(selection))
                .collect(),
        })
        .collect();

    NodeDescription {
        display_name: "PDFVector",
        name: "pdfVector",
        icon: "file:icon.svg",
        group: vec!["transform"],
        version: 1,
        subtitle: "={{$parameter[\"operation\"] + \": \" + $parameter[\"resource\"]}}",
        description: "Interact with PDFVector API for academic search and document parsing",
        credentials: vec![CredentialRequirement { name: CREDENTIAL_NAME, required: true }],
        resources,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_number_serializes_bounds() {
        let limit = ParameterDescriptor::number("limit", "Limit", 50).min(1);
        let json = serde_json::to_value(&limit).unwrap();
        assert_eq!(json["type"], "number");
        assert_eq!(json["default"], 50);
        assert_eq!(json["minValue"], 1);
        assert!(json.get("maxValue").is_none());
        assert!(json.get("required").is_none());
    }

    #[test]
    fn test_bounds_ignored_for_non_numbers() {
        let query = ParameterDescriptor::string("query", "Query").min(1);
        assert_eq!(query.kind, ParameterKind::String { default: "", password: false });
        assert_eq!(query.advisory(&json!(-5)), None);
    }

    #[test]
    fn test_advisory_messages() {
        let year_to = ParameterDescriptor::number("yearTo", "Year To", 2050).max(2100);
        assert_eq!(year_to.advisory(&json!(2050)), None);
        assert!(year_to.advisory(&json!(2200)).unwrap().contains("maximum of 2100"));
        assert_eq!(year_to.advisory(&json!("2200")), None);
    }

    #[test]
    fn test_advisory_on_fractional_values() {
        let limit = ParameterDescriptor::number("limit", "Limit", 50).min(1);
        assert_eq!(limit.advisory(&json!(10.5)), None);
        assert_eq!(limit.advisory(&json!(1.0)), None);
        assert!(limit.advisory(&json!(0.5)).unwrap().contains("limit = 0.5 is below"));

        let year_to = ParameterDescriptor::number("yearTo", "Year To", 2050).max(2100);
        assert!(year_to.advisory(&json!(2100.5)).unwrap().contains("above the maximum"));
        assert_eq!(year_to.advisory(&json!(u64::MAX)).map(|m| m.contains("above")), Some(true));
    }

    #[test]
    fn test_collection_nests_fields() {
        let params = parameters_for(Selection::AcademicSearch);
        let additional = params.iter().find(|p| p.name == "additionalFields").unwrap();
        let json = serde_json::to_value(additional).unwrap();
        assert_eq!(json["type"], "collection");
        assert_eq!(json["placeholder"], "Add Field");
        assert_eq!(json["options"][0]["name"], "fields");
        assert_eq!(json["options"][0]["type"], "multiOptions");
    }
}
