//! Data models for node selection, parameters, request bodies and items.
//!
//! All wire-facing models use `#[serde(rename_all = "camelCase")]` to match
//! the names the host and the API use.

mod enums;
mod item;
mod params;
mod selection;

pub use enums::{FileType, Provider, PublicationField, UseLlm};
pub use item::{Batch, InputItem, OutputItem, PairedItem, records_from_response};
pub use params::{
    AcademicFetchParams, AcademicFetchRequest, AcademicSearchParams, AcademicSearchRequest,
    AdditionalFields, DocumentParseParams, DocumentUploadParams, ParseRequest, RequestParams,
    UploadRequest, split_ids,
};
pub use selection::{Operation, Resource, Selection};
