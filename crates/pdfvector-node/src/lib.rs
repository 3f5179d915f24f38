//! PDFVector workflow node
//!
//! Exposes the PDFVector API (academic search, publication fetch, document
//! parsing, temporary uploads, key validation) as discrete operations over
//! batches of host items.
//!
//! # Features
//!
//! - **Typed schema**: every (resource, operation) pair declares its parameters
//! - **Dispatch table**: each pair maps to one body builder, endpoint and method
//! - **Error isolation**: per-item failures can be recorded instead of aborting
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pdfvector_node::{Config, Dispatcher, PdfVectorClient};
//! use pdfvector_node::models::{Batch, InputItem, Resource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let dispatcher = Dispatcher::new(Arc::new(PdfVectorClient::new(config)?));
//!
//!     let batch = Batch {
//!         resource: Resource::Academic,
//!         operation: None,
//!         continue_on_fail: true,
//!         items: vec![InputItem::with_parameters(serde_json::json!({"query": "crispr"}))],
//!     };
//!     let records = dispatcher.execute(batch).await?;
//!     println!("{}", serde_json::to_string_pretty(&records)?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod schema;

pub use client::PdfVectorClient;
pub use config::Config;
pub use credentials::{ApiKey, CredentialDescriptor};
pub use dispatch::Dispatcher;
pub use error::{BatchError, ClientError, DispatchError};
