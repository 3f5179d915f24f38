//! Operation dispatcher.
//!
//! Runs a batch strictly in input order: for each item it builds one request
//! through the dispatch table, sends it, and appends the normalized records.
//! A failure either becomes an `{error}` record (continue-on-fail) or ends the
//! batch.

mod routes;

pub use routes::{BodyBuilder, Route, build_body, route};

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::client::PdfVectorClient;
use crate::error::{BatchError, DispatchResult};
use crate::models::{Batch, InputItem, OutputItem, Selection, records_from_response};
use crate::schema;

/// Executes batches against the PDFVector API.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Arc<PdfVectorClient>,
}

impl Dispatcher {
    /// Create a dispatcher around a client.
    #[must_use]
    pub fn new(client: Arc<PdfVectorClient>) -> Self {
        Self { client }
    }

    /// Run one item's call and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns a validation error before sending, or the client error after.
    pub async fn execute_item(
        &self,
        selection: Selection,
        parameters: &Map<String, Value>,
    ) -> DispatchResult<Value> {
        let route = route(selection);

        for advisory in schema::advisories(selection, parameters) {
            tracing::warn!(%selection, "{advisory}; sending unchanged");
        }

        let body = (route.build)(parameters)?;
        let response = self.client.send(route.method, route.endpoint, body.as_ref()).await?;
        Ok(response)
    }

    /// Run a whole batch.
    ///
    /// The selection is resolved once and applied to every item. With
    /// `continue_on_fail` the output always covers every item; without it the
    /// first failure is returned tagged with its item index.
    ///
    /// # Errors
    ///
    /// Returns the first item failure when `continue_on_fail` is off. An
    /// invalid selection fails the batch as item 0 unless `continue_on_fail` is
    /// on, in which case every item gets the error record.
    pub async fn execute(&self, batch: Batch) -> Result<Vec<OutputItem>, BatchError> {
        let selection = match Selection::new(batch.resource, batch.operation) {
            Ok(selection) => selection,
            Err(err) if batch.continue_on_fail => {
                let message = err.to_user_message();
                tracing::warn!(error = %message, "Invalid selection, recording error for every item");
                return Ok((0..batch.items.len())
                    .map(|index| OutputItem::error(index, message.clone()))
                    .collect());
            }
            Err(err) => return Err(BatchError::new(0, err)),
        };

        self.run(selection, &batch.items, batch.continue_on_fail).await
    }

    /// Run items under an already resolved selection.
    ///
    /// # Errors
    ///
    /// Returns the first item failure when `continue_on_fail` is off.
    pub async fn run(
        &self,
        selection: Selection,
        items: &[InputItem],
        continue_on_fail: bool,
    ) -> Result<Vec<OutputItem>, BatchError> {
        tracing::info!(%selection, items = items.len(), continue_on_fail, "Executing batch");

        let mut output = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match self.execute_item(selection, &item.parameters).await {
                Ok(response) => output.extend(records_from_response(response, index)),
                Err(err) if continue_on_fail => {
                    tracing::warn!(item = index, error = %err, "Item failed, continuing");
                    output.push(OutputItem::error(index, err.to_user_message()));
                }
                Err(err) => {
                    tracing::error!(item = index, error = %err, "Item failed, aborting batch");
                    return Err(BatchError::new(index, err));
                }
            }
        }

        tracing::info!(%selection, records = output.len(), "Batch complete");
        Ok(output)
    }
}
