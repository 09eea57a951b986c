//! Conflict translation for rejected database writes.
//!
//! A write rejected by a foreign key is answered with 409 and a localized message naming
//! what still references the target, resolved through a single best-effort lookup. Any
//! other rejected query is answered with a localized 400.

use async_trait::async_trait;

use crate::server::{
    error::{
        lookup::ReferenceLookupError,
        query::{FailureKind, QueryFailure},
    },
    i18n::Language,
    model::conflict::{ConflictReport, ReferenceRow, Translation},
};

/// Table whose rows own users. A resolved reference from it is an ownership conflict.
pub const OWNER_TABLE: &str = "application";

/// Read-only lookup of a referencing row by table name and id.
#[async_trait]
pub trait ReferenceLookup: Send + Sync {
    /// Fetches the id and name columns of the row with `id` in `table`.
    ///
    /// On PostgreSQL delete violations the id is the deleted row's key, not the referencing
    /// row's, so an `application` lookup for a deleted owner normally yields `Ok(None)`.
    ///
    /// # Returns
    /// - `Ok(Some(ReferenceRow))` - Row found
    /// - `Ok(None)` - Table known, no such row
    /// - `Err(ReferenceLookupError)` - Unknown table, malformed id or database error
    async fn find_reference(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<ReferenceRow>, ReferenceLookupError>;
}

/// Turns query failures into client-facing translations.
pub struct ConflictTranslator<'a, L> {
    lookup: &'a L,
}

impl<'a, L: ReferenceLookup> ConflictTranslator<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Translates a query failure for a client speaking `language`.
    ///
    /// Never fails. A failing lookup only reduces the cascade report to the id.
    ///
    /// # Arguments
    /// - `failure` - Driver code and detail of the rejected query
    /// - `language` - Language resolved from the request
    ///
    /// # Returns
    /// - `Translation::Conflict` - Foreign key violation
    /// - `Translation::BadRequest` - Any other failure
    pub async fn translate(&self, failure: &QueryFailure, language: Language) -> Translation {
        let messages = language.messages();

        let reference = match failure.classify() {
            FailureKind::ReferenceConflict(reference) => reference,
            FailureKind::BadRequest => {
                return Translation::BadRequest {
                    message: messages.bad_request(),
                }
            }
        };

        let cascade = match (reference.table.as_deref(), reference.id.as_deref()) {
            (Some(table), Some(id)) => self.resolve(table, id).await,
            _ => None,
        };

        let name = cascade
            .as_ref()
            .and_then(|report| report.name.as_deref())
            .filter(|name| !name.is_empty());
        let message = match (reference.table.as_deref(), name) {
            (Some(OWNER_TABLE), Some(application)) => messages.owner_conflict(application),
            (table, name) => messages.conflict(name.or(table)),
        };

        Translation::Conflict { message, cascade }
    }

    async fn resolve(&self, table: &str, id: &str) -> Option<ConflictReport> {
        match self.lookup.find_reference(table, id).await {
            Ok(Some(row)) => Some(ConflictReport::named(table, row)),
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(table, id, "Reference lookup failed, reporting id only: {}", err);
                Some(ConflictReport::id_only(table, id))
            }
        }
    }
}
