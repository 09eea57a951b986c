use thiserror::Error;

/// Failure to resolve the row referenced by a conflicting write.
///
/// Never reaches the client. The conflict translator degrades to an id-only report.
#[derive(Error, Debug)]
pub enum ReferenceLookupError {
    /// The referencing table is not one of the named directory tables.
    #[error("No lookup available for table '{0}'")]
    UnknownTable(String),

    /// The referencing id parsed from the driver detail is not a UUID.
    #[error("Referencing id '{value}' is not a valid UUID: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
