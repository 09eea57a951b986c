//! Classification of database query failures.
//!
//! This is the only place that looks inside the persistence library's error shape. A failed
//! query is reduced to its driver error code and free-text detail, and from there to one of
//! two kinds: a reference conflict (foreign key violation) or an unclassified bad request.

use regex::Regex;
use sea_orm::{sqlx::postgres::PgDatabaseError, DbErr, RuntimeErr};
use std::sync::LazyLock;

/// SQLSTATE raised by PostgreSQL for foreign key violations.
pub const POSTGRES_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Extended result code `SQLITE_CONSTRAINT_FOREIGNKEY`.
pub const SQLITE_FOREIGN_KEY_VIOLATION: &str = "787";

#[allow(clippy::expect_used)] // good regex, it doesn't panic
static TABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"table "([^"]+)""#).expect("static regex should not panic"));
#[allow(clippy::expect_used)] // good regex, it doesn't panic
static KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^)]+)\)=\(([^)]+)\)").expect("static regex should not panic")
});

/// Driver-level description of a query the database rejected.
///
/// Travels from `AppError::into_response` to the conflict translation middleware as a
/// response extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFailure {
    /// Driver error code (SQLSTATE for PostgreSQL, extended result code for SQLite).
    pub code: Option<String>,
    /// Free-text detail. Only PostgreSQL provides one.
    pub detail: Option<String>,
}

/// What a query failure means to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    ReferenceConflict(ReferenceDetail),
    BadRequest,
}

/// Referencing table and row id extracted from a foreign key violation detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDetail {
    pub table: Option<String>,
    pub id: Option<String>,
}

impl QueryFailure {
    /// Extracts the driver failure from a SeaORM error.
    ///
    /// # Returns
    /// - `Some(QueryFailure)` - The database executed the query and rejected it
    /// - `None` - Any other error (connection, pool, record not found, ...)
    pub fn from_db_err(err: &DbErr) -> Option<Self> {
        let (DbErr::Exec(RuntimeErr::SqlxError(err)) | DbErr::Query(RuntimeErr::SqlxError(err))) =
            err
        else {
            return None;
        };

        let db_err = err.as_database_error()?;
        let detail = db_err
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(|pg_err| pg_err.detail())
            .map(str::to_string);

        Some(Self {
            code: db_err.code().map(|code| code.into_owned()),
            detail,
        })
    }

    /// Whether the driver code is a foreign key violation on either supported backend.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self.code.as_deref(),
            Some(POSTGRES_FOREIGN_KEY_VIOLATION | SQLITE_FOREIGN_KEY_VIOLATION)
        )
    }

    pub fn classify(&self) -> FailureKind {
        if !self.is_foreign_key_violation() {
            return FailureKind::BadRequest;
        }

        FailureKind::ReferenceConflict(
            self.detail
                .as_deref()
                .map(parse_reference)
                .unwrap_or_default(),
        )
    }
}

/// Parses the referencing table and id out of a PostgreSQL foreign key violation detail.
///
/// The detail looks like `Key (id)=(3f2a...) is still referenced from table "application".`
/// The table is the quoted identifier after `table`; the id is the value in the second
/// parenthesized pair of the `(column)=(value)` assignment.
pub fn parse_reference(detail: &str) -> ReferenceDetail {
    let table = TABLE_REGEX
        .captures(detail)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    let id = KEY_REGEX
        .captures(detail)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string());

    ReferenceDetail { table, id }
}
