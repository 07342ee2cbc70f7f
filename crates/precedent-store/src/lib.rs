//! Precedent Storage Layer
//!
//! Implements the OpinionStore trait on SQLite.
//!
//! # Architecture
//!
//! - `clusters` and `opinions` hold the pre-existing corpus (read only for the pipeline)
//! - `opinion_parentheticals` and `citation_contexts` hold extracted relationships
//! - Relationship writes for one citing opinion happen in a single transaction
//!
//! # Examples
//!
//! ```no_run
//! use precedent_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for opinion operations
//! ```

#![warn(missing_docs)]

use precedent_domain::traits::OpinionStore;
use precedent_domain::{
    CitationContext, Cluster, ClusterId, Opinion, OpinionId, OpinionParenthetical, ReporterKey,
};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Opinion not found
    #[error("Opinion not found: {0}")]
    NotFound(OpinionId),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const OPINION_COLUMNS: &str = "o.id, o.html_text, o.cluster_id, c.reporter";

/// SQLite-based implementation of OpinionStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use precedent_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("precedent.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Insert or replace a cluster
    ///
    /// The reporter is normalized with the same rule used for citation keys.
    pub fn insert_cluster(&mut self, id: ClusterId, reporter: &str) -> Result<(), StoreError> {
        let key = ReporterKey::from_stored(reporter);
        if key.is_empty() {
            return Err(StoreError::InvalidData(format!(
                "Cluster {} has an empty reporter",
                id
            )));
        }

        self.conn.execute(
            "INSERT OR REPLACE INTO clusters (id, reporter) VALUES (?1, ?2)",
            params![id.value(), key.as_str()],
        )?;
        Ok(())
    }

    /// Insert or replace an opinion
    pub fn insert_opinion(
        &mut self,
        id: OpinionId,
        html_text: Option<&str>,
        cluster_id: Option<ClusterId>,
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO opinions (id, html_text, cluster_id) VALUES (?1, ?2, ?3)",
            params![id.value(), html_text, cluster_id.map(|c| c.value())],
        )?;
        Ok(())
    }

    /// Get an opinion by ID, failing if it does not exist
    pub fn require_opinion(&self, id: OpinionId) -> Result<Opinion, StoreError> {
        self.get_opinion(id)?.ok_or(StoreError::NotFound(id))
    }

    fn row_to_opinion(row: &Row<'_>) -> rusqlite::Result<Opinion> {
        let cluster_id: Option<i64> = row.get(2)?;
        Ok(Opinion::new(
            OpinionId::new(row.get(0)?),
            row.get(1)?,
            cluster_id.map(ClusterId::new),
            row.get(3)?,
        ))
    }
}

impl OpinionStore for SqliteStore {
    type Error = StoreError;

    fn opinion_ids(&self) -> Result<Vec<OpinionId>, Self::Error> {
        let mut stmt = self.conn.prepare("SELECT id FROM opinions ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0).map(OpinionId::new))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    fn get_opinion(&self, id: OpinionId) -> Result<Option<Opinion>, Self::Error> {
        let sql = format!(
            "SELECT {OPINION_COLUMNS}
             FROM opinions o LEFT JOIN clusters c ON c.id = o.cluster_id
             WHERE o.id = ?1"
        );
        let opinion = self
            .conn
            .query_row(&sql, params![id.value()], Self::row_to_opinion)
            .optional()?;
        Ok(opinion)
    }

    fn get_cluster(&self, id: ClusterId) -> Result<Option<Cluster>, Self::Error> {
        let cluster = self
            .conn
            .query_row(
                "SELECT id, reporter FROM clusters WHERE id = ?1",
                params![id.value()],
                |row| {
                    Ok(Cluster {
                        id: ClusterId::new(row.get(0)?),
                        reporter: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(cluster)
    }

    fn find_opinions_by_reporters(&self, keys: &[ReporterKey]) -> Result<Vec<Opinion>, Self::Error> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; keys.len()].join(", ");
        let sql = format!(
            "SELECT {OPINION_COLUMNS}
             FROM opinions o JOIN clusters c ON c.id = o.cluster_id
             WHERE c.reporter IN ({placeholders})
             ORDER BY o.id"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let opinions = stmt
            .query_map(params_from_iter(keys.iter().map(|k| k.as_str())), Self::row_to_opinion)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("{} reporter keys matched {} opinions", keys.len(), opinions.len());
        Ok(opinions)
    }

    fn commit_relationships(&mut self, citing: OpinionId, cited: &[Opinion]) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "DELETE FROM opinion_parentheticals WHERE citing_opinion_id = ?1",
            params![citing.value()],
        )?;
        tx.execute(
            "DELETE FROM citation_contexts WHERE citing_opinion_id = ?1",
            params![citing.value()],
        )?;

        {
            let mut insert_parenthetical = tx.prepare(
                "INSERT INTO opinion_parentheticals (citing_opinion_id, cited_opinion_id, text)
                 VALUES (?1, ?2, ?3)",
            )?;
            let mut insert_context = tx.prepare(
                "INSERT INTO citation_contexts (citing_opinion_id, cited_opinion_id, text)
                 VALUES (?1, ?2, ?3)",
            )?;

            for opinion in cited {
                for parenthetical in &opinion.parentheticals {
                    if parenthetical.citing_opinion_id != citing {
                        return Err(StoreError::InvalidData(format!(
                            "Parenthetical from {} committed under citing opinion {}",
                            parenthetical.citing_opinion_id, citing
                        )));
                    }
                    insert_parenthetical.execute(params![
                        citing.value(),
                        parenthetical.cited_opinion_id.value(),
                        &parenthetical.text,
                    ])?;
                }
                for context in &opinion.contexts {
                    if context.citing_opinion_id != citing {
                        return Err(StoreError::InvalidData(format!(
                            "Context from {} committed under citing opinion {}",
                            context.citing_opinion_id, citing
                        )));
                    }
                    insert_context.execute(params![
                        citing.value(),
                        context.cited_opinion_id.value(),
                        &context.text,
                    ])?;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn parentheticals_from(&self, citing: OpinionId) -> Result<Vec<OpinionParenthetical>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT citing_opinion_id, cited_opinion_id, text
             FROM opinion_parentheticals WHERE citing_opinion_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![citing.value()], |row| {
                Ok(OpinionParenthetical::new(
                    OpinionId::new(row.get(0)?),
                    OpinionId::new(row.get(1)?),
                    row.get(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn contexts_from(&self, citing: OpinionId) -> Result<Vec<CitationContext>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT citing_opinion_id, cited_opinion_id, text
             FROM citation_contexts WHERE citing_opinion_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![citing.value()], |row| {
                Ok(CitationContext::new(
                    OpinionId::new(row.get(0)?),
                    OpinionId::new(row.get(1)?),
                    row.get(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn citation_edges(&self) -> Result<Vec<(OpinionId, OpinionId, u32)>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT citing_opinion_id, cited_opinion_id, COUNT(*)
             FROM citation_contexts
             GROUP BY citing_opinion_id, cited_opinion_id
             ORDER BY citing_opinion_id, cited_opinion_id",
        )?;
        let edges = stmt
            .query_map([], |row| {
                let weight: i64 = row.get(2)?;
                Ok((
                    OpinionId::new(row.get(0)?),
                    OpinionId::new(row.get(1)?),
                    weight as u32,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(edges)
    }
}
