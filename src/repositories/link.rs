//! Link store trait and Postgres implementation

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Link, LinkFilter, NewLink};

/// Storage interface for links
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Find a link by its unique ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, StoreError>;

    /// Find many links in one call, keyed by id
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Link>, StoreError>;

    /// List links in posting order, optionally filtered and paginated
    async fn find_all(
        &self,
        filter: Option<&LinkFilter>,
        skip: i64,
        first: Option<i64>,
    ) -> Result<Vec<Link>, StoreError>;

    /// Insert a new link and return it with its generated id
    async fn insert(&self, link: NewLink) -> Result<Link, StoreError>;
}

/// Postgres-backed link store
#[derive(Clone)]
pub struct PgLinkStore {
    pool: PgPool,
}

impl PgLinkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const LINK_COLUMNS: &str = "id, url, description, posted_by";

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, StoreError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE id = $1");
        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(link)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Link>, StoreError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE id = ANY($1)");
        let links = sqlx::query_as::<_, Link>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(links.into_iter().map(|l| (l.id, l)).collect())
    }

    async fn find_all(
        &self,
        filter: Option<&LinkFilter>,
        skip: i64,
        first: Option<i64>,
    ) -> Result<Vec<Link>, StoreError> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {LINK_COLUMNS} FROM links"));

        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            qb.push(" WHERE (");
            let mut first_condition = true;
            if let Some(needle) = filter.description_contains.as_deref() {
                qb.push("description ILIKE ");
                qb.push_bind(format!("%{needle}%"));
                first_condition = false;
            }
            if let Some(needle) = filter.url_contains.as_deref() {
                if !first_condition {
                    qb.push(" OR ");
                }
                qb.push("url ILIKE ");
                qb.push_bind(format!("%{needle}%"));
            }
            qb.push(")");
        }

        // Posting order keeps repeated reads of unchanged data identical
        qb.push(" ORDER BY created_at, id");

        if let Some(first) = first {
            qb.push(" LIMIT ");
            qb.push_bind(first);
        }
        if skip > 0 {
            qb.push(" OFFSET ");
            qb.push_bind(skip);
        }

        let links = qb.build_query_as::<Link>().fetch_all(&self.pool).await?;
        Ok(links)
    }

    async fn insert(&self, link: NewLink) -> Result<Link, StoreError> {
        let sql = format!(
            "INSERT INTO links (url, description, posted_by) VALUES ($1, $2, $3) \
             RETURNING {LINK_COLUMNS}"
        );
        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(&link.url)
            .bind(&link.description)
            .bind(link.posted_by)
            .fetch_one(&self.pool)
            .await?;
        Ok(link)
    }
}
