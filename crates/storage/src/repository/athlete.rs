use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::athlete::{AthleteFilter, CreateAthleteRequest};
use crate::dto::common::{PaginatedResponse, PaginationParams};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List one page of athletes matching `filter`, ordered by id.
    ///
    /// The count and the page are read in the same transaction so the
    /// pagination metadata describes the rows actually returned.
    pub async fn list(
        &self,
        filter: &AthleteFilter,
        pagination: &PaginationParams,
    ) -> Result<PaginatedResponse<Athlete>> {
        pagination
            .validate()
            .map_err(StorageError::InvalidArgument)?;

        let mut tx = self.pool.begin().await?;

        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM athletes WHERE 1=1");
        push_filter(&mut count, filter);
        let total_items = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await?;

        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, name, national_id, training_center, category FROM athletes WHERE 1=1",
        );
        push_filter(&mut query, filter);
        query.push(" ORDER BY id ASC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let athletes: Vec<Athlete> = query.build_query_as().fetch_all(&mut *tx).await?;

        tx.commit().await?;

        Ok(PaginatedResponse::new(
            athletes,
            pagination.page,
            pagination.page_size,
            total_items,
        ))
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, national_id, training_center, category
            FROM athletes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete.
    ///
    /// Uniqueness of `national_id` is enforced by the table's unique index, so a
    /// duplicate is refused by the insert itself and leaves the table untouched.
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let result = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (name, national_id, training_center, category)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, national_id, training_center, category
            "#,
        )
        .bind(&req.name)
        .bind(&req.national_id)
        .bind(&req.training_center)
        .bind(&req.category)
        .fetch_one(self.pool)
        .await;

        match result.map_err(StorageError::from) {
            Ok(athlete) => Ok(athlete),
            Err(e) if e.is_unique_violation() => {
                Err(StorageError::DuplicateNationalId(req.national_id.clone()))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM athletes")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

fn push_filter<'q>(query: &mut QueryBuilder<'q, Sqlite>, filter: &'q AthleteFilter) {
    if let Some(name) = filter.name() {
        query.push(" AND name = ");
        query.push_bind(name);
    }

    if let Some(national_id) = filter.national_id() {
        query.push(" AND national_id = ");
        query.push_bind(national_id);
    }
}
