//! Festival repository
//!
//! One read-only lookup: distinct holiday names for a date/district pair.
//! The district-to-state join is case-insensitive and trimmed on stored
//! values; rows whose state is the wildcard 'all india' match every
//! district.

use sqlx::{PgConnection, Row};

use crate::models::{DistrictName, HolidayDate};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),
}

/// Festival repository
pub struct FestivalRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> FestivalRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Distinct holiday names for a date/district pair, ordered
    /// alphabetically.
    ///
    /// The date is compared as an exact string against stored values.
    /// Zero matches returns an empty vec; the HTTP layer decides what that
    /// means for the caller.
    pub async fn find_by_date_and_district(
        &mut self,
        date: &HolidayDate,
        district: &DistrictName,
    ) -> Result<Vec<String>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT f.holidayname
            FROM festival f
            JOIN india_districts d
              ON LOWER(TRIM(f.state_name)) = LOWER(TRIM(d.state_name))
              OR LOWER(TRIM(f.state_name)) = 'all india'
            WHERE f.holidaydate = $1
              AND LOWER(TRIM(d.district_name)) = LOWER($2)
            ORDER BY f.holidayname
            "#,
        )
        .bind(date.as_str())
        .bind(district.as_str())
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| r.get::<String, _>("holidayname"))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::db::connection::connect;

    // Integration tests against a real database. Temp tables shadow any
    // production tables of the same name for the lifetime of the
    // connection, so these are safe to run anywhere:
    // DB_HOST=... cargo test -p festlookup-server -- --ignored

    async fn seeded_connection() -> PgConnection {
        let mut conn = connect(&DbConfig::from_env()).await.expect("connect failed");

        sqlx::query(
            r#"
            CREATE TEMP TABLE festival (
                holidaydate TEXT NOT NULL,
                state_name TEXT NOT NULL,
                holidayname TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .expect("create festival");

        sqlx::query(
            r#"
            CREATE TEMP TABLE india_districts (
                district_name TEXT NOT NULL,
                state_name TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .expect("create india_districts");

        let festivals = [
            ("2025-12-25", "Andhra Pradesh", "Christmas"),
            // Duplicate row: DISTINCT must collapse it
            ("2025-12-25", "Andhra Pradesh", "Christmas"),
            // Stored state carries stray whitespace and casing
            ("2025-12-25", " ANDHRA PRADESH ", "Boxing Eve"),
            // Wildcard state, deliberately not lowercase
            ("2025-12-25", "All India", "National Holiday"),
            ("2025-08-15", "Kerala", "Onam"),
        ];
        for (date, state, name) in festivals {
            sqlx::query(
                "INSERT INTO festival (holidaydate, state_name, holidayname) VALUES ($1, $2, $3)",
            )
            .bind(date)
            .bind(state)
            .bind(name)
            .execute(&mut conn)
            .await
            .expect("insert festival");
        }

        let districts = [("Nellore", "Andhra Pradesh"), ("Idukki", "Kerala")];
        for (district, state) in districts {
            sqlx::query(
                "INSERT INTO india_districts (district_name, state_name) VALUES ($1, $2)",
            )
            .bind(district)
            .bind(state)
            .execute(&mut conn)
            .await
            .expect("insert district");
        }

        conn
    }

    async fn lookup(conn: &mut PgConnection, date: &str, district: &str) -> Vec<String> {
        FestivalRepo::new(conn)
            .find_by_date_and_district(
                &HolidayDate::new(date).unwrap(),
                &DistrictName::new(district).unwrap(),
            )
            .await
            .expect("lookup failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn match_is_sorted_and_distinct() {
        let mut conn = seeded_connection().await;
        let names = lookup(&mut conn, "2025-12-25", "Nellore").await;
        assert_eq!(names, ["Boxing Eve", "Christmas", "National Holiday"]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn district_match_ignores_case_and_whitespace() {
        let mut conn = seeded_connection().await;
        let exact = lookup(&mut conn, "2025-12-25", "Nellore").await;
        let upper = lookup(&mut conn, "2025-12-25", "NELLORE").await;
        let padded = lookup(&mut conn, "2025-12-25", "  nellore  ").await;
        assert_eq!(exact, upper);
        assert_eq!(exact, padded);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn wildcard_state_applies_to_every_district() {
        let mut conn = seeded_connection().await;
        // Idukki is in Kerala; only the wildcard row matches this date.
        let names = lookup(&mut conn, "2025-12-25", "Idukki").await;
        assert_eq!(names, ["National Holiday"]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn no_matching_rows_is_empty() {
        let mut conn = seeded_connection().await;
        let names = lookup(&mut conn, "1999-01-01", "Nellore").await;
        assert!(names.is_empty());

        let names = lookup(&mut conn, "2025-12-25", "Atlantis").await;
        assert!(names.is_empty());
    }
}
