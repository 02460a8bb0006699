use async_trait::async_trait;
use mwcheck_application::ports::SnapshotStore;
use mwcheck_domain::{
    AddressFilter, ArpEntry, DomainError, MatchKind, PhaseCounts, ProbeOutcome,
    Reachability, RegressionRow, SnapshotTable,
};
use sqlx::SqlitePool;
use tracing::{error, instrument};

/// SQLite-backed snapshot persistence.
///
/// Table names come from [`SnapshotTable`] only; every value reaches
/// SQL through a bound parameter.
pub struct SqliteSnapshotStore {
    pool: SqlitePool,
}

impl SqliteSnapshotStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// A unique-key violation means the same host was captured twice with
/// identical discriminating fields; everything else is transient.
fn map_store_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DomainError::DataIntegrity(db.to_string());
        }
    }
    DomainError::Store(e.to_string())
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    #[instrument(skip(self))]
    async fn create_precheck_table(&self, table: &SnapshotTable) -> Result<(), DomainError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                 address TEXT NOT NULL,
                 hardware_address TEXT NOT NULL,
                 bridge_interface TEXT NOT NULL,
                 logical_interface TEXT NOT NULL,
                 reachability TEXT,
                 captured_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                 PRIMARY KEY (address, hardware_address, bridge_interface)
             )",
            table.qualified_name()
        );

        sqlx::query(&sql).execute(&self.pool).await.map_err(|e| {
            error!(error = %e, table = %table, "failed to create precheck table");
            map_store_error(e)
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_postcheck_table(&self, table: &SnapshotTable) -> Result<(), DomainError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                 address TEXT PRIMARY KEY,
                 arp_address TEXT,
                 hardware_address TEXT,
                 bridge_interface TEXT,
                 logical_interface TEXT,
                 reachability TEXT,
                 captured_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
             )",
            table.qualified_name()
        );

        sqlx::query(&sql).execute(&self.pool).await.map_err(|e| {
            error!(error = %e, table = %table, "failed to create postcheck table");
            map_store_error(e)
        })?;

        Ok(())
    }

    #[instrument(skip(self, entries))]
    async fn insert_precheck_entries(
        &self,
        table: &SnapshotTable,
        entries: &[ArpEntry],
    ) -> Result<(), DomainError> {
        let sql = format!(
            "INSERT INTO {}
                 (address, hardware_address, bridge_interface, logical_interface)
             VALUES (?, ?, ?, ?)",
            table.qualified_name()
        );

        // One transaction for the whole capture: a duplicate key aborts
        // the batch instead of leaving half a snapshot behind.
        let mut tx = self.pool.begin().await.map_err(map_store_error)?;
        for entry in entries {
            sqlx::query(&sql)
                .bind(&entry.address)
                .bind(&entry.hardware_address)
                .bind(&entry.bridge_interface)
                .bind(&entry.logical_interface)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!(error = %e, table = %table, address = %entry.address,
                           "precheck insert failed");
                    map_store_error(e)
                })?;
        }
        tx.commit().await.map_err(map_store_error)?;

        Ok(())
    }

    #[instrument(skip(self, entries))]
    async fn upsert_postcheck_entries(
        &self,
        table: &SnapshotTable,
        entries: &[ArpEntry],
    ) -> Result<(), DomainError> {
        let name = table.qualified_name();
        let update_sql = format!(
            "UPDATE {name} SET
                 arp_address = ?,
                 hardware_address = ?,
                 bridge_interface = ?,
                 logical_interface = ?
             WHERE address = ?"
        );
        let insert_sql = format!(
            "INSERT INTO {name}
                 (address, arp_address, hardware_address, bridge_interface, logical_interface)
             SELECT ?, ?, ?, ?, ?
             WHERE NOT EXISTS
                 (SELECT 1 FROM {name} WHERE address = ? OR arp_address = ?)"
        );

        let mut tx = self.pool.begin().await.map_err(map_store_error)?;
        for entry in entries {
            sqlx::query(&update_sql)
                .bind(&entry.address)
                .bind(&entry.hardware_address)
                .bind(&entry.bridge_interface)
                .bind(&entry.logical_interface)
                .bind(&entry.address)
                .execute(&mut *tx)
                .await
                .map_err(map_store_error)?;

            sqlx::query(&insert_sql)
                .bind(&entry.address)
                .bind(&entry.address)
                .bind(&entry.hardware_address)
                .bind(&entry.bridge_interface)
                .bind(&entry.logical_interface)
                .bind(&entry.address)
                .bind(&entry.address)
                .execute(&mut *tx)
                .await
                .map_err(map_store_error)?;
        }
        tx.commit().await.map_err(map_store_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn select_addresses(
        &self,
        table: &SnapshotTable,
        filters: &[AddressFilter],
    ) -> Result<Vec<String>, DomainError> {
        let mut sql = format!("SELECT DISTINCT address FROM {}", table.qualified_name());
        if !filters.is_empty() {
            let clauses: Vec<String> = filters
                .iter()
                .map(|f| {
                    let operator = match f.kind {
                        MatchKind::Equals => "=",
                        MatchKind::Contains => "LIKE",
                    };
                    format!("{} {} ?", f.field.column(), operator)
                })
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        let mut query = sqlx::query_scalar::<_, String>(&sql);
        for filter in filters {
            let value = match filter.kind {
                MatchKind::Equals => filter.value.clone(),
                MatchKind::Contains => format!("%{}%", filter.value),
            };
            query = query.bind(value);
        }

        query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, table = %table, "failed to select addresses");
            map_store_error(e)
        })
    }

    #[instrument(skip(self, outcomes))]
    async fn record_precheck_reachability(
        &self,
        table: &SnapshotTable,
        outcomes: &[ProbeOutcome],
    ) -> Result<(), DomainError> {
        // Only rows without a verdict are touched, so a re-run never
        // overwrites an earlier capture.
        let sql = format!(
            "UPDATE {} SET reachability = ?
             WHERE address = ? AND reachability IS NULL",
            table.qualified_name()
        );

        let mut tx = self.pool.begin().await.map_err(map_store_error)?;
        for outcome in outcomes {
            sqlx::query(&sql)
                .bind(outcome.verdict.as_str())
                .bind(&outcome.address)
                .execute(&mut *tx)
                .await
                .map_err(map_store_error)?;
        }
        tx.commit().await.map_err(map_store_error)?;

        Ok(())
    }

    #[instrument(skip(self, outcomes))]
    async fn record_postcheck_reachability(
        &self,
        table: &SnapshotTable,
        outcomes: &[ProbeOutcome],
    ) -> Result<(), DomainError> {
        let sql = format!(
            "INSERT INTO {} (address, reachability) VALUES (?, ?)
             ON CONFLICT(address) DO NOTHING",
            table.qualified_name()
        );

        let mut tx = self.pool.begin().await.map_err(map_store_error)?;
        for outcome in outcomes {
            sqlx::query(&sql)
                .bind(&outcome.address)
                .bind(outcome.verdict.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_store_error)?;
        }
        tx.commit().await.map_err(map_store_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn correlate_regressions(
        &self,
        precheck: &SnapshotTable,
        postcheck: &SnapshotTable,
    ) -> Result<Vec<RegressionRow>, DomainError> {
        let sql = format!(
            "SELECT
                 p.address, p.hardware_address, p.bridge_interface,
                 p.logical_interface, p.reachability,
                 q.arp_address, q.hardware_address, q.bridge_interface,
                 q.logical_interface, q.reachability
             FROM {pre} p
             INNER JOIN {post} q ON p.address = q.address
             WHERE p.reachability = ? AND q.reachability = ?",
            pre = precheck.qualified_name(),
            post = postcheck.qualified_name()
        );

        let rows = sqlx::query_as::<
            _,
            (
                String,
                String,
                String,
                String,
                String,
                Option<String>,
                Option<String>,
                Option<String>,
                Option<String>,
                String,
            ),
        >(&sql)
        .bind(Reachability::Reachable.as_str())
        .bind(Reachability::Unreachable.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, precheck = %precheck, postcheck = %postcheck,
                   "failed to correlate regressions");
            map_store_error(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|row| RegressionRow {
                pre_address: row.0,
                pre_mac: row.1,
                pre_bridge: row.2,
                pre_logical: row.3,
                pre_reachability: row.4,
                post_address: row.5,
                post_mac: row.6,
                post_bridge: row.7,
                post_logical: row.8,
                post_reachability: row.9,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn counts_by_outcome(
        &self,
        table: &SnapshotTable,
    ) -> Result<PhaseCounts, DomainError> {
        let sql = format!(
            "SELECT
                 COUNT(CASE WHEN reachability = ? THEN 1 END),
                 COUNT(CASE WHEN reachability = ? THEN 1 END),
                 COUNT(CASE WHEN reachability IS NOT NULL THEN 1 END)
             FROM {}",
            table.qualified_name()
        );

        let row = sqlx::query_as::<_, (i64, i64, i64)>(&sql)
            .bind(Reachability::Reachable.as_str())
            .bind(Reachability::Unreachable.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, table = %table, "failed to count outcomes");
                map_store_error(e)
            })?;

        Ok(PhaseCounts {
            reachable: row.0 as u64,
            unreachable: row.1 as u64,
            probed: row.2 as u64,
        })
    }
}
