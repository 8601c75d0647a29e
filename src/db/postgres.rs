use anyhow::{Context, Result};
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tracing::{debug, info};

use super::DatabaseHandle;

const MAX_CONNECTIONS: usize = 4;

const LIST_TABLES: &str = r#"
    SELECT tablename::text
    FROM pg_catalog.pg_tables
    WHERE schemaname = 'public'
    ORDER BY tablename
"#;

/// PostgreSQL-backed handle. Tables of the `public` schema stand in for collections.
pub struct PostgresDatabase {
    pool: Pool,
    name: Option<String>,
}

impl PostgresDatabase {
    /// Builds the pool without opening a connection.
    /// `name` overrides the database named in the URL.
    pub fn connect_lazy(url: &str, name: Option<&str>) -> Result<Self> {
        if !url.starts_with("postgresql://") && !url.starts_with("postgres://") {
            anyhow::bail!("DATABASE_URL must start with 'postgresql://' or 'postgres://'");
        }

        let parsed = url
            .parse::<tokio_postgres::Config>()
            .context("Invalid DATABASE_URL")?;

        let name = name
            .map(str::to_string)
            .or_else(|| parsed.get_dbname().map(str::to_string));

        let mut pg_config = Config::new();
        pg_config.url = Some(url.to_string());
        pg_config.dbname = name.clone();
        pg_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        pg_config.pool = Some(PoolConfig::new(MAX_CONNECTIONS));

        let tls_connector = TlsConnector::builder()
            .build()
            .context("TLS connector creation failed")?;
        let tls = MakeTlsConnector::new(tls_connector);

        let pool = pg_config
            .create_pool(Some(Runtime::Tokio1), tls)
            .context("Connection pool creation failed")?;

        info!("PostgreSQL pool prepared for database {:?}", name);
        Ok(PostgresDatabase { pool, name })
    }
}

#[async_trait::async_trait]
impl DatabaseHandle for PostgresDatabase {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let client = self.pool.get().await.context("connection failed")?;

        let rows = client
            .query(LIST_TABLES, &[])
            .await
            .context("listing tables failed")?;

        let tables: Vec<String> = rows.iter().map(|row| row.get(0)).collect();
        debug!("Found {} tables", tables.len());
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_foreign_scheme() {
        assert!(PostgresDatabase::connect_lazy("mysql://u:p@localhost/school", None).is_err());
    }

    #[tokio::test]
    async fn test_name_from_url_or_override() {
        let db = PostgresDatabase::connect_lazy("postgres://u:p@localhost:5432/school", None).unwrap();
        assert_eq!(db.name(), Some("school"));

        let db = PostgresDatabase::connect_lazy("postgres://u:p@localhost:5432/school", Some("other"))
            .unwrap();
        assert_eq!(db.name(), Some("other"));
    }
}
