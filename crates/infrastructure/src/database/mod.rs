use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub async fn create_pool(database_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let url = format!("sqlite:{}", database_path.display());
    let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// One database file per router, named deterministically from the
/// router identifier.
pub fn database_path(directory: Option<&Path>, router: &str) -> PathBuf {
    let file_name = format!("db_{router}.db");
    match directory {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_file_is_named_after_router() {
        assert_eq!(
            database_path(None, "edge-router-1"),
            PathBuf::from("db_edge-router-1.db")
        );
        assert_eq!(
            database_path(Some(Path::new("/var/lib/mwcheck")), "r1"),
            PathBuf::from("/var/lib/mwcheck/db_r1.db")
        );
    }
}
