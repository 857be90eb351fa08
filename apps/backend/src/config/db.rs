use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile: the SQLite file named by `SUPPLY_DB`
    Prod,
    /// Test database profile: always in-memory, never touches the file
    Test,
}

/// Builds the SQLite connection URL for the given profile.
///
/// Prod resolves `SUPPLY_DB` (default `supply_chain.db`); the file is created
/// on first connect. Test is always `sqlite::memory:` so test runs can never
/// write into a real database file.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => {
            let file = env::var("SUPPLY_DB").unwrap_or_else(|_| "supply_chain.db".to_string());
            if file.trim().is_empty() {
                return Err(AppError::config(
                    "SUPPLY_DB must not be empty".to_string(),
                ));
            }
            if file == ":memory:" {
                return Err(AppError::config(
                    "SUPPLY_DB must be a file path; the in-memory database is reserved for the test profile".to_string(),
                ));
            }
            Ok(format!("sqlite://{file}"))
        }
        DbProfile::Test => Ok("sqlite::memory:".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::{db_url, DbProfile};

    // One test body: these cases share the SUPPLY_DB variable and the test
    // harness runs #[test] fns on parallel threads.
    #[test]
    fn test_db_url_prod_profile() {
        env::remove_var("SUPPLY_DB");
        assert_eq!(db_url(DbProfile::Prod).unwrap(), "sqlite://supply_chain.db");

        env::set_var("SUPPLY_DB", "/var/lib/supplytrace/records.db");
        assert_eq!(
            db_url(DbProfile::Prod).unwrap(),
            "sqlite:///var/lib/supplytrace/records.db"
        );

        env::set_var("SUPPLY_DB", ":memory:");
        assert!(db_url(DbProfile::Prod).is_err());

        env::remove_var("SUPPLY_DB");
    }

    #[test]
    fn test_db_url_test_is_memory() {
        let url = db_url(DbProfile::Test).unwrap();
        assert_eq!(url, "sqlite::memory:");
    }
}
