//! Seed parser with validation
//!
//! Checks what can be checked without a database: schema version and key
//! uniqueness. Reference resolution happens during import.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{seed_validation, Result};
use crate::seed::format_v0::SeedV0;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut user_keys = HashSet::new();
    for user in &seed.users {
        if !user_keys.insert(user.key.as_str()) {
            return Err(seed_validation(&format!("Duplicate user key: {}", user.key)));
        }
    }

    let mut post_keys = HashSet::new();
    for post in &seed.posts {
        if !post_keys.insert(post.key.as_str()) {
            return Err(seed_validation(&format!("Duplicate post key: {}", post.key)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picto_core::ExErrorKind;

    #[test]
    fn test_unsupported_version() {
        let err = parse_seed_str("schema_version: 1\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("schema_version"));
    }

    #[test]
    fn test_duplicate_user_key() {
        let yaml = r#"
schema_version: 0
users:
  - { key: a, username: alice, email: a@x.com, password: h1 }
  - { key: a, username: alan, email: b@x.com, password: h2 }
"#;
        let err = parse_seed_str(yaml).unwrap_err();
        assert!(err.message().contains("Duplicate user key: a"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse_seed_str("schema_version: [").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_seed_file(Path::new("/nonexistent/seed.yaml")).unwrap_err();
        assert!(err.message().contains("Failed to read seed file"));
    }
}
