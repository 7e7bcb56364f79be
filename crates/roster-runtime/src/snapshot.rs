use crate::Result;
use roster_types::Member;
use std::path::Path;

/// Load a member snapshot: a JSON array of records as delivered by the
/// record source.
pub fn load_members(path: &Path) -> Result<Vec<Member>> {
    let content = std::fs::read_to_string(path)?;
    let members: Vec<Member> = serde_json::from_str(&content)?;
    Ok(members)
}

/// Write a member snapshot back out, pretty-printed.
pub fn save_members(path: &Path, members: &[Member]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(members)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::NaiveDate;
    use roster_types::{Member, Role};
    use uuid::Uuid;

    fn sample() -> Vec<Member> {
        vec![Member {
            id: Uuid::from_u128(1),
            full_name: "Maria Silva".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1999, 3, 12).unwrap(),
            role: Role::Member,
            national_id: "123.456.789-09".to_string(),
            unit: None,
        }]
    }

    #[test]
    fn round_trips_a_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.json");

        save_members(&path, &sample()).unwrap();
        let loaded = load_members(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_members(Path::new("/nonexistent/members.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_members(&path).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
