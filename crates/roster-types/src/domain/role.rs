use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ministerial role assigned to a member.
///
/// The set is fixed; records coming from the record source never carry
/// roles outside it. `ALL` preserves the enumeration order, which is the
/// tie-break order for count-sorted breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    Leader,
    Pastor,
    Deacon,
    Elder,
    Evangelist,
    Missionary,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Member,
        Role::Leader,
        Role::Pastor,
        Role::Deacon,
        Role::Elder,
        Role::Evangelist,
        Role::Missionary,
    ];

    /// Display label. Also the key used for lexicographic role sorting.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Leader => "Leader",
            Role::Pastor => "Pastor",
            Role::Deacon => "Deacon",
            Role::Elder => "Elder",
            Role::Evangelist => "Evangelist",
            Role::Missionary => "Missionary",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "leader" => Ok(Role::Leader),
            "pastor" => Ok(Role::Pastor),
            "deacon" => Ok(Role::Deacon),
            "elder" => Ok(Role::Elder),
            "evangelist" => Ok(Role::Evangelist),
            "missionary" => Ok(Role::Missionary),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("pastor".parse::<Role>().unwrap(), Role::Pastor);
        assert_eq!("Leader".parse::<Role>().unwrap(), Role::Leader);
        assert!("bishop".parse::<Role>().is_err());
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Role::Evangelist).unwrap();
        assert_eq!(json, "\"evangelist\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Evangelist);
    }
}
