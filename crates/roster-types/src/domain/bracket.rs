use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Demographic age bracket.
///
/// The five brackets are fixed, contiguous and exhaustive; `ALL` lists them
/// in ascending age order, which is also the output order for age
/// breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "<18")]
    Under18,
    #[serde(rename = "18-29")]
    From18To29,
    #[serde(rename = "30-49")]
    From30To49,
    #[serde(rename = "50-64")]
    From50To64,
    #[serde(rename = "65+")]
    Over65,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 5] = [
        AgeBracket::Under18,
        AgeBracket::From18To29,
        AgeBracket::From30To49,
        AgeBracket::From50To64,
        AgeBracket::Over65,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Under18 => "<18",
            AgeBracket::From18To29 => "18-29",
            AgeBracket::From30To49 => "30-49",
            AgeBracket::From50To64 => "50-64",
            AgeBracket::Over65 => "65+",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<18" => Ok(AgeBracket::Under18),
            "18-29" => Ok(AgeBracket::From18To29),
            "30-49" => Ok(AgeBracket::From30To49),
            "50-64" => Ok(AgeBracket::From50To64),
            "65+" => Ok(AgeBracket::Over65),
            _ => Err(format!("Unknown age bracket: {}", s)),
        }
    }
}
