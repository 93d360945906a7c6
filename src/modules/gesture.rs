use std::fmt;
use std::str::FromStr;
use anyhow::Error;
use serde::{Deserialize, Serialize};

/// Coarse gesture recognized from a single landmark frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Smile,
    Serious,
    /// at least one wrist raised above its shoulder
    Eureca,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Smile => "smile",
            Gesture::Serious => "serious",
            Gesture::Eureca => "eureca",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gesture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smile" => Ok(Gesture::Smile),
            "serious" => Ok(Gesture::Serious),
            "eureca" => Ok(Gesture::Eureca),
            _ => Err(Error::msg(format!("unknown gesture: {s}"))),
        }
    }
}
