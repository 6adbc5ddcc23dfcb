//! Letter grade from score

use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter grades, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    D,
    #[serde(rename = "D-")]
    DMinus,
    F,
}

/// Minimum score for each grade, highest first. Anything below is `F`.
const THRESHOLDS: [(u32, Grade); 12] = [
    (250, Grade::APlus),
    (30, Grade::A),
    (28, Grade::AMinus),
    (25, Grade::BPlus),
    (23, Grade::B),
    (20, Grade::BMinus),
    (18, Grade::CPlus),
    (15, Grade::C),
    (13, Grade::CMinus),
    (10, Grade::DPlus),
    (8, Grade::D),
    (5, Grade::DMinus),
];

impl Grade {
    /// First threshold the score reaches wins
    pub fn from_score(score: u32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|&(_, grade)| grade)
            .unwrap_or(Grade::F)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
