//! Methodology stages and the phase alphabet.

use serde::{Deserialize, Serialize};

/// Single-letter methodology phase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    A,
    B,
    C,
    D,
    H,
    W,
}

impl Phase {
    /// The letter shown in cards and tables.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::H => 'H',
            Self::W => 'W',
        }
    }

    /// Full phase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "AI-Enhanced Start-up",
            Self::B => "Predictive Maturity Assessment",
            Self::C => "Predictive Planning",
            Self::D => "Smart Resource Management",
            Self::H => "Benefits Intelligence",
            Self::W => "Sustainability Integration",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A methodology stage and the phases it groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    /// Roman numeral id ("I".."IV").
    pub id: &'static str,
    pub name: &'static str,
    pub phases: Vec<Phase>,
}

impl Stage {
    /// Expander heading, e.g. `Stage I: AI-Powered Start-up`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Stage {}: {}", self.id, self.name)
    }
}
