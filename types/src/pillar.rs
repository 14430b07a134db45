//! The three ESG pillars and their per-record metric values.

use crate::score::Score;
use serde::Deserialize;
use serde::Serialize;

/// One of the three ESG scoring categories. Cardinality and order are fixed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Pillar {
    Environment,
    Social,
    Governance,
}

impl Pillar {
    /// All pillars in display order (left to right).
    pub const ALL: [Pillar; 3] = [Pillar::Environment, Pillar::Social, Pillar::Governance];

    /// Stable 1-based identifier.
    pub fn id(&self) -> u8 {
        match self {
            Self::Environment => 1,
            Self::Social => 2,
            Self::Governance => 3,
        }
    }

    /// Position in [`Pillar::ALL`].
    pub fn index(&self) -> usize {
        usize::from(self.id() - 1)
    }

    /// Single-letter code used by the metric catalog (`E`, `S`, `G`).
    pub fn code(&self) -> char {
        match self {
            Self::Environment => 'E',
            Self::Social => 'S',
            Self::Governance => 'G',
        }
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Presentation-only colour tag.
    pub fn color_tag(&self) -> &'static str {
        match self {
            Self::Environment => "emerald",
            Self::Social => "blue",
            Self::Governance => "purple",
        }
    }

    /// Share of the total ESG score contributed by this pillar.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Environment => 0.35,
            Self::Social => 0.35,
            Self::Governance => 0.30,
        }
    }
}

/// The current value of one pillar on a company record.
///
/// Identity fields (`id`, `label`, `color_tag`) derive from the pillar and
/// never change; only `value` is mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarMetric {
    pillar: Pillar,
    value: Score,
}

impl PillarMetric {
    pub(crate) fn new(pillar: Pillar) -> Self {
        Self {
            pillar,
            value: Score::ZERO,
        }
    }

    pub fn pillar(&self) -> Pillar {
        self.pillar
    }

    pub fn id(&self) -> u8 {
        self.pillar.id()
    }

    pub fn label(&self) -> &'static str {
        self.pillar.label()
    }

    pub fn color_tag(&self) -> &'static str {
        self.pillar.color_tag()
    }

    pub fn value(&self) -> Score {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: Score) {
        self.value = value;
    }
}
