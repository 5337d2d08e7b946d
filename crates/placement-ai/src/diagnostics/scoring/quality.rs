use serde::{Deserialize, Serialize};

/// Reliability band attached to every scoring result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBand {
    Insufficient,
    Partial,
    Sufficient,
}

impl QualityBand {
    pub const fn label(self) -> &'static str {
        match self {
            QualityBand::Insufficient => "insufficient",
            QualityBand::Partial => "partial",
            QualityBand::Sufficient => "sufficient",
        }
    }
}

/// How much of the submission the indices actually rest on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    pub quality: QualityBand,
    /// Domains with enough rated skills to carry a score.
    pub active_domains: usize,
}

/// Cut points mapping the active-domain count to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPolicy {
    pub partial_min: usize,
    pub sufficient_min: usize,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            partial_min: 1,
            sufficient_min: 3,
        }
    }
}

impl QualityPolicy {
    /// Band for a given number of active domains. Zero active domains always
    /// lands in `Insufficient`, whatever the cut points say, and inverted cut
    /// points are read as the higher band winning.
    pub fn classify(&self, active_domains: usize) -> DataQuality {
        let partial_min = self.partial_min.max(1);
        let sufficient_min = self.sufficient_min.max(partial_min);

        let quality = if active_domains >= sufficient_min {
            QualityBand::Sufficient
        } else if active_domains >= partial_min {
            QualityBand::Partial
        } else {
            QualityBand::Insufficient
        };

        DataQuality {
            quality,
            active_domains,
        }
    }
}
