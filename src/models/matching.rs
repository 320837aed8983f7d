use serde::Serialize;
use std::fmt;

/// Points scored on each of the eight Ashtakoot factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, schemars::JsonSchema)]
pub struct GunaBreakdown {
    /// Max 1
    pub varna: f64,
    /// Max 2
    pub vashya: f64,
    /// Traditional max 3
    pub tara: f64,
    /// Traditional max 4
    pub yoni: f64,
    /// Max 5
    pub graha_maitri: f64,
    /// Max 6
    pub gana: f64,
    /// Max 7
    pub bhakoot: f64,
    /// Max 8
    pub nadi: f64,
}

impl GunaBreakdown {
    pub fn total(&self) -> f64 {
        self.varna
            + self.vashya
            + self.tara
            + self.yoni
            + self.graha_maitri
            + self.gana
            + self.bhakoot
            + self.nadi
    }
}

/// Overall compatibility tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, schemars::JsonSchema)]
pub enum Verdict {
    Poor,
    Average,
    Good,
    Excellent,
}

impl Verdict {
    /// Tier for an unrounded total
    pub fn from_total(total: f64) -> Self {
        match total {
            t if t >= 28.0 => Verdict::Excellent,
            t if t >= 18.0 => Verdict::Good,
            t if t >= 10.0 => Verdict::Average,
            _ => Verdict::Poor,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Poor => "Poor",
            Verdict::Average => "Average",
            Verdict::Good => "Good",
            Verdict::Excellent => "Excellent",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, schemars::JsonSchema)]
pub struct CompatibilityScore {
    pub breakdown: GunaBreakdown,
    /// Sum of all factors out of 36
    pub total_score: f64,
    pub verdict: Verdict,
}

/// Kundli matching report
#[derive(Debug, Clone, PartialEq, Serialize, schemars::JsonSchema)]
pub struct MatchReport {
    /// Total score rounded down
    pub score: u32,
    pub verdict: Verdict,
    pub analysis: String,
    pub recommendations: String,
}

impl MatchReport {
    pub fn to_markdown(&self) -> String {
        format!(
            "### Match Score: {} / 36\n**Verdict:** {}\n\n{}\n\n**Recommendations:**\n{}",
            self.score, self.verdict, self.analysis, self.recommendations
        )
    }
}
