// src/model/result.rs
use serde::{Serialize, Deserialize};

/// Analysis returned by the service. Every field is required, so a body that
/// is missing one fails to deserialize instead of rendering half empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scenario_summary: String,
    pub potential_pitfalls: Vec<String>,
    pub proposed_strategies: Vec<String>,
    pub recommended_resources: Vec<String>,
    pub disclaimer: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionBody<'a> {
    Text(&'a str),
    List(&'a [String]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultSection<'a> {
    pub title: &'static str,
    pub body: SectionBody<'a>,
}

impl AnalysisResult {
    /// Labeled sections in display order.
    pub fn sections(&self) -> [ResultSection<'_>; 5] {
        [
            ResultSection {
                title: "Scenario Summary",
                body: SectionBody::Text(&self.scenario_summary),
            },
            ResultSection {
                title: "Potential Pitfalls",
                body: SectionBody::List(&self.potential_pitfalls),
            },
            ResultSection {
                title: "Proposed Strategies",
                body: SectionBody::List(&self.proposed_strategies),
            },
            ResultSection {
                title: "Recommended Resources",
                body: SectionBody::List(&self.recommended_resources),
            },
            ResultSection {
                title: "Disclaimer",
                body: SectionBody::Text(&self.disclaimer),
            },
        ]
    }
}
