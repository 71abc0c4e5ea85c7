use serde::{Deserialize, Serialize};

use crate::models::MatchPolicy;
use crate::pipeline::text::contains_keyword;

/// One note-classification bucket and how notes qualify for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub id: String,
    /// Report sections this bucket feeds.
    #[serde(default)]
    pub section_ids: Vec<String>,
    pub policy: MatchPolicy,
    /// Whole-word, case-insensitive. Unused by `EpisodeWindowed`.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(id: &str, section_ids: &[&str], policy: MatchPolicy, keywords: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            section_ids: section_ids.iter().map(|s| s.to_string()).collect(),
            policy,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// `body_lower` must already be normalised.
    pub fn matches_keyword(&self, body_lower: &str) -> bool {
        self.keywords.iter().any(|k| contains_keyword(body_lower, k))
    }
}

/// Standard bucket catalog for tribunal report preparation.
pub fn default_category_rules() -> Vec<CategoryRule> {
    use MatchPolicy::*;

    vec![
        CategoryRule::new(
            "admission_clerking",
            &["current_admission", "previous_admission_reasons"],
            EpisodeWindowed,
            &[],
        ),
        CategoryRule::new(
            "current_admission",
            &["current_admission"],
            RecentEpisodeWindowed,
            &[
                "admitted",
                "admission",
                "presented",
                "brought in",
                "detained",
                "section 2",
                "section 3",
                "place of safety",
                "a&e",
            ],
        ),
        CategoryRule::new(
            "forensic_history",
            &["forensic_history"],
            GlobalKeyword,
            &[
                "arrested",
                "charged",
                "convicted",
                "conviction",
                "offence",
                "prison",
                "probation",
                "court",
                "custody",
                "police caution",
            ],
        ),
        CategoryRule::new(
            "housing",
            &["community_support", "s117_aftercare"],
            GlobalKeyword,
            &[
                "housing",
                "accommodation",
                "tenancy",
                "homeless",
                "evicted",
                "eviction",
                "hostel",
                "landlord",
            ],
        ),
        CategoryRule::new(
            "finances",
            &["community_support", "s117_aftercare"],
            GlobalKeyword,
            &[
                "benefits",
                "universal credit",
                "pip",
                "debt",
                "debts",
                "finances",
                "appointee",
                "rent arrears",
            ],
        ),
        CategoryRule::new(
            "substance_use",
            &["progress", "current_admission"],
            GlobalKeyword,
            &[
                "cannabis",
                "cocaine",
                "alcohol",
                "intoxicated",
                "spice",
                "heroin",
                "illicit",
                "drug screen",
                "uds",
            ],
        ),
        CategoryRule::new(
            "incidents",
            &["harm_incidents", "property_damage", "seclusion_restraint"],
            GlobalKeyword,
            &[
                "assault",
                "assaulted",
                "punched",
                "kicked",
                "restrained",
                "restraint",
                "secluded",
                "seclusion",
                "self-harm",
                "ligature",
                "smashed",
                "threatened",
                "datix",
            ],
        ),
        CategoryRule::new(
            "medication_compliance",
            &["compliance"],
            GlobalKeyword,
            &[
                "refused medication",
                "declined medication",
                "non-compliant",
                "non-compliance",
                "non-adherent",
                "depot",
                "missed dose",
                "covert",
                "compliant with medication",
            ],
        ),
        CategoryRule::new(
            "physical_health",
            &["other_information"],
            GlobalKeyword,
            &[
                "ecg",
                "bloods",
                "blood test",
                "blood pressure",
                "diabetes",
                "bmi",
                "physical health",
            ],
        ),
    ]
}
