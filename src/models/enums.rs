use serde::{Deserialize, Serialize};

use crate::pipeline::EngineError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EngineError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(ReportKind {
    Clinician => "clinician",
    Nursing => "nursing",
});

str_enum!(DocumentKind {
    PriorReport => "prior_report",
    ClinicalNotes => "clinical_notes",
});

str_enum!(Answer {
    Yes => "yes",
    No => "no",
    NotApplicable => "na",
});

str_enum!(EpisodeKind {
    Inpatient => "inpatient",
    Community => "community",
});

str_enum!(SectionKind {
    Narrative => "narrative",
    YesNo => "yes_no",
    PatientDetails => "patient_details",
    Diagnosis => "diagnosis",
    Signature => "signature",
});

str_enum!(MatchPolicy {
    EpisodeWindowed => "episode_windowed",
    RecentEpisodeWindowed => "recent_episode_windowed",
    GlobalKeyword => "global_keyword",
});

str_enum!(DiagnosisCategory {
    Psychotic => "psychotic",
    Mood => "mood",
    Anxiety => "anxiety",
    Personality => "personality",
    Substance => "substance",
    Neurodevelopmental => "neurodevelopmental",
    Organic => "organic",
    Eating => "eating",
});

impl Answer {
    /// Display label used when a detected answer is rendered back into text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::NotApplicable => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn report_kind_round_trip() {
        for (variant, s) in [
            (ReportKind::Clinician, "clinician"),
            (ReportKind::Nursing, "nursing"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ReportKind::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn answer_round_trip() {
        for (variant, s) in [
            (Answer::Yes, "yes"),
            (Answer::No, "no"),
            (Answer::NotApplicable, "na"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Answer::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn match_policy_round_trip() {
        for (variant, s) in [
            (MatchPolicy::EpisodeWindowed, "episode_windowed"),
            (MatchPolicy::RecentEpisodeWindowed, "recent_episode_windowed"),
            (MatchPolicy::GlobalKeyword, "global_keyword"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(MatchPolicy::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_string_names() {
        let json = serde_json::to_string(&EpisodeKind::Inpatient).unwrap();
        assert_eq!(json, "\"inpatient\"");
        let kind: SectionKind = serde_json::from_str("\"patient_details\"").unwrap();
        assert_eq!(kind, SectionKind::PatientDetails);
        let answer: Answer = serde_json::from_str("\"na\"").unwrap();
        assert_eq!(answer, Answer::NotApplicable);
    }

    #[test]
    fn answer_labels() {
        assert_eq!(Answer::Yes.label(), "Yes");
        assert_eq!(Answer::NotApplicable.label(), "N/A");
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(ReportKind::from_str("tribunal").is_err());
        assert!(Answer::from_str("maybe").is_err());
        assert!(DocumentKind::from_str("").is_err());
    }
}
