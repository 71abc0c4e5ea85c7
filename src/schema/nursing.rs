//! Inpatient nursing report (24 sections).

use super::common::*;
use super::{SectionSchema, SectionSpec};
use crate::models::{ReportKind, SectionKind};

pub(super) static NURSING_SCHEMA: SectionSchema = SectionSchema {
    kind: ReportKind::Nursing,
    title: "Inpatient nursing report",
    sections: NURSING_SECTIONS,
    fingerprints: &[
        "nearest relative",
        "section 117 after-care",
        "nature of nursing care",
        "level of observation",
        "absent without leave",
        "secluded or restrained",
        "mental health act",
        "first-tier tribunal",
        "deal with the case fairly and justly",
    ],
};

const NURSING_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "patient_details",
        number: 1,
        kind: SectionKind::PatientDetails,
        heading_fragments: PATIENT_DETAILS_FRAGMENTS,
        heading_phrases: PATIENT_DETAILS_PHRASES,
    },
    SectionSpec {
        id: "factors_hearing",
        number: 2,
        kind: SectionKind::YesNo,
        heading_fragments: FACTORS_FRAGMENTS,
        heading_phrases: FACTORS_PHRASES,
    },
    SectionSpec {
        id: "adjustments",
        number: 3,
        kind: SectionKind::YesNo,
        heading_fragments: ADJUSTMENTS_FRAGMENTS,
        heading_phrases: ADJUSTMENTS_PHRASES,
    },
    SectionSpec {
        id: "nursing_care",
        number: 4,
        kind: SectionKind::Narrative,
        heading_fragments: &["nature of nursing care", "nursing care and medication"],
        heading_phrases: &[
            "what is the nature of nursing care and medication currently being made available to the patient",
            "what is the nature of the nursing care and medication currently being made available to the patient",
        ],
    },
    SectionSpec {
        id: "observation_level",
        number: 5,
        kind: SectionKind::Narrative,
        heading_fragments: &["current level of observation", "level of observation"],
        heading_phrases: &[
            "what is the patient's current level of observation",
            "what is the patients current level of observation",
        ],
    },
    SectionSpec {
        id: "contact_relatives",
        number: 6,
        kind: SectionKind::YesNo,
        heading_fragments: &["contact with relatives, friends", "contact with relatives"],
        heading_phrases: &[
            "does the patient have contact with relatives, friends or other patients",
            "does the patient have contact with relatives, friends or other patients and what is the nature of that interaction",
        ],
    },
    SectionSpec {
        id: "community_support",
        number: 7,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "what community support",
            "community support does the patient have",
        ],
        heading_phrases: &[
            "what community support does the patient have",
            "what community support does the patient have access to",
        ],
    },
    SectionSpec {
        id: "strengths",
        number: 8,
        kind: SectionKind::Narrative,
        heading_fragments: STRENGTHS_FRAGMENTS,
        heading_phrases: STRENGTHS_PHRASES,
    },
    SectionSpec {
        id: "progress",
        number: 9,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "summary of the patient's current progress",
            "engagement with nursing staff",
        ],
        heading_phrases: &[
            "give a summary of the patient's current progress, engagement with nursing staff, behaviour, cooperation, activities, self-care and insight",
            "give a summary of the patients current progress, engagement with nursing staff, behaviour, cooperation, activities, self-care and insight",
        ],
    },
    SectionSpec {
        id: "awol",
        number: 10,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "occasions on which the patient has been absent",
            "absent without leave",
        ],
        heading_phrases: &[
            "give details of any occasions on which the patient has been absent without leave",
            "give details of any occasions on which the patient has been absent without leave (awol)",
        ],
    },
    SectionSpec {
        id: "harm_incidents",
        number: 11,
        kind: SectionKind::Narrative,
        heading_fragments: HARM_FRAGMENTS,
        heading_phrases: HARM_PHRASES,
    },
    SectionSpec {
        id: "property_damage",
        number: 12,
        kind: SectionKind::Narrative,
        heading_fragments: PROPERTY_FRAGMENTS,
        heading_phrases: PROPERTY_PHRASES,
    },
    SectionSpec {
        id: "seclusion_restraint",
        number: 13,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "occasions on which the patient has been secluded",
            "secluded or restrained",
        ],
        heading_phrases: &[
            "give details of any occasions on which the patient has been secluded or restrained, including the reasons why this was necessary",
            "give details of any occasions on which the patient has been secluded or restrained including the reasons why this was necessary",
        ],
    },
    SectionSpec {
        id: "section2_detention",
        number: 14,
        kind: SectionKind::YesNo,
        heading_fragments: SECTION2_FRAGMENTS,
        heading_phrases: SECTION2_PHRASES,
    },
    SectionSpec {
        id: "treatment_justified",
        number: 15,
        kind: SectionKind::YesNo,
        heading_fragments: TREATMENT_JUSTIFIED_FRAGMENTS,
        heading_phrases: TREATMENT_JUSTIFIED_PHRASES,
    },
    SectionSpec {
        id: "discharge_risk",
        number: 16,
        kind: SectionKind::YesNo,
        heading_fragments: DISCHARGE_RISK_FRAGMENTS,
        heading_phrases: DISCHARGE_RISK_PHRASES,
    },
    SectionSpec {
        id: "community_risk",
        number: 17,
        kind: SectionKind::Narrative,
        heading_fragments: COMMUNITY_RISK_FRAGMENTS,
        heading_phrases: COMMUNITY_RISK_PHRASES,
    },
    SectionSpec {
        id: "compliance",
        number: 18,
        kind: SectionKind::Narrative,
        heading_fragments: COMPLIANCE_FRAGMENTS,
        heading_phrases: COMPLIANCE_PHRASES,
    },
    SectionSpec {
        id: "leave",
        number: 19,
        kind: SectionKind::Narrative,
        heading_fragments: &["leave of absence", "section 17 leave"],
        heading_phrases: &[
            "give details of any leave of absence from hospital the patient has taken and how it went",
            "give details of any section 17 leave the patient has taken and how it went",
        ],
    },
    SectionSpec {
        id: "nearest_relative_informed",
        number: 20,
        kind: SectionKind::YesNo,
        heading_fragments: NEAREST_RELATIVE_INFORMED_FRAGMENTS,
        heading_phrases: NEAREST_RELATIVE_INFORMED_PHRASES,
    },
    SectionSpec {
        id: "s117_aftercare",
        number: 21,
        kind: SectionKind::Narrative,
        heading_fragments: AFTERCARE_FRAGMENTS,
        heading_phrases: AFTERCARE_PHRASES,
    },
    SectionSpec {
        id: "other_information",
        number: 22,
        kind: SectionKind::Narrative,
        heading_fragments: OTHER_INFORMATION_FRAGMENTS,
        heading_phrases: OTHER_INFORMATION_PHRASES,
    },
    SectionSpec {
        id: "recommendations",
        number: 23,
        kind: SectionKind::Narrative,
        heading_fragments: RECOMMENDATIONS_FRAGMENTS,
        heading_phrases: RECOMMENDATIONS_PHRASES,
    },
    SectionSpec {
        id: "signature",
        number: 24,
        kind: SectionKind::Signature,
        heading_fragments: SIGNATURE_FRAGMENTS,
        heading_phrases: SIGNATURE_PHRASES,
    },
];
