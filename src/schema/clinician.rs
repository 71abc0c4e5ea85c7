//! Responsible clinician's report (31 sections).

use super::common::*;
use super::{SectionSchema, SectionSpec};
use crate::models::{ReportKind, SectionKind};

pub(super) static CLINICIAN_SCHEMA: SectionSchema = SectionSchema {
    kind: ReportKind::Clinician,
    title: "Responsible clinician's report",
    sections: CLINICIAN_SECTIONS,
    fingerprints: &[
        "nearest relative",
        "section 117 after-care",
        "responsible clinician",
        "index offence",
        "mental health act",
        "first-tier tribunal",
        "community treatment order",
        "deal with the case fairly and justly",
        "detained in a hospital for assessment",
        "multi-agency public protection",
    ],
};

const CLINICIAN_SECTIONS: &[SectionSpec] = &[
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
        id: "forensic_history",
        number: 4,
        kind: SectionKind::Narrative,
        heading_fragments: &["index offence", "forensic history"],
        heading_phrases: &[
            "what is the patient's index offence(s) and other relevant forensic history",
            "what is the patients index offence(s) and other relevant forensic history",
            "index offence(s) and forensic history",
            "index offence",
        ],
    },
    SectionSpec {
        id: "previous_involvement",
        number: 5,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "chronology listing the patient's previous involvement",
            "previous involvement with mental health services",
        ],
        heading_phrases: &[
            "give a chronology listing the patient's previous involvement with mental health services including any admissions to, discharge from and recall to hospital",
            "give a chronology listing the patients previous involvement with mental health services including any admissions to, discharge from and recall to hospital",
            "previous involvement with mental health services",
        ],
    },
    SectionSpec {
        id: "previous_admission_reasons",
        number: 6,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "reasons for any previous admission",
            "reasons for previous admission",
        ],
        heading_phrases: &[
            "give reasons for any previous admission or recall to hospital",
            "give reasons for any previous admissions or recalls to hospital",
        ],
    },
    SectionSpec {
        id: "current_admission",
        number: 7,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "circumstances leading up to the patient's current admission",
            "circumstances leading to the current admission",
        ],
        heading_phrases: &[
            "what are the circumstances leading up to the patient's current admission to hospital",
            "what are the circumstances leading up to the patients current admission to hospital",
            "circumstances leading to the current admission",
        ],
    },
    SectionSpec {
        id: "mental_disorder",
        number: 8,
        kind: SectionKind::YesNo,
        heading_fragments: &[
            "now suffering from a mental disorder",
            "suffering from a mental disorder",
        ],
        heading_phrases: &[
            "is the patient now suffering from a mental disorder",
            "is the patient suffering from a mental disorder",
        ],
    },
    SectionSpec {
        id: "diagnosis",
        number: 9,
        kind: SectionKind::Diagnosis,
        heading_fragments: &["has a diagnosis been made", "what is the diagnosis"],
        heading_phrases: &[
            "has a diagnosis been made and, if so, what is the diagnosis",
            "has a diagnosis been made and if so what is the diagnosis",
            "what is the diagnosis",
        ],
    },
    SectionSpec {
        id: "learning_disability",
        number: 10,
        kind: SectionKind::YesNo,
        heading_fragments: &[
            "does the patient have a learning disability",
            "have a learning disability",
        ],
        heading_phrases: &[
            "does the patient have a learning disability",
            "does the patient have a learning dissability",
        ],
    },
    SectionSpec {
        id: "detention_required",
        number: 11,
        kind: SectionKind::YesNo,
        heading_fragments: &[
            "mental disorder present which requires the patient to be detained",
            "requires the patient to be detained",
        ],
        heading_phrases: &[
            "is there any mental disorder present which requires the patient to be detained in a hospital for assessment and/or medical treatment",
            "is there any mental disorder present which requires the patient to be detained in hospital for assessment and/or medical treatment",
        ],
    },
    SectionSpec {
        id: "treatment",
        number: 12,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "appropriate and available medical treatment",
            "medical treatment has been prescribed",
        ],
        heading_phrases: &[
            "what appropriate and available medical treatment has been prescribed, provided, offered or is planned for the patient's mental disorder",
            "what appropriate and available medical treatment has been prescribed, provided, offered or is planned for the patients mental disorder",
        ],
    },
    SectionSpec {
        id: "strengths",
        number: 13,
        kind: SectionKind::Narrative,
        heading_fragments: STRENGTHS_FRAGMENTS,
        heading_phrases: STRENGTHS_PHRASES,
    },
    SectionSpec {
        id: "progress",
        number: 14,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "summary of the patient's current progress",
            "current progress, behaviour",
        ],
        heading_phrases: &[
            "give a summary of the patient's current progress, behaviour, capacity and insight",
            "give a summary of the patients current progress, behaviour, capacity and insight",
        ],
    },
    SectionSpec {
        id: "compliance",
        number: 15,
        kind: SectionKind::Narrative,
        heading_fragments: COMPLIANCE_FRAGMENTS,
        heading_phrases: COMPLIANCE_PHRASES,
    },
    SectionSpec {
        id: "mca_dols",
        number: 16,
        kind: SectionKind::YesNo,
        heading_fragments: &[
            "eligible compliant patient who lacks capacity",
            "deprivation of liberty under the mental capacity act",
        ],
        heading_phrases: &[
            "in the case of an eligible compliant patient who lacks capacity to agree or object to their detention or treatment, state whether or not deprivation of liberty under the mental capacity act 2005 would be appropriate and less restrictive",
            "in the case of an eligible compliant patient who lacks capacity to agree or object to their detention or treatment, state whether or not deprivation of liberty under the mental capacity act 2005 (mca) would be appropriate and less restrictive",
        ],
    },
    SectionSpec {
        id: "harm_incidents",
        number: 17,
        kind: SectionKind::Narrative,
        heading_fragments: HARM_FRAGMENTS,
        heading_phrases: HARM_PHRASES,
    },
    SectionSpec {
        id: "property_damage",
        number: 18,
        kind: SectionKind::Narrative,
        heading_fragments: PROPERTY_FRAGMENTS,
        heading_phrases: PROPERTY_PHRASES,
    },
    SectionSpec {
        id: "section2_detention",
        number: 19,
        kind: SectionKind::YesNo,
        heading_fragments: SECTION2_FRAGMENTS,
        heading_phrases: SECTION2_PHRASES,
    },
    SectionSpec {
        id: "treatment_justified",
        number: 20,
        kind: SectionKind::YesNo,
        heading_fragments: TREATMENT_JUSTIFIED_FRAGMENTS,
        heading_phrases: TREATMENT_JUSTIFIED_PHRASES,
    },
    SectionSpec {
        id: "discharge_risk",
        number: 21,
        kind: SectionKind::YesNo,
        heading_fragments: DISCHARGE_RISK_FRAGMENTS,
        heading_phrases: DISCHARGE_RISK_PHRASES,
    },
    SectionSpec {
        id: "community_risk",
        number: 22,
        kind: SectionKind::Narrative,
        heading_fragments: COMMUNITY_RISK_FRAGMENTS,
        heading_phrases: COMMUNITY_RISK_PHRASES,
    },
    SectionSpec {
        id: "community_treatment_order",
        number: 23,
        kind: SectionKind::YesNo,
        heading_fragments: &["in community treatment order cases", "power to recall the patient"],
        heading_phrases: &[
            "in community treatment order cases, is it necessary that the responsible clinician should be able to exercise the power to recall the patient to hospital",
            "in community treatment order cases, is it necessary that the responsible clinican should be able to exercise the power to recall the patient to hospital",
        ],
    },
    SectionSpec {
        id: "nearest_relative_informed",
        number: 24,
        kind: SectionKind::YesNo,
        heading_fragments: NEAREST_RELATIVE_INFORMED_FRAGMENTS,
        heading_phrases: NEAREST_RELATIVE_INFORMED_PHRASES,
    },
    SectionSpec {
        id: "nearest_relative_views",
        number: 25,
        kind: SectionKind::Narrative,
        heading_fragments: &[
            "views of the patient's nearest relative",
            "nearest relative's views",
        ],
        heading_phrases: &[
            "what are the views of the patient's nearest relative, if known",
            "what are the views of the patients nearest relative, if known",
            "nearest relative's views",
        ],
    },
    SectionSpec {
        id: "s117_aftercare",
        number: 26,
        kind: SectionKind::Narrative,
        heading_fragments: AFTERCARE_FRAGMENTS,
        heading_phrases: AFTERCARE_PHRASES,
    },
    SectionSpec {
        id: "victims",
        number: 27,
        kind: SectionKind::YesNo,
        heading_fragments: &[
            "victims who are entitled",
            "domestic violence, crime and victims act",
        ],
        heading_phrases: &[
            "are there any victims who are entitled to make representations to the tribunal",
            "are there any victims who are entitled to make representations under the domestic violence, crime and victims act 2004",
        ],
    },
    SectionSpec {
        id: "mappa",
        number: 28,
        kind: SectionKind::YesNo,
        heading_fragments: &["multi-agency public protection arrangements", "subject to mappa"],
        heading_phrases: &[
            "is the patient subject to multi-agency public protection arrangements (mappa)",
            "is the patient subject to mappa",
        ],
    },
    SectionSpec {
        id: "other_information",
        number: 29,
        kind: SectionKind::Narrative,
        heading_fragments: OTHER_INFORMATION_FRAGMENTS,
        heading_phrases: OTHER_INFORMATION_PHRASES,
    },
    SectionSpec {
        id: "recommendations",
        number: 30,
        kind: SectionKind::Narrative,
        heading_fragments: RECOMMENDATIONS_FRAGMENTS,
        heading_phrases: RECOMMENDATIONS_PHRASES,
    },
    SectionSpec {
        id: "signature",
        number: 31,
        kind: SectionKind::Signature,
        heading_fragments: SIGNATURE_FRAGMENTS,
        heading_phrases: SIGNATURE_PHRASES,
    },
];
