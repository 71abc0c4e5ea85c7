//! Headings shared verbatim by more than one report template.

/// Sub-questions templates stack directly after a main question.
pub const SUB_QUESTION_PHRASES: &[&str] = &[
    "if yes, please give details",
    "if so, please give details",
    "if yes, give details",
    "if yes, what are they",
    "if so, what are they",
    "if yes, please explain",
    "if so, please explain",
    "please give details",
    "please explain why",
];

pub(super) const PATIENT_DETAILS_FRAGMENTS: &[&str] =
    &["patient details", "patient's details", "name of patient"];
pub(super) const PATIENT_DETAILS_PHRASES: &[&str] = &[
    "patient details",
    "patient's details",
    "patients details",
];

pub(super) const FACTORS_FRAGMENTS: &[&str] = &[
    "factors that may affect the patient's understanding",
    "ability to cope with a hearing",
];
pub(super) const FACTORS_PHRASES: &[&str] = &[
    "are there any factors that may affect the patient's understanding or ability to cope with a hearing",
    "are there any factors that may affect the patients understanding or ability to cope with a hearing",
    "are there any factors that may affect the patient's understanding or ability to cope with the hearing",
];

pub(super) const ADJUSTMENTS_FRAGMENTS: &[&str] = &[
    "adjustments that the tribunal may consider",
    "deal with the case fairly and justly",
];
pub(super) const ADJUSTMENTS_PHRASES: &[&str] = &[
    "are there any adjustments that the tribunal may consider in order to deal with the case fairly and justly",
    "are there any adjustments that the tribunal may consider in order to deal with the case fairly and jusly",
    "are there any adjustments that the tribunal may consider to deal with the case fairly and justly",
];

pub(super) const STRENGTHS_FRAGMENTS: &[&str] = &["strengths or positive factors"];
pub(super) const STRENGTHS_PHRASES: &[&str] = &[
    "what are the strengths or positive factors relating to the patient",
    "strengths or positive factors",
];

pub(super) const COMPLIANCE_FRAGMENTS: &[&str] = &[
    "understanding of, compliance with",
    "likely future willingness to accept",
];
pub(super) const COMPLIANCE_PHRASES: &[&str] = &[
    "what is the patient's understanding of, compliance with, and likely future willingness to accept any prescribed medication or comply with any appropriate medical treatment for mental disorder that is or might be made available",
    "what is the patients understanding of, compliance with, and likely future willingness to accept any prescribed medication or comply with any appropriate medical treatment for mental disorder that is or might be made available",
    "what is the patient's understanding of, compliance with, and likely future willingness to accept any prescribed medication",
];

pub(super) const HARM_FRAGMENTS: &[&str] = &[
    "incidents where the patient has harmed themselves",
    "harmed themselves or others",
];
pub(super) const HARM_PHRASES: &[&str] = &[
    "give details of any incidents where the patient has harmed themselves or others, or threatened to harm themselves or others",
    "give details of any incidents where the patient has harmed themselves or others or threatened to harm themselves or others",
];

pub(super) const PROPERTY_FRAGMENTS: &[&str] = &[
    "incidents where the patient has damaged property",
    "damaged property",
];
pub(super) const PROPERTY_PHRASES: &[&str] = &[
    "give details of any incidents where the patient has damaged property, or threatened to damage property",
    "give details of any incidents where the patient has damaged property or threatened to damage property",
];

pub(super) const SECTION2_FRAGMENTS: &[&str] =
    &["in section 2 cases", "detention in hospital for assessment"];
pub(super) const SECTION2_PHRASES: &[&str] = &[
    "in section 2 cases is detention in hospital for assessment (or for assessment followed by medical treatment) justified or necessary in the interests of the patient's health or safety, or for the protection of others",
    "in section 2 cases is detention in hospital for assessment justified or necessary in the interests of the patient's health or safety, or for the protection of others",
];

pub(super) const TREATMENT_JUSTIFIED_FRAGMENTS: &[&str] = &[
    "in all other cases is the provision of medical treatment",
    "provision of medical treatment in hospital",
];
pub(super) const TREATMENT_JUSTIFIED_PHRASES: &[&str] = &[
    "in all other cases is the provision of medical treatment in hospital justified or necessary in the interests of the patient's health or safety, or for the protection of others",
    "in all other cases is the provision of medical treatment in hospital justified or necessary in the interests of the patients health or safety, or for the protection of others",
];

pub(super) const DISCHARGE_RISK_FRAGMENTS: &[&str] = &[
    "if the patient was discharged from hospital",
    "act in a manner dangerous",
];
pub(super) const DISCHARGE_RISK_PHRASES: &[&str] = &[
    "if the patient was discharged from hospital, would they be likely to act in a manner dangerous to themselves or others",
    "if the patient were discharged from hospital, would they be likely to act in a manner dangerous to themselves or others",
];

pub(super) const COMMUNITY_RISK_FRAGMENTS: &[&str] = &[
    "how any risks could be managed effectively in the community",
    "risks could be managed effectively",
];
pub(super) const COMMUNITY_RISK_PHRASES: &[&str] = &[
    "please explain how any risks could be managed effectively in the community, including the use of any lawful conditions or recall powers",
    "please explain how risks could be managed effectively in the community, including the use of any lawful conditions or recall powers",
];

pub(super) const NEAREST_RELATIVE_INFORMED_FRAGMENTS: &[&str] = &[
    "reason why the patient's nearest relative",
    "nearest relative should not be informed",
];
pub(super) const NEAREST_RELATIVE_INFORMED_PHRASES: &[&str] = &[
    "is there any reason why the patient's nearest relative should not be informed of the hearing",
    "is there any reason why the patients nearest relative should not be informed of the hearing",
];

pub(super) const AFTERCARE_FRAGMENTS: &[&str] = &[
    "arrangements are in place for section 117",
    "section 117 after-care",
    "section 117 aftercare",
];
pub(super) const AFTERCARE_PHRASES: &[&str] = &[
    "what arrangements are in place for section 117 after-care",
    "what arrangements are in place for section 117 aftercare",
    "section 117 after-care",
];

pub(super) const OTHER_INFORMATION_FRAGMENTS: &[&str] = &[
    "other relevant information that the tribunal should know",
    "any other relevant information",
];
pub(super) const OTHER_INFORMATION_PHRASES: &[&str] = &[
    "is there any other relevant information that the tribunal should know",
    "is there any other relevant information the tribunal should know",
];

pub(super) const RECOMMENDATIONS_FRAGMENTS: &[&str] = &[
    "recommendations to the tribunal",
    "do you have any recommendations",
];
pub(super) const RECOMMENDATIONS_PHRASES: &[&str] = &[
    "do you have any recommendations to the tribunal, with reasons",
    "do you have any recommendations to the tribunal",
];

pub(super) const SIGNATURE_FRAGMENTS: &[&str] = &["signature:", "signed:", "signature"];
pub(super) const SIGNATURE_PHRASES: &[&str] = &["signature", "signed"];
