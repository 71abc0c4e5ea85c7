use crate::models::DiagnosisCategory;
use crate::pipeline::text::{contains_keyword, NormalizedText};

use super::types::Diagnosis;

/// Maximum diagnoses recovered from one span.
pub const MAX_DIAGNOSES: usize = 3;

struct DiagnosisPattern {
    terms: &'static [&'static str],
    code: &'static str,
    category: DiagnosisCategory,
    label: &'static str,
}

// ═══════════════════════════════════════════════════════════
// ICD-10 table, subtypes before their parents
// ═══════════════════════════════════════════════════════════

const DIAGNOSIS_TABLE: &[DiagnosisPattern] = &[
    DiagnosisPattern {
        terms: &["paranoid schizophrenia", "f20.0"],
        code: "F20.0",
        category: DiagnosisCategory::Psychotic,
        label: "Paranoid schizophrenia",
    },
    DiagnosisPattern {
        terms: &["schizoaffective", "f25"],
        code: "F25",
        category: DiagnosisCategory::Psychotic,
        label: "Schizoaffective disorder",
    },
    DiagnosisPattern {
        terms: &["schizophrenia", "f20"],
        code: "F20",
        category: DiagnosisCategory::Psychotic,
        label: "Schizophrenia",
    },
    DiagnosisPattern {
        terms: &["delusional disorder", "f22"],
        code: "F22",
        category: DiagnosisCategory::Psychotic,
        label: "Persistent delusional disorder",
    },
    DiagnosisPattern {
        terms: &["psychotic disorder", "psychosis", "f29"],
        code: "F29",
        category: DiagnosisCategory::Psychotic,
        label: "Unspecified nonorganic psychosis",
    },
    DiagnosisPattern {
        terms: &["bipolar affective disorder", "bipolar disorder", "bipolar", "f31"],
        code: "F31",
        category: DiagnosisCategory::Mood,
        label: "Bipolar affective disorder",
    },
    DiagnosisPattern {
        terms: &["recurrent depressive disorder", "f33"],
        code: "F33",
        category: DiagnosisCategory::Mood,
        label: "Recurrent depressive disorder",
    },
    DiagnosisPattern {
        terms: &["depressive episode", "depression", "f32"],
        code: "F32",
        category: DiagnosisCategory::Mood,
        label: "Depressive episode",
    },
    DiagnosisPattern {
        terms: &["post-traumatic stress disorder", "post traumatic stress disorder", "ptsd", "f43.1"],
        code: "F43.1",
        category: DiagnosisCategory::Anxiety,
        label: "Post-traumatic stress disorder",
    },
    DiagnosisPattern {
        terms: &["generalised anxiety disorder", "generalized anxiety disorder", "f41.1"],
        code: "F41.1",
        category: DiagnosisCategory::Anxiety,
        label: "Generalised anxiety disorder",
    },
    DiagnosisPattern {
        terms: &["obsessive-compulsive disorder", "obsessive compulsive disorder", "ocd", "f42"],
        code: "F42",
        category: DiagnosisCategory::Anxiety,
        label: "Obsessive-compulsive disorder",
    },
    DiagnosisPattern {
        terms: &[
            "emotionally unstable personality disorder",
            "borderline personality disorder",
            "eupd",
            "f60.3",
        ],
        code: "F60.3",
        category: DiagnosisCategory::Personality,
        label: "Emotionally unstable personality disorder",
    },
    DiagnosisPattern {
        terms: &["dissocial personality disorder", "antisocial personality disorder", "f60.2"],
        code: "F60.2",
        category: DiagnosisCategory::Personality,
        label: "Dissocial personality disorder",
    },
    DiagnosisPattern {
        terms: &["personality disorder", "f60"],
        code: "F60",
        category: DiagnosisCategory::Personality,
        label: "Specific personality disorder",
    },
    DiagnosisPattern {
        terms: &["alcohol dependence", "alcohol dependency", "f10.2"],
        code: "F10.2",
        category: DiagnosisCategory::Substance,
        label: "Alcohol dependence syndrome",
    },
    DiagnosisPattern {
        terms: &["cannabis", "f12"],
        code: "F12",
        category: DiagnosisCategory::Substance,
        label: "Disorder due to use of cannabinoids",
    },
    DiagnosisPattern {
        terms: &["polysubstance", "multiple drug use", "f19"],
        code: "F19",
        category: DiagnosisCategory::Substance,
        label: "Disorder due to multiple drug use",
    },
    DiagnosisPattern {
        terms: &["autism", "autistic spectrum disorder", "autism spectrum disorder", "asd", "f84.0"],
        code: "F84.0",
        category: DiagnosisCategory::Neurodevelopmental,
        label: "Autism spectrum disorder",
    },
    DiagnosisPattern {
        terms: &["attention deficit hyperactivity disorder", "adhd", "f90.0"],
        code: "F90.0",
        category: DiagnosisCategory::Neurodevelopmental,
        label: "Attention deficit hyperactivity disorder",
    },
    DiagnosisPattern {
        terms: &["learning disability", "intellectual disability", "f79"],
        code: "F79",
        category: DiagnosisCategory::Neurodevelopmental,
        label: "Learning disability",
    },
    DiagnosisPattern {
        terms: &["dementia", "f03"],
        code: "F03",
        category: DiagnosisCategory::Organic,
        label: "Dementia",
    },
    DiagnosisPattern {
        terms: &["anorexia nervosa", "f50.0"],
        code: "F50.0",
        category: DiagnosisCategory::Eating,
        label: "Anorexia nervosa",
    },
    DiagnosisPattern {
        terms: &["bulimia nervosa", "f50.2"],
        code: "F50.2",
        category: DiagnosisCategory::Eating,
        label: "Bulimia nervosa",
    },
];

/// Recognise up to three diagnoses, at most one per category.
///
/// Entries are tested in table order so a subtype (paranoid schizophrenia)
/// claims its category before the parent term can.
pub fn extract_diagnoses(text: &str) -> Vec<Diagnosis> {
    let norm = NormalizedText::new(text);
    let haystack = norm.as_str();
    let mut found: Vec<Diagnosis> = Vec::new();

    for pattern in DIAGNOSIS_TABLE {
        if found.len() >= MAX_DIAGNOSES {
            break;
        }
        if found.iter().any(|d| d.category == pattern.category) {
            continue;
        }
        if pattern.terms.iter().any(|term| contains_keyword(haystack, term)) {
            found.push(Diagnosis {
                code: pattern.code.to_string(),
                category: pattern.category,
                label: pattern.label.to_string(),
            });
        }
    }
    found
}
