use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DiagnosisCategory;

/// An ICD-10 diagnosis recognised in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub code: String,
    pub category: DiagnosisCategory,
    pub label: String,
}

/// Identifying details from a report's patient-details section.
/// Each field is set only when its label was found with a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// Formatted `XXX XXX XXXX` when ten digits were present.
    pub nhs_number: Option<String>,
    pub address: Option<String>,
    pub hospital: Option<String>,
}

impl PatientDetails {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date_of_birth.is_none()
            && self.nhs_number.is_none()
            && self.address.is_none()
            && self.hospital.is_none()
    }

    /// Fill unset fields from `other`, keeping every value already present.
    pub fn fill_missing(&mut self, other: PatientDetails) {
        self.name = self.name.take().or(other.name);
        self.date_of_birth = self.date_of_birth.or(other.date_of_birth);
        self.nhs_number = self.nhs_number.take().or(other.nhs_number);
        self.address = self.address.take().or(other.address);
        self.hospital = self.hospital.take().or(other.hospital);
    }
}

/// Signatory block at the end of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDetails {
    pub name: Option<String>,
    pub role: Option<String>,
    pub date: Option<NaiveDate>,
}

impl SignatureDetails {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.date.is_none()
    }
}

/// Typed fields attached to a parsed section, chosen by its `SectionKind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionFields {
    PatientDetails(PatientDetails),
    Diagnoses(Vec<Diagnosis>),
    Signature(SignatureDetails),
}
