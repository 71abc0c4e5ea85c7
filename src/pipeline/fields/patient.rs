use std::collections::BTreeMap;

use super::date::{find_date, parse_date};
use super::identifier::{nhs_number_checksum_valid, normalize_nhs_number};
use super::labeled::split_labeled_fields;
use super::types::{PatientDetails, SignatureDetails};
use crate::pipeline::text::normalize_phrase;

/// Field → label spellings seen on patient-details blocks.
const NAME_LABELS: &[&str] = &["full name", "patient name", "patient's name", "name"];
const DOB_LABELS: &[&str] = &["date of birth", "d.o.b.", "d.o.b", "dob"];
const NHS_LABELS: &[&str] = &["nhs number", "nhs no.", "nhs no"];
const ADDRESS_LABELS: &[&str] = &["usual address", "home address", "address"];
const HOSPITAL_LABELS: &[&str] = &["current hospital", "hospital", "ward"];

const SIGNATORY_NAME_LABELS: &[&str] = &["print name", "printed name", "full name", "name"];
const SIGNED_LABELS: &[&str] = &["signed", "signature"];
const ROLE_LABELS: &[&str] = &["designation", "profession", "job title", "role"];
const SIGNATURE_DATE_LABELS: &[&str] = &["date of report", "date signed", "date"];

/// Recover identifying details from a patient-details span.
pub fn extract_patient_details(text: &str) -> PatientDetails {
    let labels: Vec<&str> = [NAME_LABELS, DOB_LABELS, NHS_LABELS, ADDRESS_LABELS, HOSPITAL_LABELS]
        .concat();
    let fields = split_labeled_fields(text, &labels);
    details_from_fields(&fields)
}

/// Map loose extractor fields (e.g. a header table) onto patient details.
/// Keys are matched against the same label spellings, case-insensitively.
pub fn details_from_field_map(map: &BTreeMap<String, String>) -> PatientDetails {
    let fields: BTreeMap<String, String> = map
        .iter()
        .map(|(k, v)| (normalize_phrase(k), v.trim().to_string()))
        .filter(|(_, v)| !v.is_empty())
        .collect();
    details_from_fields(&fields)
}

fn details_from_fields(fields: &BTreeMap<String, String>) -> PatientDetails {
    let nhs_number = first_value(fields, NHS_LABELS).map(|raw| {
        let formatted = normalize_nhs_number(raw);
        if !nhs_number_checksum_valid(&formatted) {
            tracing::warn!("NHS number failed checksum validation; kept as written");
        }
        formatted
    });

    PatientDetails {
        name: first_value(fields, NAME_LABELS).map(str::to_string),
        date_of_birth: first_value(fields, DOB_LABELS).and_then(parse_date),
        nhs_number,
        address: first_value(fields, ADDRESS_LABELS).map(str::to_string),
        hospital: first_value(fields, HOSPITAL_LABELS).map(str::to_string),
    }
}

/// Signatory name, role and report date from a signature span.
///
/// The date comes from a labelled value when present, otherwise the first
/// date written anywhere in the span.
pub fn extract_signature(text: &str) -> SignatureDetails {
    let labels: Vec<&str> = [
        SIGNATORY_NAME_LABELS,
        SIGNED_LABELS,
        ROLE_LABELS,
        SIGNATURE_DATE_LABELS,
    ]
    .concat();
    let fields = split_labeled_fields(text, &labels);

    let name = first_value(&fields, SIGNATORY_NAME_LABELS)
        .or_else(|| {
            first_value(&fields, SIGNED_LABELS).filter(|v| !v.chars().any(|c| c.is_ascii_digit()))
        })
        .map(str::to_string);

    let date = first_value(&fields, SIGNATURE_DATE_LABELS)
        .and_then(parse_date)
        .or_else(|| find_date(text));

    SignatureDetails {
        name,
        role: first_value(&fields, ROLE_LABELS).map(str::to_string),
        date,
    }
}

fn first_value<'a>(fields: &'a BTreeMap<String, String>, labels: &[&str]) -> Option<&'a str> {
    labels
        .iter()
        .find_map(|label| fields.get(*label))
        .map(String::as_str)
}
