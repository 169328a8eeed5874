use crate::models::{Specialty, Turn};

/// Checked in order; the first specialty with a matching keyword wins.
const SPECIALTY_KEYWORDS: &[(Specialty, &[&str])] = &[
    (
        Specialty::Cardiology,
        &["heart", "cardiac", "cardiologist", "chest pain", "heart disease"],
    ),
    (
        Specialty::Gastroenterology,
        &["stomach", "digestive", "abdominal", "gut", "gastro"],
    ),
    (
        Specialty::Neurology,
        &["headache", "migraine", "brain", "neurologist", "headaches"],
    ),
    (
        Specialty::Orthopedics,
        &["bone", "joint", "fracture", "arthritis", "knee", "back pain"],
    ),
    (
        Specialty::General,
        &["appointment", "consultation", "checkup", "visit"],
    ),
];

pub fn classify(description: Option<&str>) -> Specialty {
    let lower = description.unwrap_or("").to_lowercase();

    SPECIALTY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(specialty, _)| *specialty)
        .unwrap_or(Specialty::General)
}

/// "appointment" or "book" anywhere in the text, case-insensitive.
pub fn wants_booking(description: Option<&str>) -> bool {
    let lower = description.unwrap_or("").to_lowercase();
    lower.contains("appointment") || lower.contains("book")
}

/// Like [`classify`], but a booking request that names no specialty of its
/// own stays with the most recent specialty the caller described, so "can I
/// book an appointment" after "I have chest pain" books cardiology.
pub fn classify_in_session(description: Option<&str>, history: &[Turn]) -> Specialty {
    match classify(description) {
        Specialty::General if wants_booking(description) => history
            .iter()
            .rev()
            .map(|turn| classify(turn.user.as_deref()))
            .find(|specialty| *specialty != Specialty::General)
            .unwrap_or(Specialty::General),
        specialty => specialty,
    }
}
