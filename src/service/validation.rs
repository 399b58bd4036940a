use regex::Regex;
use std::sync::LazyLock;

use crate::models::{CoachDto, CoachFields, FieldViolation};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const SPECIALIZATION_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 15;

// Same shape as the HTML living standard's valid e-mail address
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Blank optional text counts as absent
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Check the caller-editable fields of `dto`.
///
/// Returns the cleaned fields, or every violation found (at most one per
/// field). Lengths are counted in characters; `name` is measured after
/// trimming.
pub fn validate_coach(dto: &CoachDto) -> Result<CoachFields, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = non_blank(dto.name.as_deref());
    match &name {
        None => violations.push(FieldViolation::new("name", "Name is required")),
        Some(name) => {
            let len = name.trim().chars().count();
            if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
                violations.push(FieldViolation::new(
                    "name",
                    "Name must be between 2 and 100 characters",
                ));
            }
        }
    }

    let specialization = non_blank(dto.specialization.as_deref());
    if specialization
        .as_ref()
        .is_some_and(|s| s.chars().count() > SPECIALIZATION_MAX_LEN)
    {
        violations.push(FieldViolation::new(
            "specialization",
            "Specialization must not exceed 100 characters",
        ));
    }

    let phone = non_blank(dto.phone.as_deref());
    if phone
        .as_ref()
        .is_some_and(|p| p.chars().count() > PHONE_MAX_LEN)
    {
        violations.push(FieldViolation::new(
            "phone",
            "Phone must not exceed 15 characters",
        ));
    }

    let email = non_blank(dto.email.as_deref());
    if email.as_deref().is_some_and(|e| !is_valid_email(e)) {
        violations.push(FieldViolation::new("email", "Email should be valid"));
    }

    match name {
        Some(name) if violations.is_empty() => Ok(CoachFields {
            name,
            specialization,
            phone,
            email,
        }),
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CoachDto {
        CoachDto::new(name, None, None, None)
    }

    fn fields_of(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn name_length_boundaries() {
        assert!(validate_coach(&named("A")).is_err());
        assert!(validate_coach(&named("Al")).is_ok());
        assert!(validate_coach(&named(&"x".repeat(100))).is_ok());
        assert!(validate_coach(&named(&"x".repeat(101))).is_err());
    }

    #[test]
    fn name_is_measured_trimmed() {
        let err = validate_coach(&named("  A  ")).unwrap_err();
        assert_eq!(
            err,
            vec![FieldViolation::new(
                "name",
                "Name must be between 2 and 100 characters"
            )]
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 50 two-byte characters
        assert!(validate_coach(&named(&"é".repeat(50))).is_ok());
    }

    #[test]
    fn missing_or_blank_name_is_required() {
        for dto in [CoachDto::default(), named(""), named("   ")] {
            let err = validate_coach(&dto).unwrap_err();
            assert_eq!(err, vec![FieldViolation::new("name", "Name is required")]);
        }
    }

    #[test]
    fn optional_field_limits() {
        let ok = CoachDto::new(
            "Ravi",
            Some(&"s".repeat(100)),
            Some("+91987654321012"),
            None,
        );
        assert!(validate_coach(&ok).is_ok());

        let too_long = CoachDto::new(
            "Ravi",
            Some(&"s".repeat(101)),
            Some("+919876543210123"),
            None,
        );
        let err = validate_coach(&too_long).unwrap_err();
        assert_eq!(fields_of(&err), vec!["specialization", "phone"]);
    }

    #[test]
    fn reports_one_violation_per_field() {
        let dto = CoachDto::new("R", Some(&"s".repeat(101)), Some(&"9".repeat(16)), Some("nope"));

        let err = validate_coach(&dto).unwrap_err();

        assert_eq!(fields_of(&err), vec!["name", "specialization", "phone", "email"]);
    }

    #[test]
    fn email_syntax() {
        for good in ["ravi@sps.org", "first.last+nets@sps-cricket.co.uk", "a@b"] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }
        for bad in ["plain", "two@@sps.org", "spaced name@sps.org", "@sps.org", "ravi@", "ravi@-sps.org"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn blank_optionals_become_absent() {
        let dto = CoachDto::new("Ravi", Some(""), Some("  "), Some(""));

        let fields = validate_coach(&dto).unwrap();

        assert_eq!(fields.specialization, None);
        assert_eq!(fields.phone, None);
        assert_eq!(fields.email, None);
    }

    #[test]
    fn server_owned_fields_are_ignored() {
        let dto = CoachDto {
            coach_id: Some(99),
            created_at: Some(chrono::Utc::now()),
            ..named("Ravi")
        };

        let fields = validate_coach(&dto).unwrap();

        assert_eq!(fields.name, "Ravi");
    }
}
