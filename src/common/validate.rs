use crate::common;

use common::FormState;
use common::Step;
use std::collections::HashMap;

pub const MIN_BIO_CHARS: usize = 50;
pub const MIN_INTERESTS: usize = 3;

/// The fields the wizard validates. Everything else (gender, goal,
/// smoking/drinking) always carries a value and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    DateOfBirth,
    Location,
    Education,
    Occupation,
    Bio,
    Interests,
    Height,
    ProfileImages,
}

/// Field-to-message map of the currently failing fields. Empty means valid.
pub type ErrorMap = HashMap<Field, String>;

/// Checks one wizard step against the collected form values. Pure: the same
/// form and step always produce the same map, and only failing fields get an
/// entry.
///
/// When the bio is blank, both the required rule and the length rule fail;
/// only the required message is reported since emptiness is the more
/// fundamental problem.
pub fn validate_step(step: Step, form: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match step {
        Step::BasicInfo => {
            if form.first_name.trim().is_empty() {
                errors.insert(Field::FirstName, "First name is required".into());
            }
            if form.last_name.trim().is_empty() {
                errors.insert(Field::LastName, "Last name is required".into());
            }
            if form.date_of_birth.is_empty() {
                errors.insert(Field::DateOfBirth, "Date of birth is required".into());
            }
            if form.location.trim().is_empty() {
                errors.insert(Field::Location, "Location is required".into());
            }
        }
        Step::Background => {
            if form.education.trim().is_empty() {
                errors.insert(Field::Education, "Education is required".into());
            }
            if form.occupation.trim().is_empty() {
                errors.insert(Field::Occupation, "Occupation is required".into());
            }
            if form.bio.trim().is_empty() {
                errors.insert(Field::Bio, "Bio is required".into());
            } else if form.bio.chars().count() < MIN_BIO_CHARS {
                errors.insert(Field::Bio, "Bio must be at least 50 characters".into());
            }
        }
        Step::Lifestyle => {
            if form.interests.len() < MIN_INTERESTS {
                errors.insert(Field::Interests, "Please select at least 3 interests".into());
            }
            if form.height.is_empty() {
                errors.insert(Field::Height, "Height is required".into());
            }
        }
        Step::Photos => {
            if form.photos.is_empty() {
                errors.insert(
                    Field::ProfileImages,
                    "Please upload at least one photo".into(),
                );
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_step1() -> FormState {
        let mut form = FormState::default();
        form.first_name = "Amal".into();
        form.last_name = "Perera".into();
        form.date_of_birth = "2000-01-01".into();
        form.location = "Colombo".into();
        form
    }

    #[test]
    fn complete_basic_info_passes() {
        let form = filled_step1();
        assert!(validate_step(Step::BasicInfo, &form).is_empty());
    }

    #[test]
    fn each_missing_basic_field_is_reported() {
        let blank = FormState::default();
        let errors = validate_step(Step::BasicInfo, &blank);

        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::FirstName], "First name is required");
        assert_eq!(errors[&Field::LastName], "Last name is required");
        assert_eq!(errors[&Field::DateOfBirth], "Date of birth is required");
        assert_eq!(errors[&Field::Location], "Location is required");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled_step1();
        form.first_name = "   ".into();

        let errors = validate_step(Step::BasicInfo, &form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::FirstName], "First name is required");
    }

    #[test]
    fn only_the_missing_field_is_reported() {
        let mut form = filled_step1();
        form.last_name = String::new();

        let errors = validate_step(Step::BasicInfo, &form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::LastName], "Last name is required");
    }

    #[test]
    fn blank_bio_reports_the_required_message() {
        let mut form = FormState::default();
        form.education = "BSc".into();
        form.occupation = "Engineer".into();
        form.bio = "  \n ".into();

        let errors = validate_step(Step::Background, &form);
        assert_eq!(errors[&Field::Bio], "Bio is required");
    }

    #[test]
    fn bio_length_boundary_is_exactly_fifty() {
        let mut form = FormState::default();
        form.education = "BSc".into();
        form.occupation = "Engineer".into();

        form.bio = "x".repeat(49);
        let errors = validate_step(Step::Background, &form);
        assert_eq!(errors[&Field::Bio], "Bio must be at least 50 characters");

        form.bio = "x".repeat(50);
        assert!(validate_step(Step::Background, &form).is_empty());
    }

    #[test]
    fn interest_count_boundary_is_exactly_three() {
        let mut form = FormState::default();
        form.height = "172cm".into();
        form.interests.toggle("Music");
        form.interests.toggle("Art");

        let errors = validate_step(Step::Lifestyle, &form);
        assert_eq!(errors[&Field::Interests], "Please select at least 3 interests");

        form.interests.toggle("Travel");
        assert!(validate_step(Step::Lifestyle, &form).is_empty());
    }

    #[test]
    fn missing_height_is_reported() {
        let mut form = FormState::default();
        for interest in ["Music", "Art", "Travel"] {
            form.interests.toggle(interest);
        }

        let errors = validate_step(Step::Lifestyle, &form);
        assert_eq!(errors[&Field::Height], "Height is required");
    }

    #[test]
    fn photos_step_requires_one_upload() {
        let form = FormState::default();
        let errors = validate_step(Step::Photos, &form);
        assert_eq!(errors[&Field::ProfileImages], "Please upload at least one photo");
    }

    #[test]
    fn validation_is_idempotent() {
        let mut form = filled_step1();
        form.last_name = String::new();

        let first = validate_step(Step::BasicInfo, &form);
        let second = validate_step(Step::BasicInfo, &form);
        assert_eq!(first, second);
    }
}
