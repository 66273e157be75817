use crate::common;

use common::validate_step;
use common::DrinkingStatus;
use common::ErrorMap;
use common::Field;
use common::FormState;
use common::Gender;
use common::PhotoHandle;
use common::RelationshipGoal;
use common::SmokingStatus;

/// The four wizard screens, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    BasicInfo,
    Background,
    Lifestyle,
    Photos,
}

impl Step {
    pub const TOTAL: u8 = 4;

    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Background => 2,
            Self::Lifestyle => 3,
            Self::Photos => 4,
        }
    }

    /// The following screen, saturating at the last one.
    pub fn forward(self) -> Step {
        match self {
            Self::BasicInfo => Self::Background,
            Self::Background => Self::Lifestyle,
            Self::Lifestyle | Self::Photos => Self::Photos,
        }
    }

    /// The preceding screen, saturating at the first one.
    pub fn back(self) -> Step {
        match self {
            Self::BasicInfo | Self::Background => Self::BasicInfo,
            Self::Lifestyle => Self::Background,
            Self::Photos => Self::Lifestyle,
        }
    }

    pub fn is_first(self) -> bool {
        self == Self::BasicInfo
    }

    pub fn is_last(self) -> bool {
        self == Self::Photos
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::Background => "Education & Career",
            Self::Lifestyle => "Interests & Lifestyle",
            Self::Photos => "Profile Photos",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::BasicInfo => "Tell us about yourself",
            Self::Background => "Share your professional background",
            Self::Lifestyle => "Share what you love to do",
            Self::Photos => "Add photos to complete your profile",
        }
    }
}

/// Where a finished profile goes. The app hands it to the (mocked)
/// persistence service; tests hand it to a recorder.
pub trait ProfileSink {
    fn submit(&mut self, profile: &FormState) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The sink accepted the profile.
    Completed,
    /// The final step failed validation; the sink was never called.
    Rejected,
    /// Validation passed but the sink refused; retrying is allowed.
    Failed(String),
}

/// The profile-completion flow: current step, collected values and the
/// errors being displayed. Forward movement is gated on validation,
/// backward movement never is.
#[derive(Default)]
pub struct ProfileWizard {
    step: Step,
    form: FormState,
    errors: ErrorMap,
    submit_error: Option<String>,
    completed: bool,
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Validates the current step and moves forward when it is clean. The
    /// freshly computed map replaces the displayed errors either way.
    pub fn advance(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.form);

        if self.errors.is_empty() {
            self.step = self.step.forward();
            true
        } else {
            false
        }
    }

    /// Moves back one step. Never validates and never touches the
    /// displayed errors.
    pub fn retreat(&mut self) {
        self.step = self.step.back();
    }

    /// Validates the current (final) step and, when clean, hands the form to
    /// the sink. A sink refusal leaves the form editable so the user can
    /// retry.
    pub fn submit(&mut self, sink: &mut dyn ProfileSink) -> SubmitOutcome {
        self.errors = validate_step(self.step, &self.form);

        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected;
        }

        match sink.submit(&self.form) {
            Ok(()) => {
                self.completed = true;
                self.submit_error = None;
                SubmitOutcome::Completed
            }
            Err(reason) => {
                self.submit_error = Some(reason.clone());
                SubmitOutcome::Failed(reason)
            }
        }
    }

    fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    // Every edit clears the edited field's displayed error right away,
    // without waiting for the next full validation pass.

    pub fn set_first_name(&mut self, value: String) {
        self.form.first_name = value;
        self.clear(Field::FirstName);
    }

    pub fn set_last_name(&mut self, value: String) {
        self.form.last_name = value;
        self.clear(Field::LastName);
    }

    pub fn set_date_of_birth(&mut self, value: String) {
        self.form.date_of_birth = value;
        self.clear(Field::DateOfBirth);
    }

    pub fn set_location(&mut self, value: String) {
        self.form.location = value;
        self.clear(Field::Location);
    }

    pub fn set_education(&mut self, value: String) {
        self.form.education = value;
        self.clear(Field::Education);
    }

    pub fn set_occupation(&mut self, value: String) {
        self.form.occupation = value;
        self.clear(Field::Occupation);
    }

    pub fn set_bio(&mut self, value: String) {
        self.form.bio = value;
        self.clear(Field::Bio);
    }

    pub fn set_height(&mut self, value: String) {
        self.form.height = value;
        self.clear(Field::Height);
    }

    pub fn set_gender(&mut self, value: Gender) {
        self.form.gender = value;
    }

    pub fn set_relationship_goal(&mut self, value: RelationshipGoal) {
        self.form.relationship_goal = value;
    }

    pub fn set_smoking(&mut self, value: SmokingStatus) {
        self.form.smoking = value;
    }

    pub fn set_drinking(&mut self, value: DrinkingStatus) {
        self.form.drinking = value;
    }

    pub fn toggle_interest(&mut self, interest: &str) {
        self.form.interests.toggle(interest);
        self.clear(Field::Interests);
    }

    pub fn add_custom_interest(&mut self, raw: &str) -> bool {
        let added = self.form.interests.add_custom(raw);
        if added {
            self.clear(Field::Interests);
        }
        added
    }

    pub fn add_photos(&mut self, selected: Vec<Box<dyn PhotoHandle>>) -> usize {
        let accepted = self.form.photos.add_all(selected);
        if accepted > 0 {
            self.clear(Field::ProfileImages);
        }
        accepted
    }

    pub fn remove_photo(&mut self, index: usize) {
        self.form.photos.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ProfileCard;

    struct StubPhoto(&'static str);

    impl PhotoHandle for StubPhoto {
        fn label(&self) -> &str {
            self.0
        }

        fn preview_url(&self) -> &str {
            self.0
        }
    }

    fn photo(label: &'static str) -> Box<dyn PhotoHandle> {
        Box::new(StubPhoto(label))
    }

    #[derive(Default)]
    struct RecordingSink {
        received: Vec<ProfileCard>,
        refuse_with: Option<String>,
    }

    impl ProfileSink for RecordingSink {
        fn submit(&mut self, profile: &FormState) -> Result<(), String> {
            if let Some(reason) = &self.refuse_with {
                return Err(reason.clone());
            }
            self.received.push(ProfileCard::from_form(profile));
            Ok(())
        }
    }

    fn fill_step1(wizard: &mut ProfileWizard) {
        wizard.set_first_name("Amal".into());
        wizard.set_last_name("Perera".into());
        wizard.set_date_of_birth("2000-01-01".into());
        wizard.set_location("Colombo".into());
    }

    fn fill_step2(wizard: &mut ProfileWizard) {
        wizard.set_education("BSc Computer Science".into());
        wizard.set_occupation("Software Engineer".into());
        wizard.set_bio("x".repeat(60));
    }

    fn fill_step3(wizard: &mut ProfileWizard) {
        for interest in ["Music", "Art", "Travel"] {
            wizard.toggle_interest(interest);
        }
        wizard.set_height("172cm".into());
    }

    #[test]
    fn starts_on_step_one_with_nothing_to_show() {
        let wizard = ProfileWizard::new();
        assert_eq!(wizard.step(), Step::BasicInfo);
        assert!(wizard.errors().is_empty());
        assert!(!wizard.completed());
    }

    #[test]
    fn valid_step_advances_to_the_next() {
        let mut wizard = ProfileWizard::new();
        fill_step1(&mut wizard);

        assert!(wizard.advance());
        assert_eq!(wizard.step(), Step::Background);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn missing_last_name_keeps_the_wizard_on_step_one() {
        let mut wizard = ProfileWizard::new();
        wizard.set_first_name("Amal".into());
        wizard.set_date_of_birth("2000-01-01".into());
        wizard.set_location("Colombo".into());

        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::BasicInfo);
        assert_eq!(wizard.errors().len(), 1);
        assert_eq!(
            wizard.errors()[&Field::LastName],
            "Last name is required"
        );
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut wizard = ProfileWizard::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.errors().len(), 4);

        wizard.set_last_name("P".into());
        assert!(!wizard.errors().contains_key(&Field::LastName));
        assert_eq!(wizard.errors().len(), 3);
    }

    #[test]
    fn retreat_is_unconditional_and_keeps_errors() {
        let mut wizard = ProfileWizard::new();
        fill_step1(&mut wizard);
        wizard.advance();
        fill_step2(&mut wizard);
        wizard.advance();
        assert_eq!(wizard.step(), Step::Lifestyle);

        // step 3 is untouched and would not validate, back still works
        wizard.retreat();
        assert_eq!(wizard.step(), Step::Background);

        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.step(), Step::BasicInfo);
    }

    #[test]
    fn forward_saturates_at_the_photos_step() {
        assert_eq!(Step::Photos.forward(), Step::Photos);
        assert_eq!(Step::BasicInfo.back(), Step::BasicInfo);
    }

    #[test]
    fn submit_without_photos_never_reaches_the_sink() {
        let mut wizard = ProfileWizard::new();
        fill_step1(&mut wizard);
        wizard.advance();
        fill_step2(&mut wizard);
        wizard.advance();
        fill_step3(&mut wizard);
        wizard.advance();
        assert_eq!(wizard.step(), Step::Photos);

        let mut sink = RecordingSink::default();
        assert_eq!(wizard.submit(&mut sink), SubmitOutcome::Rejected);
        assert!(sink.received.is_empty());
        assert_eq!(
            wizard.errors()[&Field::ProfileImages],
            "Please upload at least one photo"
        );
        assert!(!wizard.completed());
    }

    #[test]
    fn submit_hands_the_snapshot_to_the_sink() {
        let mut wizard = ProfileWizard::new();
        fill_step1(&mut wizard);
        wizard.advance();
        fill_step2(&mut wizard);
        wizard.advance();
        fill_step3(&mut wizard);
        wizard.advance();
        wizard.add_photos(vec![photo("a.jpg")]);

        let mut sink = RecordingSink::default();
        assert_eq!(wizard.submit(&mut sink), SubmitOutcome::Completed);
        assert!(wizard.completed());

        let card = &sink.received[0];
        assert_eq!(card.first_name, "Amal");
        assert_eq!(card.photos, vec!["a.jpg".to_string()]);
        assert_eq!(card.interests.len(), 3);
    }

    #[test]
    fn a_sink_refusal_is_recoverable() {
        let mut wizard = ProfileWizard::new();
        fill_step1(&mut wizard);
        wizard.advance();
        fill_step2(&mut wizard);
        wizard.advance();
        fill_step3(&mut wizard);
        wizard.advance();
        wizard.add_photos(vec![photo("a.jpg")]);

        let mut refusing = RecordingSink {
            refuse_with: Some("service unavailable".into()),
            ..Default::default()
        };
        assert_eq!(
            wizard.submit(&mut refusing),
            SubmitOutcome::Failed("service unavailable".into())
        );
        assert_eq!(wizard.submit_error(), Some("service unavailable"));
        assert!(!wizard.completed());

        let mut accepting = RecordingSink::default();
        assert_eq!(wizard.submit(&mut accepting), SubmitOutcome::Completed);
        assert!(wizard.submit_error().is_none());
        assert_eq!(accepting.received.len(), 1);
    }

    #[test]
    fn photo_edits_flow_through_the_wizard() {
        let mut wizard = ProfileWizard::new();
        let accepted = wizard.add_photos(vec![photo("a"), photo("b"), photo("c")]);
        assert_eq!(accepted, 3);

        wizard.remove_photo(0);
        assert_eq!(wizard.form().photos.len(), 2);
        assert_eq!(wizard.form().photos.get(0).unwrap().label(), "b");
    }
}
