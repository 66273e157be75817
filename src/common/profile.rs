use crate::common;

use common::InterestSet;
use common::PhotoSlots;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use strum_macros::{EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        };

        write!(f, "{}", s)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RelationshipGoal {
    #[default]
    Serious,
    Casual,
    Friendship,
    Unsure,
}

impl Display for RelationshipGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Serious => "Serious Relationship",
            Self::Casual => "Casual Dating",
            Self::Friendship => "Friendship",
            Self::Unsure => "Not Sure Yet",
        };

        write!(f, "{}", s)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    #[default]
    Never,
    Occasionally,
    Regularly,
}

impl Display for SmokingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Never => "Never",
            Self::Occasionally => "Occasionally",
            Self::Regularly => "Regularly",
        };

        write!(f, "{}", s)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DrinkingStatus {
    #[default]
    Never,
    Socially,
    Regularly,
}

impl Display for DrinkingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Never => "Never",
            Self::Socially => "Socially",
            Self::Regularly => "Regularly",
        };

        write!(f, "{}", s)
    }
}

/// Everything the wizard collects across its four steps. Lives only as long
/// as the wizard that owns it.
#[derive(Default)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub location: String,
    pub education: String,
    pub occupation: String,
    pub bio: String,
    pub interests: InterestSet,
    pub relationship_goal: RelationshipGoal,
    pub height: String,
    pub smoking: SmokingStatus,
    pub drinking: DrinkingStatus,
    pub photos: PhotoSlots,
}

/// The serializable snapshot handed to the profile sink and kept in session
/// state once the wizard completes. Photos are carried by label; the owning
/// wizard keeps the handles themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub location: String,
    pub education: String,
    pub occupation: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub relationship_goal: RelationshipGoal,
    pub height: String,
    pub smoking: SmokingStatus,
    pub drinking: DrinkingStatus,
    pub photos: Vec<String>,
}

impl ProfileCard {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            date_of_birth: form.date_of_birth.clone(),
            gender: form.gender,
            location: form.location.clone(),
            education: form.education.clone(),
            occupation: form.occupation.clone(),
            bio: form.bio.clone(),
            interests: form.interests.to_vec(),
            relationship_goal: form.relationship_goal,
            height: form.height.clone(),
            smoking: form.smoking,
            drinking: form.drinking,
            photos: form.photos.iter().map(|p| p.label().to_string()).collect(),
        }
    }
}

/// Height choices offered by the wizard's select box: 150cm to 208cm in
/// steps of two.
pub fn height_options() -> Vec<String> {
    (0..30).map(|i| format!("{}cm", 150 + i * 2)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifestyle_enums_parse_from_form_values() {
        assert_eq!("female".parse(), Ok(Gender::Female));
        assert_eq!("serious".parse(), Ok(RelationshipGoal::Serious));
        assert_eq!("occasionally".parse(), Ok(SmokingStatus::Occasionally));
        assert_eq!("socially".parse(), Ok(DrinkingStatus::Socially));
        assert!("sometimes".parse::<SmokingStatus>().is_err());
    }

    #[test]
    fn height_options_cover_the_select_range() {
        let options = height_options();
        assert_eq!(options.len(), 30);
        assert_eq!(options.first().unwrap(), "150cm");
        assert_eq!(options.last().unwrap(), "208cm");
    }

    #[test]
    fn card_snapshot_copies_the_form() {
        let mut form = FormState::default();
        form.first_name = "Amal".into();
        form.interests.toggle("Music");
        form.height = "172cm".into();

        let card = ProfileCard::from_form(&form);
        assert_eq!(card.first_name, "Amal");
        assert_eq!(card.interests, vec!["Music".to_string()]);
        assert_eq!(card.height, "172cm");
        assert_eq!(card.gender, Gender::Male);
        assert!(card.photos.is_empty());
    }
}
