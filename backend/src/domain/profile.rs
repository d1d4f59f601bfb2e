//! Extended member profile and the wholesale profile update payload.
//!
//! The profile is a plain record: fields are public because callers build it
//! from edit forms and the directory replaces it as a whole.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::{
    Account, AccountValidationError, AvatarReference, DisplayName, Email,
};

/// Education history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// Entry identifier, stable across edits of the same entry.
    pub id: Uuid,
    /// School or university name.
    pub institution: String,
    /// Degree awarded, e.g. "Master of Science".
    pub degree: String,
    /// Subject studied.
    pub field_of_study: String,
    /// Free-text start year.
    pub start_year: String,
    /// Free-text end year.
    pub end_year: String,
}

impl Education {
    /// Start a new entry with a fresh identifier and empty years.
    pub fn new(
        institution: impl Into<String>,
        degree: impl Into<String>,
        field_of_study: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: institution.into(),
            degree: degree.into(),
            field_of_study: field_of_study.into(),
            start_year: String::new(),
            end_year: String::new(),
        }
    }

    /// Set the attendance years.
    #[must_use]
    pub fn years(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_year = start.into();
        self.end_year = end.into();
        self
    }
}

/// Employment history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    /// Entry identifier, stable across edits of the same entry.
    pub id: Uuid,
    /// Employer name.
    pub company: String,
    /// Role held.
    pub position: String,
    /// Free-text start date.
    pub start_date: String,
    /// Free-text end date, e.g. "Present".
    pub end_date: String,
    /// What the role involved.
    pub description: String,
}

impl WorkExperience {
    /// Start a new entry with a fresh identifier.
    pub fn new(company: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company: company.into(),
            position: position.into(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    /// Set the employment period.
    #[must_use]
    pub fn period(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    /// Set the role description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Extended profile attached to every account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Short biography.
    pub bio: String,
    /// Public contact email; starts as the sign-in email.
    pub contact_email: String,
    /// Phone number as typed.
    pub phone: String,
    /// Free-text location.
    pub location: String,
    /// Skill tags in display order.
    pub skills: Vec<String>,
    /// Education history.
    pub education: Vec<Education>,
    /// Employment history.
    pub work_experience: Vec<WorkExperience>,
}

impl Profile {
    /// Empty profile created alongside a new account.
    #[must_use]
    pub fn empty_for(email: &Email) -> Self {
        Self {
            contact_email: email.as_ref().to_owned(),
            ..Self::default()
        }
    }
}

/// Replacement values for the mutable part of an account.
///
/// Display name, avatar and profile are replaced together; fields the caller
/// wants to keep must be carried over, which [`ProfileUpdate::from_account`]
/// does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    display_name: DisplayName,
    avatar: AvatarReference,
    profile: Profile,
}

impl ProfileUpdate {
    /// Build an update from validated parts.
    #[must_use]
    pub const fn new(display_name: DisplayName, avatar: AvatarReference, profile: Profile) -> Self {
        Self {
            display_name,
            avatar,
            profile,
        }
    }

    /// Validate raw form input. A missing or blank avatar resolves to the
    /// placeholder.
    pub fn try_from_parts(
        display_name: impl Into<String>,
        avatar: Option<&str>,
        profile: Profile,
    ) -> Result<Self, AccountValidationError> {
        Ok(Self::new(
            DisplayName::new(display_name)?,
            AvatarReference::from_input(avatar)?,
            profile,
        ))
    }

    /// Start an edit from the account's current values.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self::new(
            account.display_name().clone(),
            account.avatar().clone(),
            account.profile().clone(),
        )
    }

    /// Replace the display name.
    pub fn with_display_name(
        mut self,
        display_name: impl Into<String>,
    ) -> Result<Self, AccountValidationError> {
        self.display_name = DisplayName::new(display_name)?;
        Ok(self)
    }

    /// Replace the profile record.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Mutable access to the profile record being edited.
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// New display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// New avatar.
    #[must_use]
    pub const fn avatar(&self) -> &AvatarReference {
        &self.avatar
    }

    pub(crate) fn into_parts(self) -> (DisplayName, AvatarReference, Profile) {
        (self.display_name, self.avatar, self.profile)
    }
}
