use crate::{ApiClientResult, ApiError};

use mm_core::{Candidate, Gender, Role};

use serde::Serialize;

/// Placeholder portrait used when an admin leaves the image field alone.
pub const DEFAULT_MEMBER_IMAGE: &str = "https://placehold.co/300/png";

/// Raw admin form input for adding or editing a member.
///
/// Every field holds exactly what was typed; conversion to a request body
/// happens in [`MemberForm::create_payload`] and [`MemberForm::update_payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemberForm {
    pub username: String,
    pub password: String,
    pub fullname: String,
    pub address: String,
    pub age: String,
    pub religion: String,
    pub gender: Option<Gender>,
    pub role: Option<Role>,
    pub image: String,
}

impl Default for MemberForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            fullname: String::new(),
            address: String::new(),
            age: String::new(),
            religion: String::new(),
            gender: None,
            role: None,
            image: DEFAULT_MEMBER_IMAGE.to_string(),
        }
    }
}

/// JSON body sent to the user create and update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub fullname: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub religion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub image: String,
}

impl MemberForm {
    /// Prefill an edit form from the stored record. The password is never
    /// returned by the server, so it starts blank.
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            username: candidate.username.clone(),
            password: String::new(),
            fullname: candidate.fullname.clone().unwrap_or_default(),
            address: candidate.address.clone().unwrap_or_default(),
            age: candidate.age.map(|age| age.to_string()).unwrap_or_default(),
            religion: candidate.religion.clone().unwrap_or_default(),
            gender: candidate.gender,
            role: candidate.role,
            image: candidate
                .image
                .clone()
                .filter(|image| !image.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MEMBER_IMAGE.to_string()),
        }
    }

    pub fn create_payload(&self) -> ApiClientResult<MemberPayload> {
        if self.username.trim().is_empty()
            || self.fullname.trim().is_empty()
            || self.password.trim().is_empty()
        {
            return Err(ApiError::validation(
                "Username, Fullname, and Password are required.",
            ));
        }
        self.payload(Some(self.password.clone()))
    }

    pub fn update_payload(&self) -> ApiClientResult<MemberPayload> {
        if self.username.trim().is_empty() || self.fullname.trim().is_empty() {
            return Err(ApiError::validation("Username and Fullname are required."));
        }
        let password = (!self.password.trim().is_empty()).then(|| self.password.clone());
        self.payload(password)
    }

    fn payload(&self, password: Option<String>) -> ApiClientResult<MemberPayload> {
        Ok(MemberPayload {
            username: self.username.trim().to_string(),
            password,
            fullname: self.fullname.trim().to_string(),
            address: self.address.trim().to_string(),
            age: self.parsed_age()?,
            religion: self.religion.trim().to_string(),
            gender: self.gender,
            role: self.role,
            image: match self.image.trim() {
                "" => DEFAULT_MEMBER_IMAGE.to_string(),
                image => image.to_string(),
            },
        })
    }

    fn parsed_age(&self) -> ApiClientResult<Option<u32>> {
        let age = self.age.trim();
        if age.is_empty() {
            return Ok(None);
        }
        age.parse()
            .map(Some)
            .map_err(|_| ApiError::validation(format!("Age must be a whole number, got '{age}'.")))
    }
}
