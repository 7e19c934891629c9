use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{is_valid_email, max_len, non_blank, require_len};
use crate::enums::{District, Province, UserRole};

/// `GET /api/users` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub province: Option<Province>,
    #[serde(default)]
    pub district: Option<District>,
    pub role: UserRole,
    #[serde(default = "crate::shared::api::default_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
}

impl UserResponse {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Case-insensitive search over username, name and email
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.username.to_lowercase().contains(&q)
            || self.full_name().to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
    }
}

/// Body for `POST /api/users` and `PUT /api/users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub username: String,
    pub email: String,
    /// Empty on update keeps the current password
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub province: Option<Province>,
    pub district: Option<District>,
    pub role: UserRole,
    pub active: bool,
}

impl Default for UserRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: None,
            province: None,
            district: None,
            role: UserRole::VeterinaryOfficer,
            active: true,
        }
    }
}

impl From<&UserResponse> for UserRequest {
    fn from(u: &UserResponse) -> Self {
        Self {
            username: u.username.clone(),
            email: u.email.clone(),
            password: String::new(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            phone_number: u.phone_number.clone(),
            province: u.province,
            district: u.district,
            role: u.role,
            active: u.active,
        }
    }
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl UserRequest {
    /// All failing fields, in form order. `is_create` makes the password mandatory.
    pub fn validate(&self, is_create: bool) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut push = |field: &'static str, result: Result<(), String>| {
            if let Err(message) = result {
                errors.push(FieldError { field, message });
            }
        };

        push("username", require_len("Username", &self.username, 3, 50));

        push(
            "email",
            if self.email.trim().is_empty() {
                Err("Email is required".to_string())
            } else if !is_valid_email(&self.email) {
                Err("Email should be valid".to_string())
            } else {
                Ok(())
            },
        );

        push(
            "password",
            if is_create && self.password.is_empty() {
                Err("Password is required".to_string())
            } else if !self.password.is_empty() && self.password.chars().count() < 6 {
                Err("Password must be at least 6 characters".to_string())
            } else {
                Ok(())
            },
        );

        push("firstName", require_len("First name", &self.first_name, 1, 50));
        push("lastName", require_len("Last name", &self.last_name, 1, 50));
        push(
            "phoneNumber",
            max_len("Phone number", self.phone_number.as_deref(), 20),
        );

        push(
            "district",
            match (self.province, self.district) {
                (Some(p), Some(d)) if d.province() != p => Err(format!(
                    "{} is not in {}",
                    d.display_name(),
                    p.display_name()
                )),
                (None, Some(_)) => Err("Select a province first".to_string()),
                _ => Ok(()),
            },
        );

        errors
    }

    /// Select a province; a district from another province is cleared
    pub fn set_province(&mut self, province: Option<Province>) {
        if self.province != province {
            self.province = province;
            if let Some(d) = self.district {
                if Some(d.province()) != province {
                    self.district = None;
                }
            }
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: non_blank(self.phone_number.clone()),
            province: self.province,
            district: self.district,
            role: self.role,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> UserRequest {
        UserRequest {
            username: "vet_kandy".into(),
            email: "vet@dapd.lk".into(),
            password: "secret1".into(),
            first_name: "Kamal".into(),
            last_name: "Silva".into(),
            province: Some(Province::Central),
            district: Some(District::Kandy),
            ..Default::default()
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn valid_request_has_no_errors() {
        assert!(valid_request().validate(true).is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = UserRequest::default().validate(true);
        assert_eq!(
            fields(&errors),
            vec!["username", "email", "password", "firstName", "lastName"]
        );
    }

    #[test]
    fn password_optional_on_update_but_length_checked() {
        let mut req = valid_request();
        req.password.clear();
        assert!(req.validate(false).is_empty());
        req.password = "123".into();
        assert_eq!(fields(&req.validate(false)), vec!["password"]);
    }

    #[test]
    fn bad_email_is_reported() {
        let mut req = valid_request();
        req.email = "vet.dapd.lk".into();
        let errors = req.validate(true);
        assert_eq!(errors[0].message, "Email should be valid");
    }

    #[test]
    fn district_must_belong_to_province() {
        let mut req = valid_request();
        req.district = Some(District::Galle);
        assert_eq!(fields(&req.validate(true)), vec!["district"]);
    }

    #[test]
    fn changing_province_clears_foreign_district() {
        let mut req = valid_request();
        req.set_province(Some(Province::Central));
        assert_eq!(req.district, Some(District::Kandy));
        req.set_province(Some(Province::Southern));
        assert_eq!(req.district, None);
    }

    #[test]
    fn password_not_serialized_when_empty() {
        let mut req = valid_request();
        req.password.clear();
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["role"], "VETERINARY_OFFICER");
        assert_eq!(value["firstName"], "Kamal");
    }

    #[test]
    fn search_matches_name_and_email() {
        let user: UserResponse = serde_json::from_str(
            r#"{"id":7,"username":"vet7","email":"nimal@dapd.lk","firstName":"Nimal","lastName":"Fernando","role":"VETERINARY_OFFICER","active":true}"#,
        )
        .unwrap();
        assert!(user.matches("FERN"));
        assert!(user.matches("dapd.lk"));
        assert!(!user.matches("kandy"));
        assert!(user.matches("  "));
    }
}
