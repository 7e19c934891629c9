use contracts::system::users::UserResponse;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_text, filter_list, sort_list, Searchable, Sortable};

impl Searchable for UserResponse {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches(filter)
    }
}

impl Sortable for UserResponse {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "username" => cmp_text(&self.username, &other.username),
            "full_name" => cmp_text(&self.full_name(), &other.full_name()),
            "email" => cmp_text(&self.email, &other.email),
            "role" => self.role.code().cmp(other.role.code()),
            "location" => cmp_text(
                self.district.map(|d| d.display_name()).unwrap_or(""),
                other.district.map(|d| d.display_name()).unwrap_or(""),
            ),
            "active" => self.active.cmp(&other.active),
            "last_login" => self.last_login.cmp(&other.last_login),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_field: "username".to_string(),
            sort_ascending: true,
            is_loaded: false,
        }
    }
}

impl UsersListState {
    /// Same column flips direction, a new column sorts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Rows to display: filtered by the search box, then sorted
    pub fn visible(&self, all: Vec<UserResponse>) -> Vec<UserResponse> {
        let mut rows = filter_list(all, &self.search_query);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

/// Admin/officer counts for the page header
pub fn role_counts(users: &[UserResponse]) -> (usize, usize) {
    let admins = users.iter().filter(|u| u.role.is_admin()).count();
    (admins, users.len() - admins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserRole;

    fn user(id: i64, username: &str, first: &str, role: UserRole) -> UserResponse {
        UserResponse {
            id,
            username: username.to_string(),
            email: format!("{}@vet.lk", username),
            first_name: first.to_string(),
            last_name: "Perera".to_string(),
            phone_number: None,
            province: None,
            district: None,
            role,
            active: true,
            created_at: None,
            updated_at: None,
            last_login: None,
        }
    }

    fn sample() -> Vec<UserResponse> {
        vec![
            user(1, "kamal", "Kamal", UserRole::VeterinaryOfficer),
            user(2, "admin", "Nimal", UserRole::Admin),
            user(3, "sunil", "Sunil", UserRole::VeterinaryOfficer),
        ]
    }

    #[test]
    fn search_covers_username_name_and_email() {
        let mut state = UsersListState::default();
        state.search_query = "NIMAL".into();
        let rows = state.visible(sample());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].username, "admin");

        state.search_query = "sunil@".into();
        assert_eq!(state.visible(sample())[0].id, 3);
    }

    #[test]
    fn toggle_sort_flips_then_resets() {
        let mut state = UsersListState::default();
        assert_eq!(
            state.visible(sample()).iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![2, 1, 3]
        );
        state.toggle_sort("username");
        assert!(!state.sort_ascending);
        assert_eq!(state.visible(sample())[0].username, "sunil");

        state.toggle_sort("role");
        assert_eq!(state.sort_field, "role");
        assert!(state.sort_ascending);
        assert_eq!(state.visible(sample())[0].role, UserRole::Admin);
    }

    #[test]
    fn counts_by_role() {
        assert_eq!(role_counts(&sample()), (1, 2));
        assert_eq!(role_counts(&[]), (0, 0));
    }
}
