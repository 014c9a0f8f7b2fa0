// SPDX-License-Identifier: MPL-2.0
//! The mock user account shown on the profile screen.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl UserProfile {
    pub fn mock() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (123) 456-7890".to_string(),
            address: "123 Smart Home Ave, Tech City, CA 94043".to_string(),
        }
    }

    /// Initials for the avatar badge, e.g. "JD".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
