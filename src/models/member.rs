//! Member model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::MembershipStatus;

/// Library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Set when the member is added, never changed afterwards
    pub join_date: NaiveDate,
    pub membership_status: MembershipStatus,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.membership_status == MembershipStatus::Active
    }
}

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,
    #[validate(length(min = 10, max = 20, message = "Phone must be 10-20 characters"))]
    pub phone: String,
    #[serde(default)]
    pub membership_status: MembershipStatus,
}

/// Update member request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,
    #[validate(length(min = 10, max = 20, message = "Phone must be 10-20 characters"))]
    pub phone: Option<String>,
    pub membership_status: Option<MembershipStatus>,
}

impl UpdateMember {
    pub fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(phone) = self.phone {
            member.phone = phone;
        }
        if let Some(status) = self.membership_status {
            member.membership_status = status;
        }
    }
}

/// Case-insensitive substring match on name, email or phone.
/// An empty query matches everyone.
pub fn member_matches(member: &Member, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    member.name.to_lowercase().contains(&q)
        || member.email.to_lowercase().contains(&q)
        || member.phone.to_lowercase().contains(&q)
}
