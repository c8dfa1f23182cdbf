//! Member management service

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, ConflictKind},
    models::member::{CreateMember, Member, UpdateMember},
};

use super::{borrowings::can_delete_member, SharedRepository};

#[derive(Clone)]
pub struct MembersService {
    repository: SharedRepository,
}

impl MembersService {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Register a member who joins on `today`
    pub async fn add_member(&self, member: CreateMember, today: NaiveDate) -> AppResult<Member> {
        member.validate()?;
        let created = self.repository.write().await.members.create(member, today)?;
        tracing::info!(member_id = created.id, "Member added");
        Ok(created)
    }

    /// Get member by ID
    pub async fn get_member(&self, id: i32) -> AppResult<Member> {
        self.repository.read().await.members.get_by_id(id).cloned()
    }

    pub async fn update_member(&self, id: i32, changes: UpdateMember) -> AppResult<Member> {
        changes.validate()?;
        let updated = self.repository.write().await.members.update(id, changes)?;
        tracing::info!(member_id = id, status = %updated.membership_status, "Member updated");
        Ok(updated)
    }

    /// Delete a member holding no active borrowing
    pub async fn delete_member(&self, id: i32) -> AppResult<Member> {
        let mut repo = self.repository.write().await;
        repo.members.get_by_id(id)?;

        if !can_delete_member(&repo, id) {
            tracing::warn!(member_id = id, "Delete rejected: member has active borrowings");
            return Err(AppError::conflict(
                ConflictKind::MemberHasBorrowings,
                "Cannot delete member with active borrowings",
            ));
        }

        let deleted = repo.members.delete(id)?;
        tracing::info!(member_id = id, "Member deleted");
        Ok(deleted)
    }

    pub async fn list_members(&self) -> Vec<Member> {
        self.repository.read().await.members.list()
    }
}
