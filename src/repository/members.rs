//! Members store

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, RecordKind},
    models::member::{CreateMember, Member, UpdateMember},
};

use super::next_id;

#[derive(Debug, Clone, Default)]
pub struct MembersRepository {
    members: IndexMap<i32, Member>,
}

impl MembersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new member who joins on `join_date`
    pub fn create(&mut self, member: CreateMember, join_date: NaiveDate) -> AppResult<Member> {
        let id = next_id(&self.members)?;
        let created = Member {
            id,
            name: member.name,
            email: member.email,
            phone: member.phone,
            join_date,
            membership_status: member.membership_status,
        };
        self.members.insert(id, created.clone());
        Ok(created)
    }

    /// Get member by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&Member> {
        self.members
            .get(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Member, id))
    }

    pub fn contains(&self, id: i32) -> bool {
        self.members.contains_key(&id)
    }

    pub fn update(&mut self, id: i32, changes: UpdateMember) -> AppResult<Member> {
        let member = self
            .members
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Member, id))?;
        changes.apply(member);
        Ok(member.clone())
    }

    pub fn delete(&mut self, id: i32) -> AppResult<Member> {
        self.members
            .shift_remove(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Member, id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn list(&self) -> Vec<Member> {
        self.members.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
