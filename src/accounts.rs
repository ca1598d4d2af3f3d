use crate::core::domain::Identifiable;
use crate::core::library::AccountRole;

pub mod command;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

// Actor unifies students and staff behind one role-discriminated record;
// the role decides which dashboard and operations are allowed.
pub(crate) trait Actor: Identifiable {
    fn is_student(&self) -> bool;
    fn is_officer(&self) -> bool;
    fn is_manager(&self) -> bool;
    fn is_role(&self, match_role: AccountRole) -> bool;
}
