use crate::core::domain::Identifiable;

pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

pub(crate) trait Book: Identifiable {
    fn in_stock(&self) -> bool;
    fn stock(&self) -> i64;
}
