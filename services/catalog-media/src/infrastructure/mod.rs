//! 基础设施层

pub mod bootstrap;
pub mod observability;
pub mod persistence;
