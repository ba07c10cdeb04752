//! 领域层
//!
//! 实体、值对象、查询和仓储接口

pub mod entities;
pub mod query;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use query::*;
pub use repositories::*;
pub use value_objects::*;
