pub mod obj;
pub mod traits;
