pub mod delayed;
pub mod engine;
pub mod ops;
pub mod outcome;

pub use crate::domain::model::{Book, Car, DayKind, Product, Value, Vehicle};
pub use crate::domain::ports::{Computation, ConfigProvider};
pub use crate::utils::error::Result;
