pub mod coerce;
pub mod composite;
pub mod hydrator;
pub mod leaf;
pub mod normalize;
pub mod registry;
pub mod schema;

pub use crate::domain::model::{Model, ModelKind};
pub use crate::domain::record::{Record, Value};
pub use crate::utils::error::Result;
pub use hydrator::{Hydrator, TypedHydrator};
pub use registry::HydratorRegistry;
