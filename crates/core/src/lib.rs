mod collection;
pub use collection::{Collection, CollectionType};

mod dao;
pub use dao::{Dao, alter_collection};

mod error;
pub use error::DaoError;

pub mod schema;
pub use schema::{FieldOptions, FieldType, Schema, SchemaError, SchemaField};
