pub mod keyword;
pub mod table_name;

pub use keyword::ClauseKeyword;
pub use table_name::{IdentifierShape, QualifiedName, TableName};
