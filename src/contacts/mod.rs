pub mod sheet;
pub mod validator;

pub use sheet::{RawContact, SheetLoader};
pub use validator::{ContactRecord, RowValidator};
