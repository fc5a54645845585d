mod field_value;
mod response;

pub use self::field_value::FieldValue;
pub use self::response::{EntityFields, ResponseModel, ResultsModel, SentenceModel};
