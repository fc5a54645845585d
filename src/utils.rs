pub type IntentName = String;
pub type EntityName = String;
pub type FieldName = String;
