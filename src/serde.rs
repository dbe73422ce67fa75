mod flattened;
pub(crate) mod json_value;
mod structured_value;
