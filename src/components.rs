pub mod file_icon;
pub mod file_input_field;
