mod checkbox_field;
mod field_label;
mod form;
mod text_field;

pub use self::checkbox_field::*;
pub use self::field_label::*;
pub use self::form::*;
pub use self::text_field::*;
