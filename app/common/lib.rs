//! The symptom form shared by the page host and the browser client: the wire types exchanged with the prediction service, the HTML fragments rendered into the page, and the controller that reacts to form events.

pub mod error;
pub mod predict;
pub mod selection;
pub mod symptom;
pub mod symptom_form;
