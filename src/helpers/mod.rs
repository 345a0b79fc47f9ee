pub mod escape;
pub mod form_data;
pub mod handler_404;
pub mod timestamp;
