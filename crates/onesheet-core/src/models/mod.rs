pub mod customization;
pub mod document;
pub mod field;
pub mod request;
