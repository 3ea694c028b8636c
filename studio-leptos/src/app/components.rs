pub mod cards;
pub mod carousel;
pub mod contact_form;
pub mod footer;
pub mod navbar;
pub mod reveal;
pub mod sections;
