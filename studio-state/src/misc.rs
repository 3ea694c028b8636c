pub mod carousel;
pub mod motion;
pub mod page_url;
