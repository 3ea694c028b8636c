pub mod use_carousel;
