use serde::{Deserialize, Serialize};

/// One portfolio collection: a titled cover image linking to its gallery.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct GalleryItem {
    pub title: String,
    pub image_url: String,
    pub link_path: String,
}

/// Home page showcase tile. It only previews work, the galleries live on the portfolio.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct FeaturedWork {
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Destination {
    pub name: String,
    pub location: String,
    pub image_url: String,
}
