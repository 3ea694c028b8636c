use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Image {
    pub url: String,
    pub alt: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Link {
    pub label: String,
    pub path: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Story {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image: Image,
}

/// Closing section of a page: a heading, a line of copy and one link.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub label: String,
    pub path: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ApproachItem {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Testimonial {
    #[serde(default)]
    pub lead: Option<String>,
    pub quote: String,
    pub author: String,
}

impl Testimonial {
    /// Quote split on explicit line breaks, rendered with `<br/>` in between.
    pub fn quote_lines(&self) -> Vec<&str> {
        self.quote.lines().map(str::trim).collect()
    }
}
