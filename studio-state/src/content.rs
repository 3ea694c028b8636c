use chrono::TimeDelta;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::{debug, error};

use crate::misc::carousel::{CarouselErr, CarouselState};
use crate::model::contact::{FormField, StudioInfo};
use crate::model::gallery::{Destination, FeaturedWork, GalleryItem};
use crate::model::section::{ApproachItem, CallToAction, Hero, Image, Link, Story, Testimonial};
use crate::model::service::ServiceItem;
use crate::model::team::TeamMember;
use crate::util::time::delta_from_millis;

pub const EMBEDDED_CONTENT: &str = include_str!("../content/site.toml");

/// Records keyed by their slug, in document order.
pub type ContentMap<T> = IndexMap<String, T>;

#[derive(Error, Debug)]
pub enum ContentErr {
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid link in {section}: `{path}` must start with '/'")]
    InvalidPath { section: &'static str, path: String },

    #[error("invalid carousel: {0}")]
    Carousel(#[from] CarouselErr),
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct SiteContent {
    pub studio: StudioContent,
    pub home: HomeContent,
    pub about: AboutContent,
    pub portfolio: PortfolioContent,
    pub contact: ContactContent,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct StudioContent {
    pub name: String,
    pub description: String,
    pub keywords: String,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct HomeContent {
    pub carousel_period_ms: i64,
    pub carousel: Vec<String>,
    pub hero: Hero,
    pub hero_link: Link,
    pub featured_title: String,
    #[serde(deserialize_with = "keyed")]
    pub featured: ContentMap<FeaturedWork>,
    pub tagline: Vec<String>,
    #[serde(deserialize_with = "keyed")]
    pub destinations: ContentMap<Destination>,
    pub destinations_link: Link,
    pub services_title: String,
    #[serde(deserialize_with = "keyed")]
    pub services: ContentMap<ServiceItem>,
    pub cta: CallToAction,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct AboutContent {
    pub hero: Hero,
    pub story: Story,
    pub team_title: String,
    #[serde(deserialize_with = "keyed")]
    pub team: ContentMap<TeamMember>,
    pub approach_title: String,
    #[serde(deserialize_with = "keyed")]
    pub approach: ContentMap<ApproachItem>,
    pub testimonial: Testimonial,
    pub cta: CallToAction,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct PortfolioContent {
    pub hero: Hero,
    pub featured_title: String,
    #[serde(deserialize_with = "keyed")]
    pub featured: ContentMap<GalleryItem>,
    pub latest_title: String,
    #[serde(deserialize_with = "keyed")]
    pub latest: ContentMap<GalleryItem>,
    pub contact_link: Link,
    pub quote: Testimonial,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct ContactContent {
    pub hero: Hero,
    pub info_title: String,
    pub info_image: Image,
    pub studio: StudioInfo,
    pub form_intro: String,
    pub fields: Vec<FormField>,
    pub submit_label: String,
    pub testimonial: Testimonial,
}

#[derive(Deserialize)]
struct Keyed<T> {
    key: String,
    #[serde(flatten)]
    record: T,
}

fn keyed<'de, D, T>(deserializer: D) -> Result<ContentMap<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Vec::<Keyed<T>>::deserialize(deserializer)?;
    let mut map = ContentMap::with_capacity(entries.len());
    for Keyed { key, record } in entries {
        if map.contains_key(&key) {
            return Err(serde::de::Error::custom(format!("duplicate key `{}`", key)));
        }
        map.insert(key, record);
    }
    Ok(map)
}

impl SiteContent {
    pub fn embedded() -> Result<Self, ContentErr> {
        Self::from_toml(EMBEDDED_CONTENT).inspect_err(|err| {
            error!("content: embedded site content is invalid: {}", err);
        })
    }

    pub fn from_toml(source: &str) -> Result<Self, ContentErr> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        debug!(
            "content: loaded {} team members, {} featured galleries, {} services",
            content.about.team.len(),
            content.portfolio.featured.len(),
            content.home.services.len()
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentErr> {
        self.home.carousel_state()?;
        self.home.carousel_period()?;

        let home = &self.home;
        let about = &self.about;
        let portfolio = &self.portfolio;
        let paths = [("home.hero_link", &home.hero_link.path)]
            .into_iter()
            .chain([("home.destinations_link", &home.destinations_link.path)])
            .chain([("home.cta", &home.cta.path)])
            .chain([("about.cta", &about.cta.path)])
            .chain(portfolio.featured.values().map(|item| ("portfolio.featured", &item.link_path)))
            .chain(portfolio.latest.values().map(|item| ("portfolio.latest", &item.link_path)))
            .chain([("portfolio.contact_link", &portfolio.contact_link.path)]);

        for (section, path) in paths {
            if !path.starts_with('/') {
                return Err(ContentErr::InvalidPath {
                    section,
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }
}

impl HomeContent {
    pub fn carousel_state(&self) -> Result<CarouselState, CarouselErr> {
        CarouselState::new(self.carousel.clone())
    }

    pub fn carousel_period(&self) -> Result<TimeDelta, CarouselErr> {
        let period = delta_from_millis(self.carousel_period_ms);
        if period <= TimeDelta::zero() {
            return Err(CarouselErr::InvalidPeriod(self.carousel_period_ms));
        }
        Ok(period)
    }
}

#[cfg(test)]
mod content_tests {
    use chrono::TimeDelta;

    use super::{ContentErr, SiteContent, EMBEDDED_CONTENT};
    use crate::misc::carousel::CarouselErr;
    use crate::misc::page_url::PageUrl;

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.studio.name, "Life and Times Photography");
        assert_eq!(content.home.carousel.len(), 4);
        assert_eq!(
            content.home.carousel_period().unwrap(),
            TimeDelta::try_milliseconds(5000).unwrap()
        );
        assert_eq!(content.home.featured.len(), 3);
        assert_eq!(content.home.destinations.len(), 3);
        assert_eq!(content.home.services.len(), 3);
        assert_eq!(content.about.team.len(), 4);
        assert_eq!(content.about.approach.len(), 4);
        assert_eq!(content.portfolio.featured.len(), 6);
        assert_eq!(content.portfolio.latest.len(), 2);
        assert_eq!(content.contact.fields.len(), 7);
    }

    #[test]
    fn keyed_sections_keep_document_order() {
        let content = SiteContent::embedded().unwrap();
        let team: Vec<&str> = content
            .about
            .team
            .values()
            .map(|member| member.name.as_str())
            .collect();
        assert_eq!(
            team,
            vec!["Sarah Johnson", "Michael Chen", "Emily Rodriguez", "James Wilson"]
        );
        let services: Vec<&str> = content
            .home
            .services
            .values()
            .map(|service| service.title.as_str())
            .collect();
        assert_eq!(services, vec!["Weddings", "Portraits", "Events"]);
    }

    #[test]
    fn links_point_to_configured_paths() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.about.cta.label, "Get in Touch");
        assert_eq!(content.about.cta.path, PageUrl::url_contact());
        assert_eq!(content.home.cta.path, PageUrl::url_contact());
        assert_eq!(content.home.destinations_link.path, PageUrl::url_portfolio());
        for (slug, gallery) in content
            .portfolio
            .featured
            .iter()
            .chain(content.portfolio.latest.iter())
        {
            assert_eq!(gallery.link_path, PageUrl::url_gallery(slug));
        }
        assert_eq!(
            content.portfolio.featured["swiss-alps"].title,
            "SWISS ALPS"
        );
    }

    #[test]
    fn home_featured_work_is_not_linked() {
        let content = SiteContent::embedded().unwrap();
        let alts: Vec<&str> = content
            .home
            .featured
            .values()
            .map(|work| work.image_alt.as_str())
            .collect();
        assert_eq!(alts, vec!["Featured 1", "Featured 2", "Featured 3"]);

        let raw: toml::Table = toml::from_str(EMBEDDED_CONTENT).unwrap();
        let featured = raw["home"]["featured"].as_array().unwrap();
        assert_eq!(featured.len(), 3);
        for work in featured {
            assert!(work.get("link_path").is_none());
        }
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let source = EMBEDDED_CONTENT.replace("key = \"swiss-alps\"", "key = \"santorini-sunset\"");
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(matches!(err, ContentErr::Parse(_)));
        assert!(err.to_string().contains("duplicate key `santorini-sunset`"));
    }

    #[test]
    fn relative_links_are_rejected() {
        let source = EMBEDDED_CONTENT.replace(
            "link_path = \"/gallery/kyoto-gardens\"",
            "link_path = \"gallery/kyoto-gardens\"",
        );
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(matches!(
            err,
            ContentErr::InvalidPath { section: "portfolio.featured", .. }
        ));
    }

    #[test]
    fn broken_carousel_is_rejected() {
        let source = EMBEDDED_CONTENT.replace("carousel_period_ms = 5000", "carousel_period_ms = 0");
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(matches!(
            err,
            ContentErr::Carousel(CarouselErr::InvalidPeriod(0))
        ));
    }
}
