use std::fmt::{Display, Formatter};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PageUrl {
    Home,
    About,
    Portfolio,
    Contact,
    Gallery(String),
    NotFound,
}

impl Display for PageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageUrl::Home => write!(f, "/"),
            PageUrl::About => write!(f, "/about"),
            PageUrl::Portfolio => write!(f, "/portfolio"),
            PageUrl::Contact => write!(f, "/contact"),
            PageUrl::Gallery(slug) => write!(f, "/gallery/{}", slug),
            PageUrl::NotFound => write!(f, "/*any"),
        }
    }
}

impl PageUrl {
    pub fn url_home() -> String {
        PageUrl::Home.to_string()
    }

    pub fn url_about() -> String {
        PageUrl::About.to_string()
    }

    pub fn url_portfolio() -> String {
        PageUrl::Portfolio.to_string()
    }

    pub fn url_contact() -> String {
        PageUrl::Contact.to_string()
    }

    pub fn url_gallery(slug: &str) -> String {
        PageUrl::Gallery(slug.to_string()).to_string()
    }

    /// Pages listed in the navbar, in order.
    pub fn nav() -> [PageUrl; 4] {
        [
            PageUrl::Home,
            PageUrl::About,
            PageUrl::Portfolio,
            PageUrl::Contact,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageUrl::Home => "Home",
            PageUrl::About => "About",
            PageUrl::Portfolio => "Portfolio",
            PageUrl::Contact => "Contact",
            PageUrl::Gallery(_) => "Gallery",
            PageUrl::NotFound => "Not Found",
        }
    }

    pub fn from_path(path: &str) -> PageUrl {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            path => path,
        };
        match path {
            "/" => PageUrl::Home,
            "/about" => PageUrl::About,
            "/portfolio" => PageUrl::Portfolio,
            "/contact" => PageUrl::Contact,
            path => match path.strip_prefix("/gallery/") {
                Some(slug) if is_slug(slug) => PageUrl::Gallery(slug.to_string()),
                _ => PageUrl::NotFound,
            },
        }
    }
}

fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod page_url_tests {
    use super::PageUrl;

    #[test]
    fn urls_are_literal_paths() {
        assert_eq!(PageUrl::url_home(), "/");
        assert_eq!(PageUrl::url_about(), "/about");
        assert_eq!(PageUrl::url_portfolio(), "/portfolio");
        assert_eq!(PageUrl::url_contact(), "/contact");
        assert_eq!(PageUrl::url_gallery("swiss-alps"), "/gallery/swiss-alps");
    }

    #[test]
    fn paths_resolve_to_pages() {
        for page in PageUrl::nav() {
            assert_eq!(PageUrl::from_path(&page.to_string()), page);
        }
        assert_eq!(PageUrl::from_path("/about/"), PageUrl::About);
        assert_eq!(PageUrl::from_path("/contact?ref=nav"), PageUrl::Contact);
        assert_eq!(
            PageUrl::from_path("/gallery/northern-lights"),
            PageUrl::Gallery("northern-lights".to_string())
        );
        assert_eq!(PageUrl::from_path("/gallery/"), PageUrl::NotFound);
        assert_eq!(PageUrl::from_path("/gallery/Not Valid"), PageUrl::NotFound);
        assert_eq!(PageUrl::from_path("/pricing"), PageUrl::NotFound);
    }
}
