//! Askama Templates
//!
//! Template structs for the document shell, the three page fragments and the
//! not-found page.

use askama::Template;
use askama_web::WebTemplate;

use crate::{
    BUILD_VERSION, STYLESHEET,
    animation::Delay,
    catalog::VideoEntry,
    content::{self, ContactCard, FeatureCard, QuickContact, StatCard},
    navigation::NavButton,
};

/// Full page: brand header, nav bar, content container and footer.
#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate<'a> {
    pub title: &'a str,
    pub studio_name: &'static str,
    pub studio_tagline: &'static str,
    pub buttons: &'a [NavButton],
    /// Already rendered and armed fragment markup.
    pub content: &'a str,
    /// Include the dev reload client (debug builds only).
    pub live_reload: bool,
    pub stylesheet: &'static str,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl<'a> DocumentTemplate<'a> {
    pub fn new(title: &'a str, buttons: &'a [NavButton], fragment: &'a str) -> Self {
        Self {
            title,
            studio_name: content::STUDIO_NAME,
            studio_tagline: content::STUDIO_TAGLINE,
            buttons,
            content: fragment,
            live_reload: cfg!(debug_assertions),
            stylesheet: STYLESHEET,
            v: BUILD_VERSION,
        }
    }
}

/// Home page fragment.
#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeFragment {
    pub founder: &'static str,
    pub instagram_url: &'static str,
    pub whatsapp_url: &'static str,
    pub quick_contacts: Vec<QuickContact>,
    pub features: Vec<FeatureCard>,
    pub stats: Vec<StatCard>,
}

impl HomeFragment {
    pub fn new() -> Self {
        Self {
            founder: content::FOUNDER,
            instagram_url: content::INSTAGRAM_URL,
            whatsapp_url: content::WHATSAPP_URL,
            quick_contacts: content::quick_contacts(),
            features: content::feature_cards(),
            stats: content::stat_cards(),
        }
    }
}

impl Default for HomeFragment {
    fn default() -> Self {
        Self::new()
    }
}

/// A film card in the portfolio grid.
pub struct VideoCard<'a> {
    pub video: &'a VideoEntry,
    pub delay: Delay,
}

/// Portfolio page fragment, including the player overlay.
#[derive(Template)]
#[template(path = "pages/portfolio.html")]
pub struct PortfolioFragment<'a> {
    pub cards: Vec<VideoCard<'a>>,
    pub modal_active: bool,
    pub embed_url: &'a str,
}

impl<'a> PortfolioFragment<'a> {
    pub fn new(videos: &'a [VideoEntry], modal_active: bool, embed_url: &'a str) -> Self {
        let cards = videos
            .iter()
            .enumerate()
            .map(|(index, video)| VideoCard {
                video,
                delay: Delay::staggered(index),
            })
            .collect();
        Self {
            cards,
            modal_active,
            embed_url,
        }
    }
}

/// Contact page fragment.
#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactFragment {
    pub cards: Vec<ContactCard>,
    pub instagram_url: &'static str,
}

impl ContactFragment {
    pub fn new() -> Self {
        Self {
            cards: content::contact_cards(),
            instagram_url: content::INSTAGRAM_URL,
        }
    }
}

impl Default for ContactFragment {
    fn default() -> Self {
        Self::new()
    }
}

/// 404 page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub path: String,
    pub stylesheet: &'static str,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl NotFoundTemplate {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            title: format!("Not Found | {}", content::STUDIO_NAME),
            path: path.into(),
            stylesheet: STYLESHEET,
            v: BUILD_VERSION,
        }
    }
}
