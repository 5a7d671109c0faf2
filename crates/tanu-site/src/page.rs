//! Page identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

/// One of the three views the site can show. Exactly one is current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Home,
    Portfolio,
    Contact,
}

impl PageId {
    /// All pages in navigation order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Portfolio, Self::Contact];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    /// Canonical URL path of the page.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Portfolio => "/portfolio",
            Self::Contact => "/contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact US",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Portfolio => "💍",
            Self::Contact => "📞",
        }
    }

    /// Element id of the page's nav button.
    pub const fn button_id(self) -> &'static str {
        match self {
            Self::Home => "home-btn",
            Self::Portfolio => "portfolio-btn",
            Self::Contact => "contact-btn",
        }
    }

    /// Gradient classes applied to the nav button while this page is current.
    pub const fn active_class(self) -> &'static str {
        match self {
            Self::Home => "bg-gradient-to-r from-rose-600 to-amber-600",
            Self::Portfolio => "bg-gradient-to-r from-purple-600 to-pink-600",
            Self::Contact => "bg-gradient-to-r from-blue-600 to-cyan-600",
        }
    }

    /// Document title shown in the browser tab.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Tanu Videography Studio",
            Self::Portfolio => "Portfolio | Tanu Videography Studio",
            Self::Contact => "Contact | Tanu Videography Studio",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| SiteError::UnknownPage(s.to_string()))
    }
}
