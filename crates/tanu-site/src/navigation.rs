//! Page Router
//!
//! Owns the current page, the nav bar's visual state, the rendered content
//! container and the video modal. Every navigation goes through
//! [`PageRouter::switch_page`].

use std::sync::Arc;

use askama::Template;

use crate::{
    animation::{self, AnimatedElement},
    catalog::Catalog,
    error::SiteError,
    modal::{ClickOrigin, VideoModal},
    page::PageId,
    templates::{ContactFragment, DocumentTemplate, HomeFragment, PortfolioFragment},
};

const DEFAULT_BUTTON_CLASS: &str = "nav-button hover:bg-white/5";

/// Highlight decoration attached to the active nav button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glow {
    page: PageId,
}

impl Glow {
    pub fn class(&self) -> String {
        format!("nav-button-glow {}", self.page.slug())
    }
}

/// A nav bar entry. Everything but the class list and glow derives from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    page: PageId,
    class: String,
    glow: Option<Glow>,
}

impl NavButton {
    fn new(page: PageId) -> Self {
        Self {
            page,
            class: DEFAULT_BUTTON_CLASS.to_string(),
            glow: None,
        }
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn id(&self) -> &'static str {
        self.page.button_id()
    }

    pub fn href(&self) -> &'static str {
        self.page.path()
    }

    pub fn label(&self) -> &'static str {
        self.page.label()
    }

    pub fn icon(&self) -> &'static str {
        self.page.icon()
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn glow(&self) -> Option<&Glow> {
        self.glow.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.glow.is_some()
    }
}

/// The three nav buttons, in navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    buttons: [NavButton; 3],
}

impl NavBar {
    pub fn new(current: PageId) -> Self {
        let mut nav = Self {
            buttons: PageId::ALL.map(NavButton::new),
        };
        nav.sync(current);
        nav
    }

    /// Restyle every button for `current`. Safe to call any number of times.
    pub fn sync(&mut self, current: PageId) {
        for button in &mut self.buttons {
            button.class.clear();
            button.class.push_str(DEFAULT_BUTTON_CLASS);
            button.glow = None;

            if button.page == current {
                button.class = format!("nav-button {}", current.active_class());
                button.glow = Some(Glow { page: current });
            }
        }
    }

    pub fn buttons(&self) -> &[NavButton] {
        &self.buttons
    }

    pub fn active(&self) -> Option<PageId> {
        self.buttons.iter().find(|b| b.is_active()).map(NavButton::page)
    }

    pub fn glow_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.glow.is_some()).count()
    }
}

/// The content container: armed fragment markup plus its animated elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    html: String,
    animations: Vec<AnimatedElement>,
}

impl Viewport {
    /// Swap in a freshly rendered fragment and re-arm its animations.
    fn replace(&mut self, fragment: &str) {
        let (html, animations) = animation::arm(fragment);
        self.html = html;
        self.animations = animations;
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn animations(&self) -> &[AnimatedElement] {
        &self.animations
    }
}

/// Render the unarmed fragment for `page`.
///
/// Deterministic: the same page, catalog and modal state always produce the
/// same bytes.
pub fn render_fragment(
    page: PageId,
    catalog: &Catalog,
    modal: &VideoModal,
) -> Result<String, SiteError> {
    let html = match page {
        PageId::Home => HomeFragment::new().render()?,
        PageId::Portfolio => {
            PortfolioFragment::new(catalog.videos(), modal.is_active(), modal.embed_url())
                .render()?
        }
        PageId::Contact => ContactFragment::new().render()?,
    };
    Ok(html)
}

/// View switcher for the site.
#[derive(Debug, Clone)]
pub struct PageRouter {
    catalog: Arc<Catalog>,
    current: PageId,
    nav: NavBar,
    viewport: Viewport,
    modal: VideoModal,
}

impl PageRouter {
    /// Start on the home page with its fragment already rendered.
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, SiteError> {
        let mut router = Self {
            catalog,
            current: PageId::Home,
            nav: NavBar::new(PageId::Home),
            viewport: Viewport::default(),
            modal: VideoModal::default(),
        };
        router.refresh()?;
        Ok(router)
    }

    /// Show `target`: update the current page, restyle the nav, re-render the
    /// container and re-arm its animations.
    ///
    /// Any open video is closed, since the portfolio fragment is rebuilt from
    /// scratch. On a render error nothing changes.
    pub fn switch_page(&mut self, target: PageId) -> Result<(), SiteError> {
        let closed = VideoModal::default();
        let fragment = render_fragment(target, &self.catalog, &closed)?;

        self.current = target;
        self.modal = closed;
        self.nav.sync(target);
        self.viewport.replace(&fragment);

        tracing::debug!(page = %target, animated = self.viewport.animations.len(), "switched page");
        Ok(())
    }

    /// Open the player for a film. Only meaningful on the portfolio page;
    /// elsewhere, and for unknown ids, this is a no-op returning `false`.
    pub fn open_video(&mut self, video_id: u32) -> Result<bool, SiteError> {
        if self.current != PageId::Portfolio {
            return Ok(false);
        }
        let mut modal = self.modal.clone();
        if !modal.open(video_id, &self.catalog) {
            return Ok(false);
        }
        self.apply_modal(modal)?;
        Ok(true)
    }

    /// Close the player for a click from `origin`. Returns whether it closed.
    pub fn close_video(&mut self, origin: ClickOrigin) -> Result<bool, SiteError> {
        if !self.modal.is_active() {
            return Ok(false);
        }
        let mut modal = self.modal.clone();
        if !modal.close(origin) {
            return Ok(false);
        }
        self.apply_modal(modal)?;
        Ok(true)
    }

    /// Render the full document around the current container.
    pub fn render_document(&self) -> Result<String, SiteError> {
        let html =
            DocumentTemplate::new(self.current.title(), self.nav.buttons(), self.viewport.html())
                .render()?;
        Ok(html)
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn modal(&self) -> &VideoModal {
        &self.modal
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn apply_modal(&mut self, modal: VideoModal) -> Result<(), SiteError> {
        let fragment = render_fragment(self.current, &self.catalog, &modal)?;
        self.modal = modal;
        self.viewport.replace(&fragment);
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), SiteError> {
        self.switch_page(self.current)
    }
}
