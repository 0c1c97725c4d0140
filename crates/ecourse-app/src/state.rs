//! Application state (Model in TEA pattern)

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use ecourse_core::prelude::*;
use ecourse_core::{menu, ContentRouter, MenuItem, Page, HOME_KEY, MENU};

use crate::config::Settings;
use crate::page_view_state::PageViewState;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Module list
    #[default]
    Sidebar,
    /// Page content
    Page,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Page,
            Focus::Page => Focus::Sidebar,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Sidebar => "Menu",
            Focus::Page => "Page",
        }
    }
}

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Resolves menu keys to pages
    pub router: Arc<ContentRouter>,

    /// Index into the menu
    pub selected: usize,

    pub focus: Focus,

    /// Scroll and section focus for the page being shown
    pub page_view: PageViewState,

    /// Expand state changed by the user, keyed by (page key, section index)
    pub section_overrides: HashMap<(String, usize), bool>,

    pub phase: AppPhase,

    pub settings: Settings,

    /// Key binding overlay visible
    pub show_help: bool,
}

impl AppState {
    /// Create state starting on the home page or the configured start page
    pub fn new(router: Arc<ContentRouter>, settings: Settings) -> Self {
        Self::with_last_page(router, settings, None)
    }

    /// Create state, reopening `last_page` when the settings ask for it
    pub fn with_last_page(
        router: Arc<ContentRouter>,
        settings: Settings,
        last_page: Option<&str>,
    ) -> Self {
        let selected = initial_selection(&settings, last_page);
        Self {
            router,
            selected,
            focus: Focus::default(),
            page_view: PageViewState::new(),
            section_overrides: HashMap::new(),
            phase: AppPhase::default(),
            settings,
            show_help: false,
        }
    }

    pub fn selected_item(&self) -> &'static MenuItem {
        // selected is only ever set to a valid index
        &MENU[self.selected.min(MENU.len() - 1)]
    }

    pub fn selected_key(&self) -> &'static str {
        self.selected_item().key
    }

    /// Page for the current selection, or the fallback page
    pub fn current_page(&self) -> Cow<'_, Page> {
        self.router.route_or_fallback(self.selected_key())
    }

    /// Change the selection
    ///
    /// Returns false for an out-of-range index or the current selection.
    /// A new page starts scrolled to the top with no focused section.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= MENU.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        self.page_view.reset();
        debug!("Selected module {}", self.selected_key());
        true
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────────────────────

    /// Expand state of every section on the current page, in section order
    pub fn section_expansion(&self) -> Vec<bool> {
        let key = self.selected_key();
        self.current_page()
            .section_defaults()
            .into_iter()
            .enumerate()
            .map(|(index, default)| {
                self.section_overrides
                    .get(&(key.to_string(), index))
                    .copied()
                    .unwrap_or(default)
            })
            .collect()
    }

    pub fn is_section_expanded(&self, index: usize) -> bool {
        self.section_expansion().get(index).copied().unwrap_or(false)
    }

    pub fn set_section_expanded(&mut self, index: usize, expanded: bool) {
        let key = self.selected_key().to_string();
        self.section_overrides.insert((key, index), expanded);
    }

    /// Sections whose ancestors are all expanded, in order
    pub fn visible_sections(&self) -> Vec<usize> {
        let expansion = self.section_expansion();
        let parents = self.current_page().section_parents();

        (0..parents.len())
            .filter(|&index| {
                let mut parent = parents[index];
                while let Some(p) = parent {
                    if !expansion.get(p).copied().unwrap_or(false) {
                        return false;
                    }
                    parent = parents[p];
                }
                true
            })
            .collect()
    }

    /// Nearest visible section at or above `index`
    pub fn visible_ancestor(&self, index: usize) -> Option<usize> {
        let visible = self.visible_sections();
        let parents = self.current_page().section_parents();

        let mut current = Some(index);
        while let Some(i) = current {
            if visible.contains(&i) {
                return Some(i);
            }
            current = parents.get(i).copied().flatten();
        }
        None
    }
}

/// Menu index to open on startup
///
/// Order: remembered page (when enabled), configured start page, home.
/// Unknown keys are skipped with a warning.
fn initial_selection(settings: &Settings, last_page: Option<&str>) -> usize {
    let remembered = settings
        .behavior
        .remember_last_page
        .then_some(last_page)
        .flatten();

    for key in [remembered, settings.behavior.start_page.as_deref()]
        .into_iter()
        .flatten()
    {
        match menu::position(key) {
            Some(index) => return index,
            None => warn!("Ignoring unknown start page '{}'", key),
        }
    }

    menu::position(HOME_KEY).unwrap_or(0)
}
