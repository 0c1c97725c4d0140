//! Main render/view function (View in TEA pattern)


use std::sync::Arc;

use super::{layout, widgets};
use ecourse_app::{AppState, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Only the page view state is written back, with the size of the laid-out
/// page so scrolling commands can clamp against it.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.sidebar_width);
    let icons = IconSet::new(state.settings.ui.icons);

    let module = state.selected_item().label;
    frame.render_widget(widgets::MainHeader::new(module, icons), areas.header);

    let sidebar = widgets::Sidebar::new(state.selected, icons).focused(state.focus == Focus::Sidebar);
    frame.render_widget(sidebar, areas.sidebar);

    // Route through a cloned handle so the page borrow is independent of `state`
    let router = Arc::clone(&state.router);
    let page = router.route_or_fallback(state.selected_key());
    let expansion = state.section_expansion();
    let page_view = widgets::PageView::new(&page, &expansion, icons).focused(state.focus == Focus::Page);
    frame.render_stateful_widget(page_view, areas.page, &mut state.page_view);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if state.show_help {
        frame.render_widget(widgets::HelpOverlay, area);
    }
}
