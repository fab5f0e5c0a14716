// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event, animation ticks included, so the carousel moves
//! smoothly.

mod commander;
mod nav;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App, MainView,
    components::draw_home,
    model::Project,
    render::{commander::draw_commander, nav::draw_nav},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the section tabs, the active section, and the
/// command line footer.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing views to
///   record layout details (such as the carousel track area) as they draw.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    draw_nav(f, outer[0], app);

    let main = outer[1];
    match app.main_view {
        MainView::Home => draw_home(f, main, app.projects.len(), &app.theme),
        MainView::About => app.about_view.draw(f, main, &app.theme),
        MainView::Projects => {
            let all = &app.projects;
            let projects: Vec<&Project> = app.visible.iter().map(|i| &all[*i]).collect();
            app.showcase_view
                .draw(f, main, &projects, &app.filter, app.focus, &app.theme);
        }
        MainView::Contact => app
            .contact_view
            .draw(f, main, &app.config.contact, app.focus, &app.theme),
    }

    draw_commander(f, outer[2], app);
}

/// A centred rectangle taking the given percentages of `area`.
pub(crate) fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn popup_is_centred() {
        let popup = popup_area(Rect::new(0, 0, 100, 40), 80, 50);
        assert_eq!(popup, Rect::new(10, 10, 80, 20));
    }
}
