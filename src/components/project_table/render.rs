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

//! UI rendering logic for the project table.
//!
//! This module handles the visual representation of the visible projects,
//! including column layout, cursor highlighting, and theme application.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::ProjectTable, model::Project, theme::Theme, util::format::format_stars};

impl ProjectTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, projects: &[&Project], theme: &Theme) {
        let rows = projects.iter().map(|project| {
            let marker = if project.featured {
                Line::from("*").style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let status = project.status.map(|s| s.label()).unwrap_or_default();

            Row::new(vec![
                Cell::from(marker),
                Cell::from(Line::from(project.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(project.category.label()).style(Style::default().fg(theme.table_category_fg))),
                Cell::from(Line::from(project.year.to_string()).style(Style::default().fg(theme.table_year_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(format_stars(project.stars())).style(Style::default().fg(theme.table_stars_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(status).style(Style::default().fg(theme.muted_fg))),
                Cell::from(Line::from(project.tags.join(", ")).style(Style::default().fg(theme.tag_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Percentage(30),
                Constraint::Length(6),
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Type"),
                Cell::from(Line::from("Year").alignment(Alignment::Right)),
                Cell::from(Line::from("Stars").alignment(Alignment::Right)),
                Cell::from("Status"),
                Cell::from("Tags"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
