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

//! Interactive views.
//!
//! Each view keeps its own state, maps raw terminal input to a view action
//! (`event`), and draws itself (`render`). Views never talk to the task
//! worker directly; the event layer turns their actions into tasks.

mod about;
mod contact_form;
mod home;
mod project_table;
mod showcase;

pub(crate) use about::AboutView;
pub(crate) use contact_form::{Banner, ContactAction, ContactView};
pub(crate) use home::draw_home;
pub(crate) use project_table::ProjectTable;
pub(crate) use showcase::{ShowcaseAction, ShowcaseLayout, ShowcaseView};
