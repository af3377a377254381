//! A minimal drag engine: a board of lists whose items can be picked up and carried.

use crate::sensor::{Axis, DragCallbacks};
use ratatui::crossterm::event::KeyCode;

/// Location of an item on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub list: usize,
    pub index: usize,
}

/// Board state driven by the keyboard sensor.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    lists: Vec<Vec<String>>,
    focus: Position,
    /// Where the carried item was lifted from
    origin: Option<Position>,
    status: String,
}

impl BoardEngine {
    pub fn new(lists: usize, items_per_list: usize) -> Self {
        let lists = (0..lists)
            .map(|list| {
                (0..items_per_list)
                    .map(|item| format!("Item {}.{}", list + 1, item + 1))
                    .collect()
            })
            .collect();

        Self {
            lists,
            focus: Position { list: 0, index: 0 },
            origin: None,
            status: "Space lifts, arrows move, Space drops, Esc cancels, q quits".to_string(),
        }
    }

    pub fn lists(&self) -> &[Vec<String>] {
        &self.lists
    }

    pub fn focus(&self) -> Position {
        self.focus
    }

    /// The item currently being carried, if any.
    pub fn carried(&self) -> Option<Position> {
        self.origin.map(|_| self.focus)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// A lift needs an item under the focus.
    pub fn can_lift(&self) -> bool {
        self.origin.is_none() && self.item(self.focus).is_some()
    }

    pub fn item(&self, pos: Position) -> Option<&str> {
        self.lists
            .get(pos.list)
            .and_then(|list| list.get(pos.index))
            .map(String::as_str)
    }

    /// Move the focus while idle. Keys that are not arrows are ignored.
    pub fn move_focus(&mut self, code: KeyCode, axis: Axis) {
        let (along, across): (isize, isize) = match (axis, code) {
            (Axis::Vertical, KeyCode::Down) | (Axis::Horizontal, KeyCode::Right) => (1, 0),
            (Axis::Vertical, KeyCode::Up) | (Axis::Horizontal, KeyCode::Left) => (-1, 0),
            (Axis::Vertical, KeyCode::Right) | (Axis::Horizontal, KeyCode::Down) => (0, 1),
            (Axis::Vertical, KeyCode::Left) | (Axis::Horizontal, KeyCode::Up) => (0, -1),
            _ => return,
        };

        if across != 0 {
            if let Some(list) = step(self.focus.list, across, self.lists.len()) {
                let len = self.lists[list].len();
                self.focus = Position {
                    list,
                    index: self.focus.index.min(len.saturating_sub(1)),
                };
            }
        } else {
            let len = self.lists[self.focus.list].len();
            if let Some(index) = step(self.focus.index, along, len) {
                self.focus.index = index;
            }
        }
    }

    fn carried_name(&self) -> String {
        self.item(self.focus).unwrap_or("item").to_string()
    }

    fn reorder(&mut self, delta: isize) {
        if self.origin.is_none() {
            return;
        }
        let list = &mut self.lists[self.focus.list];
        if let Some(target) = step(self.focus.index, delta, list.len()) {
            list.swap(self.focus.index, target);
            self.focus.index = target;
            self.status = format!(
                "Moved {} to position {}",
                self.carried_name(),
                target + 1
            );
        }
    }

    fn transfer(&mut self, delta: isize) {
        if self.origin.is_none() {
            return;
        }
        let Some(target_list) = step(self.focus.list, delta, self.lists.len()) else {
            return;
        };
        let item = self.lists[self.focus.list].remove(self.focus.index);
        let index = self.focus.index.min(self.lists[target_list].len());
        self.lists[target_list].insert(index, item);
        self.focus = Position {
            list: target_list,
            index,
        };
        self.status = format!("Moved {} to list {}", self.carried_name(), target_list + 1);
    }
}

/// `value + delta` if it stays below `len`.
fn step(value: usize, delta: isize, len: usize) -> Option<usize> {
    value.checked_add_signed(delta).filter(|next| *next < len)
}

impl DragCallbacks for BoardEngine {
    fn on_key_lift(&mut self) {
        self.origin = Some(self.focus);
        self.status = format!("Lifted {}", self.carried_name());
    }

    fn on_drop(&mut self) {
        self.origin = None;
        self.status = format!(
            "Dropped {} in list {} at position {}",
            self.carried_name(),
            self.focus.list + 1,
            self.focus.index + 1
        );
    }

    fn on_cancel(&mut self) {
        let Some(origin) = self.origin.take() else {
            return;
        };
        let item = self.lists[self.focus.list].remove(self.focus.index);
        let name = item.clone();
        self.lists[origin.list].insert(origin.index, item);
        self.focus = origin;
        self.status = format!("Cancelled, {} returned to its place", name);
    }

    fn move_forward(&mut self) {
        self.reorder(1);
    }

    fn move_backward(&mut self) {
        self.reorder(-1);
    }

    fn cross_axis_move_forward(&mut self) {
        self.transfer(1);
    }

    fn cross_axis_move_backward(&mut self) {
        self.transfer(-1);
    }
}
