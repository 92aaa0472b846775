//! Global selection container.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. Each setter replaces exactly one field and hands back the new
//! snapshot, so callers always render from one consistent value.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use crate::catalog::{Category, Method, parse_category, parse_method};
use crate::error::{CompareError, Result};

/// Which side of the comparison slider a method is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn id(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Currently chosen noise category and the two methods being compared.
/// Identical left and right methods are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Category,
    pub left_method: Method,
    pub right_method: Method,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            category: Category::Average,
            left_method: Method::Noisy,
            right_method: Method::UformerTuned,
        }
    }
}

impl Selection {
    pub fn with_category(self, category: Category) -> Self {
        Self { category, ..self }
    }

    pub fn with_method(self, side: Side, method: Method) -> Self {
        match side {
            Side::Left => Self {
                left_method: method,
                ..self
            },
            Side::Right => Self {
                right_method: method,
                ..self
            },
        }
    }

    pub fn method(&self, side: Side) -> Method {
        match side {
            Side::Left => self.left_method,
            Side::Right => self.right_method,
        }
    }
}

thread_local! {
    static SELECTION: RefCell<Selection> = RefCell::new(Selection::default());
}

/// Execute a closure with read access to the selection.
pub fn with_selection<F, R>(f: F) -> R
where
    F: FnOnce(&Selection) -> R,
{
    SELECTION.with(|s| f(&s.borrow()))
}

/// Copy of the current selection.
pub fn current() -> Selection {
    with_selection(|s| *s)
}

/// Replace the whole selection and return it.
pub fn replace_selection(new_selection: Selection) -> Selection {
    SELECTION.with(|s| {
        *s.borrow_mut() = new_selection;
    });
    new_selection
}

/// Back to the initial state, as on a fresh mount of the view.
pub fn reset_selection() -> Selection {
    tracing::debug!("selection reset to defaults");
    replace_selection(Selection::default())
}

fn update<F>(f: F) -> Selection
where
    F: FnOnce(Selection) -> Selection,
{
    SELECTION.with(|s| {
        let mut cur = s.borrow_mut();
        *cur = f(*cur);
        *cur
    })
}

pub fn set_category(id: &str) -> Result<Selection> {
    let category = parse_category(id).ok_or_else(|| {
        tracing::warn!(id, "rejected unknown category");
        CompareError::UnknownCategory(id.to_string())
    })?;
    let next = update(|s| s.with_category(category));
    tracing::debug!(category = category.id(), "category selected");
    Ok(next)
}

pub fn set_method(side: Side, id: &str) -> Result<Selection> {
    let method = parse_method(id).ok_or_else(|| {
        tracing::warn!(id, side = side.id(), "rejected unknown method");
        CompareError::UnknownMethod(id.to_string())
    })?;
    let next = update(|s| s.with_method(side, method));
    tracing::debug!(side = side.id(), method = method.id(), "method selected");
    Ok(next)
}

pub fn set_left_method(id: &str) -> Result<Selection> {
    set_method(Side::Left, id)
}

pub fn set_right_method(id: &str) -> Result<Selection> {
    set_method(Side::Right, id)
}

/// Export the selection as JSON.
pub fn export_selection_json() -> String {
    with_selection(|s| serde_json::to_string(s).unwrap_or_else(|_| "{}".to_string()))
}
