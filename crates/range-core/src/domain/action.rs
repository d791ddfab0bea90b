//! Action Entity
//!
//! A named, colored category a cell can be assigned to ("Raise", "Call"...).

use serde::{Deserialize, Serialize};

/// Maximum number of actions in one range
pub const MAX_ACTIONS: usize = 7;

/// Default palette, indexed by the current action count
pub const DEFAULT_COLORS: [&str; MAX_ACTIONS] = [
    "#ff4444", "#44ff44", "#4444ff", "#ffff44", "#ff44ff", "#44ffff", "#ff8844",
];

/// Action identifier, unique within a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub u32);

impl ActionId {
    /// The first action of every range; it can be edited but never deleted.
    pub const PRIMARY: ActionId = ActionId(1);
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CSS color string (hex, e.g. "#ff4444"). Compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Default palette color for the action about to be added at `count`
    pub fn default_for(count: usize) -> Self {
        Self::new(DEFAULT_COLORS[count % DEFAULT_COLORS.len()])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub name: String,
    pub color: Color,
}

impl Action {
    pub fn new(id: ActionId, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }

    /// Action with the default "Action {id}" name
    pub fn numbered(id: ActionId, color: Color) -> Self {
        Self::new(id, format!("Action {}", id), color)
    }

    /// The action every new range starts with
    pub fn primary() -> Self {
        Self::numbered(ActionId::PRIMARY, Color::default_for(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_action() {
        let action = Action::primary();
        assert_eq!(action.id, ActionId(1));
        assert_eq!(action.name, "Action 1");
        assert_eq!(action.color.as_str(), "#ff4444");
    }

    #[test]
    fn test_default_colors_cycle() {
        assert_eq!(Color::default_for(6).as_str(), "#ff8844");
        assert_eq!(Color::default_for(7).as_str(), "#ff4444");
    }
}
