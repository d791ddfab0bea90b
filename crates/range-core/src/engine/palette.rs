//! Action Palette
//!
//! Ordered list of up to seven actions. Edits and deletes cascade into the
//! grid that is passed in, so cell colors never drift from their action.

use crate::domain::{
    check_actions, Action, ActionId, Color, DomainError, DomainResult, Grid, Paint, MAX_ACTIONS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPalette {
    actions: Vec<Action>,
    active: ActionId,
    /// Action whose name/color form is open
    editing: Option<ActionId>,
    /// Highest id ever handed out; ids are not reused after a delete
    high_water: u32,
}

impl Default for ActionPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionPalette {
    /// Palette of a new range: just "Action 1"
    pub fn new() -> Self {
        Self {
            actions: vec![Action::primary()],
            active: ActionId::PRIMARY,
            editing: None,
            high_water: ActionId::PRIMARY.0,
        }
    }

    /// Palette of a loaded range. The first action becomes active.
    pub fn from_actions(actions: Vec<Action>) -> DomainResult<Self> {
        check_actions(&actions)?;
        let active = actions.first().map_or(ActionId::PRIMARY, |a| a.id);
        let high_water = actions.iter().map(|a| a.id.0).max().unwrap_or(1);
        Ok(Self {
            actions,
            active,
            editing: None,
            high_water,
        })
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn active(&self) -> ActionId {
        self.active
    }

    pub fn active_action(&self) -> Option<&Action> {
        self.get(self.active)
    }

    pub fn editing(&self) -> Option<ActionId> {
        self.editing
    }

    pub fn is_full(&self) -> bool {
        self.actions.len() >= MAX_ACTIONS
    }

    /// Brush for the paint engine
    pub fn brush(&self) -> Option<Paint> {
        self.active_action()
            .map(|a| Paint::new(a.color.clone(), a.id))
    }

    /// Append the next numbered action with the next default color.
    /// Returns None when the palette is full.
    pub fn add(&mut self) -> Option<ActionId> {
        if self.is_full() {
            return None;
        }
        let current_max = self.actions.iter().map(|a| a.id.0).max().unwrap_or(0);
        let id = ActionId(current_max.max(self.high_water) + 1);
        self.high_water = id.0;

        let color = Color::default_for(self.actions.len());
        self.actions.push(Action::numbered(id, color));
        self.active = id;
        self.editing = Some(id);
        log::debug!("added action {}", id);
        Some(id)
    }

    /// Rename/recolor an action; cells painted with it take the new color.
    /// Returns the number of recolored cells.
    pub fn edit(
        &mut self,
        id: ActionId,
        name: &str,
        color: Color,
        grid: &mut Grid,
    ) -> DomainResult<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Please enter an action name".to_string()));
        }
        let action = self
            .actions
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("action {}", id)))?;

        action.name = name.to_string();
        action.color = color;
        Ok(grid.recolor_action(id, &action.color))
    }

    /// Remove an action and clear its cells. The primary action cannot be
    /// deleted. Returns whether anything was removed.
    pub fn delete(&mut self, id: ActionId, grid: &mut Grid) -> bool {
        // the palette never goes empty
        if id == ActionId::PRIMARY || self.actions.len() <= 1 {
            return false;
        }
        let Some(pos) = self.actions.iter().position(|a| a.id == id) else {
            return false;
        };
        self.actions.remove(pos);
        let cleared = grid.clear_action(id);
        log::debug!("deleted action {} ({} cells cleared)", id, cleared);

        if self.active == id {
            self.active = match self.get(ActionId::PRIMARY) {
                Some(primary) => primary.id,
                None => self.actions.first().map_or(ActionId::PRIMARY, |a| a.id),
            };
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        true
    }

    /// Select the brush; the action's edit form opens with it
    pub fn set_active(&mut self, id: ActionId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active = id;
        self.editing = Some(id);
        true
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint_cells(grid: &mut Grid, indices: &[usize], palette: &ActionPalette, id: ActionId) {
        let action = palette.get(id).unwrap();
        for &i in indices {
            grid.set_paint(i, Some(Paint::new(action.color.clone(), id)));
        }
    }

    #[test]
    fn test_add_assigns_next_id_and_color() {
        let mut palette = ActionPalette::new();
        let id = palette.add().unwrap();
        assert_eq!(id, ActionId(2));
        let action = palette.get(id).unwrap();
        assert_eq!(action.name, "Action 2");
        assert_eq!(action.color.as_str(), "#44ff44");
        assert_eq!(palette.active(), id);
        assert_eq!(palette.editing(), Some(id));
    }

    #[test]
    fn test_add_stops_at_seven() {
        let mut palette = ActionPalette::new();
        for _ in 0..6 {
            assert!(palette.add().is_some());
        }
        assert!(palette.is_full());
        assert_eq!(palette.add(), None);
        assert_eq!(palette.actions().len(), 7);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut palette = ActionPalette::new();
        let mut grid = Grid::new();
        palette.add();
        let three = palette.add().unwrap();
        assert!(palette.delete(three, &mut grid));
        assert_eq!(palette.add(), Some(ActionId(4)));
    }

    #[test]
    fn test_delete_clears_exactly_its_cells() {
        let mut palette = ActionPalette::new();
        let mut grid = Grid::new();
        let two = palette.add().unwrap();
        paint_cells(&mut grid, &[0, 1, 2], &palette, ActionId::PRIMARY);
        paint_cells(&mut grid, &[10, 20, 30, 40, 50], &palette, two);

        assert!(palette.delete(two, &mut grid));
        assert_eq!(grid.count_action(two), 0);
        assert_eq!(grid.painted_count(), 3);
        assert_eq!(palette.active(), ActionId::PRIMARY);
        assert_eq!(palette.editing(), None);
    }

    #[test]
    fn test_delete_primary_is_noop() {
        let mut palette = ActionPalette::new();
        let mut grid = Grid::new();
        paint_cells(&mut grid, &[0], &palette, ActionId::PRIMARY);
        assert!(!palette.delete(ActionId::PRIMARY, &mut grid));
        assert_eq!(palette.actions().len(), 1);
        assert_eq!(grid.painted_count(), 1);
    }

    #[test]
    fn test_edit_recolors_cells() {
        let mut palette = ActionPalette::new();
        let mut grid = Grid::new();
        paint_cells(&mut grid, &[3, 4], &palette, ActionId::PRIMARY);

        let changed = palette
            .edit(ActionId::PRIMARY, " Raise ", Color::new("#123456"), &mut grid)
            .unwrap();
        assert_eq!(changed, 2);
        assert_eq!(palette.get(ActionId::PRIMARY).unwrap().name, "Raise");
        assert_eq!(grid.get(3).unwrap().color().unwrap().as_str(), "#123456");
        assert_eq!(palette.brush().unwrap().color.as_str(), "#123456");
    }

    #[test]
    fn test_edit_rejects_empty_name() {
        let mut palette = ActionPalette::new();
        let mut grid = Grid::new();
        let err = palette
            .edit(ActionId::PRIMARY, "  ", Color::new("#000000"), &mut grid)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(palette.get(ActionId::PRIMARY).unwrap().name, "Action 1");
    }

    #[test]
    fn test_set_active_unknown_is_ignored() {
        let mut palette = ActionPalette::new();
        assert!(!palette.set_active(ActionId(5)));
        assert_eq!(palette.active(), ActionId::PRIMARY);
    }

    #[test]
    fn test_from_actions_tracks_high_water() {
        let actions = vec![
            Action::primary(),
            Action::numbered(ActionId(5), Color::default_for(1)),
        ];
        let mut palette = ActionPalette::from_actions(actions).unwrap();
        assert_eq!(palette.add(), Some(ActionId(6)));
    }
}
