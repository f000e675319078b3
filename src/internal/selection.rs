use crate::internal::models::{FetchState, Story};

/// Tracks which story (if any) is currently open, by id rather than by
/// reference, so a refetch can never leave a stale story on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected_id: Option<u32>,
}

impl Selection {
    /// Overwrite the selected id. Deliberately does not validate that the id
    /// exists: selection and data arrival may race, and the lookup in
    /// [`Selection::current`] resolves the race.
    pub fn select(&mut self, id: u32) {
        self.selected_id = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected_id
    }

    /// Resolve the selected story against whatever story list is currently
    /// available. Ids absent from the `Ready` list (or any non-`Ready` state)
    /// resolve to `None`, never an error.
    pub fn current<'a>(&self, fetch: &'a FetchState) -> Option<&'a Story> {
        let id = self.selected_id?;
        fetch.stories()?.iter().find(|story| story.id == id)
    }
}
