// Filter and expansion state of the /types-detail page

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypesDetailState {
    /// `None` shows every category
    pub selected_category: Option<String>,
    pub expanded_type: Option<String>,
}

impl TypesDetailState {
    pub fn select_category(&mut self, category: Option<&str>) {
        self.selected_category = category.map(str::to_string);
    }

    /// Expand `id`, or collapse it if it is already expanded. One type at a time.
    pub fn toggle_type(&mut self, id: &str) {
        if self.expanded_type.as_deref() == Some(id) {
            self.expanded_type = None;
        } else {
            self.expanded_type = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_type.as_deref() == Some(id)
    }
}
