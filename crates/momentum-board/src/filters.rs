/*
[INPUT]:  Filter bar selections
[OUTPUT]: Which filter dropdown is highlighted
[POS]:    Presentation layer - filter bar state (no filtering is applied)
[UPDATE]: When adding filter dropdowns
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Department,
    Priority,
    SortByDate,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Department,
        FilterKind::Priority,
        FilterKind::SortByDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::Department => "Department",
            FilterKind::Priority => "Priority",
            FilterKind::SortByDate => "Sort by date",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    active: Option<FilterKind>,
}

impl Filters {
    pub fn active(&self) -> Option<FilterKind> {
        self.active
    }

    pub fn is_active(&self, kind: FilterKind) -> bool {
        self.active == Some(kind)
    }

    /// Select `kind`, or clear it when it is already the active one
    pub fn toggle(&mut self, kind: FilterKind) {
        self.active = if self.active == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }

    /// Focus left the filter bar
    pub fn blur(&mut self) {
        self.active = None;
    }
}
