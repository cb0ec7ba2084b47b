//! Derives the displayed table rows from the store contents.
//!
//! [`project`] is the pure building block. [`ViewProjector`] tracks what the
//! user did last in the filter bar and decides which projection of the full
//! record set is on screen.

use std::cmp::Ordering;

use crate::model::{FilterSpec, Link, PaidFilter, ProjectionMode, SortDirection, SortField, SortSpec, TypeFilter};

/// Filters `records` with `filter`, then orders the survivors by `sort`.
///
/// With the default filter and [`SortSpec::None`] the input comes back as is.
pub fn project(records: &[Link], filter: &FilterSpec, sort: SortSpec) -> Vec<Link> {
    let mut rows: Vec<Link> = records.iter().filter(|link| filter.matches(link)).cloned().collect();
    sort_links(&mut rows, sort);
    rows
}

/// Stable in-place sort.
pub fn sort_links(rows: &mut [Link], sort: SortSpec) {
    let SortSpec::By(field, direction) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = compare_field(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_field(a: &Link, b: &Link, field: SortField) -> Ordering {
    match field {
        SortField::Title => locale_compare(&a.title, &b.title),
        SortField::Type => locale_compare(a.link_type.as_str(), b.link_type.as_str()),
        SortField::Paid => a.paid.cmp(&b.paid),
    }
}

/// Case-insensitive comparison with case as the tie-break, so `"apple"`
/// sorts next to `"Apple"` rather than after `"Zebra"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    // lowercase before uppercase on a tie, matching common collations
    primary.then_with(|| b.cmp(a))
}

/// The filter bar control that changed most recently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LastAction {
    #[default]
    None,
    Filter,
    Sort,
}

/// Holds the filter bar's state and turns store contents into table rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewProjector {
    filter: FilterSpec,
    sort: SortSpec,
    last_action: LastAction,
    mode: ProjectionMode,
}

impl ViewProjector {
    pub fn new(mode: ProjectionMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn set_title_query(&mut self, query: impl Into<String>) {
        self.filter.title_query = query.into();
        self.last_action = LastAction::Filter;
    }

    pub fn set_type(&mut self, link_type: TypeFilter) {
        self.filter.link_type = link_type;
        self.last_action = LastAction::Filter;
    }

    pub fn set_paid(&mut self, paid: PaidFilter) {
        self.filter.paid = paid;
        self.last_action = LastAction::Filter;
    }

    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.last_action = LastAction::Filter;
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.last_action = LastAction::Sort;
    }

    /// "Clear All": default filter, no sort, raw list.
    pub fn clear(&mut self) {
        self.filter = FilterSpec::default();
        self.sort = SortSpec::None;
        self.last_action = LastAction::None;
    }

    /// Rows to display for `records`.
    pub fn view(&self, records: &[Link]) -> Vec<Link> {
        match self.mode {
            ProjectionMode::Composed => project(records, &self.filter, self.sort),
            ProjectionMode::LastActionWins => match self.last_action {
                LastAction::None => records.to_vec(),
                LastAction::Filter => project(records, &self.filter, SortSpec::None),
                LastAction::Sort => project(records, &FilterSpec::default(), self.sort),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinkType;

    fn link(id: &str, title: &str, link_type: LinkType, paid: bool) -> Link {
        Link {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://{id}.example"),
            link_type,
            description: format!("about {title}"),
            paid,
        }
    }

    fn sample() -> Vec<Link> {
        vec![
            link("1", "Example", LinkType::Code, false),
            link("2", "Other", LinkType::Music, true),
            link("3", "banana", LinkType::Unset, false),
            link("4", "Apple", LinkType::Code, true),
        ]
    }

    fn ids(rows: &[Link]) -> Vec<&str> {
        rows.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_default_projection_is_identity() {
        let records = sample();
        assert_eq!(project(&records, &FilterSpec::default(), SortSpec::None), records);
    }

    #[test]
    fn test_filter_output_is_exactly_the_matching_records() {
        let records = sample();
        let filters = [
            FilterSpec {
                title_query: "e".to_string(),
                ..Default::default()
            },
            FilterSpec {
                link_type: TypeFilter::Code,
                paid: PaidFilter::Paid,
                ..Default::default()
            },
            FilterSpec {
                title_query: "ABOUT".to_string(),
                paid: PaidFilter::Free,
                ..Default::default()
            },
        ];
        for filter in &filters {
            let rows = project(&records, filter, SortSpec::None);
            assert!(rows.iter().all(|l| filter.matches(l)));
            let expected: Vec<Link> = records.iter().filter(|l| filter.matches(l)).cloned().collect();
            assert_eq!(rows, expected);
        }
    }

    #[test]
    fn test_query_ex_keeps_only_example() {
        let records = vec![
            link("1", "Example", LinkType::Code, false),
            link("2", "Other", LinkType::Code, false),
        ];
        let filter = FilterSpec {
            title_query: "ex".to_string(),
            ..Default::default()
        };
        // description "about Other" must not match "ex" either
        assert_eq!(ids(&project(&records, &filter, SortSpec::None)), vec!["1"]);
    }

    #[test]
    fn test_title_sort_directions_are_reverses() {
        let records = sample();
        let asc = project(&records, &FilterSpec::default(), SortSpec::by(SortField::Title, SortDirection::Asc));
        let desc = project(&records, &FilterSpec::default(), SortSpec::by(SortField::Title, SortDirection::Desc));
        assert_eq!(ids(&asc), vec!["4", "3", "1", "2"]);
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(asc, reversed);
    }

    #[test]
    fn test_paid_sort_is_stable_and_free_first() {
        let records = sample();
        let asc = project(&records, &FilterSpec::default(), SortSpec::by(SortField::Paid, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["1", "3", "2", "4"]);
        let desc = project(&records, &FilterSpec::default(), SortSpec::by(SortField::Paid, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_type_sort_puts_unset_first() {
        let records = sample();
        let asc = project(&records, &FilterSpec::default(), SortSpec::by(SortField::Type, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["3", "1", "4", "2"]);
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_last_action_wins() {
        let records = sample();
        let mut projector = ViewProjector::default();
        assert_eq!(projector.view(&records), records);

        projector.set_paid(PaidFilter::Paid);
        assert_eq!(ids(&projector.view(&records)), vec!["2", "4"]);

        // the sort view is taken over the full list and ignores the filter
        projector.set_sort(SortSpec::by(SortField::Title, SortDirection::Asc));
        assert_eq!(ids(&projector.view(&records)), vec!["4", "3", "1", "2"]);

        // touching the filter again shows the filtered list unsorted
        projector.set_title_query("");
        assert_eq!(ids(&projector.view(&records)), vec!["2", "4"]);

        projector.clear();
        assert_eq!(projector.view(&records), records);
        assert_eq!(projector.sort(), SortSpec::None);
        assert!(projector.filter().is_default());
    }

    #[test]
    fn test_composed_mode_filters_then_sorts() {
        let records = sample();
        let mut projector = ViewProjector::new(ProjectionMode::Composed);
        projector.set_paid(PaidFilter::Paid);
        projector.set_sort(SortSpec::by(SortField::Title, SortDirection::Asc));
        assert_eq!(ids(&projector.view(&records)), vec!["4", "2"]);
    }
}
