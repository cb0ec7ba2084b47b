//! Filter and sort settings driven by the filter bar.
//!
//! The string forms accepted by the `FromStr` impls are the `value`
//! attributes of the filter bar's `<select>` options, so the rendering layer
//! can forward raw control values without a translation table of its own.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::link::{Link, LinkType};

/// Category restriction of the filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Code,
    Music,
}

impl TypeFilter {
    pub fn accepts(&self, link_type: LinkType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Code => link_type == LinkType::Code,
            TypeFilter::Music => link_type == LinkType::Music,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Code => "code",
            TypeFilter::Music => "music",
        }
    }
}

impl FromStr for TypeFilter {
    type Err = UnknownControlValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TypeFilter::All),
            "code" => Ok(TypeFilter::Code),
            "music" => Ok(TypeFilter::Music),
            other => Err(UnknownControlValue(other.to_string())),
        }
    }
}

/// Paid/free restriction of the filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaidFilter {
    #[default]
    All,
    Paid,
    Free,
}

impl PaidFilter {
    pub fn accepts(&self, paid: bool) -> bool {
        match self {
            PaidFilter::All => true,
            PaidFilter::Paid => paid,
            PaidFilter::Free => !paid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaidFilter::All => "all",
            PaidFilter::Paid => "paid",
            PaidFilter::Free => "free",
        }
    }
}

impl FromStr for PaidFilter {
    type Err = UnknownControlValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PaidFilter::All),
            "paid" => Ok(PaidFilter::Paid),
            "free" => Ok(PaidFilter::Free),
            other => Err(UnknownControlValue(other.to_string())),
        }
    }
}

/// A control value that does not name any option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control value: {0:?}")]
pub struct UnknownControlValue(pub String);

/// The filter bar's filter controls. `Default` shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against title or description.
    pub title_query: String,
    pub link_type: TypeFilter,
    pub paid: PaidFilter,
}

impl FilterSpec {
    pub fn is_default(&self) -> bool {
        self.title_query.is_empty()
            && self.link_type == TypeFilter::All
            && self.paid == PaidFilter::All
    }

    /// The display predicate. An empty query matches every record.
    pub fn matches(&self, link: &Link) -> bool {
        self.matches_query(link) && self.link_type.accepts(link.link_type) && self.paid.accepts(link.paid)
    }

    fn matches_query(&self, link: &Link) -> bool {
        if self.title_query.is_empty() {
            return true;
        }
        let needle = self.title_query.to_lowercase();
        link.title.to_lowercase().contains(&needle) || link.description.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Type,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Selected table ordering. `None` keeps collection order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortSpec {
    #[default]
    None,
    By(SortField, SortDirection),
}

impl SortSpec {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        SortSpec::By(field, direction)
    }

    /// Parses a sort select value. The disabled `"all"` placeholder and any
    /// unrecognised value mean "no sort".
    pub fn from_control(value: &str) -> Self {
        use SortDirection::*;
        use SortField::*;
        match value {
            "ascByTitle" => SortSpec::By(Title, Asc),
            "descByTitle" => SortSpec::By(Title, Desc),
            "ascByType" => SortSpec::By(Type, Asc),
            "descByType" => SortSpec::By(Type, Desc),
            "ascByPaid" => SortSpec::By(Paid, Asc),
            "descByPaid" => SortSpec::By(Paid, Desc),
            _ => SortSpec::None,
        }
    }

    /// The select value that produces this spec.
    pub fn control_value(&self) -> &'static str {
        use SortDirection::*;
        use SortField::*;
        match self {
            SortSpec::None => "all",
            SortSpec::By(Title, Asc) => "ascByTitle",
            SortSpec::By(Title, Desc) => "descByTitle",
            SortSpec::By(Type, Asc) => "ascByType",
            SortSpec::By(Type, Desc) => "descByType",
            SortSpec::By(Paid, Asc) => "ascByPaid",
            SortSpec::By(Paid, Desc) => "descByPaid",
        }
    }
}

/// How a filter and a sort combine into the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Filter and sort are separate views of the full list; the control the
    /// user touched last decides which one is shown.
    #[default]
    LastActionWins,
    /// The filtered list is sorted.
    Composed,
}

impl FromStr for ProjectionMode {
    type Err = UnknownControlValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "last_action_wins" | "last-action-wins" => Ok(ProjectionMode::LastActionWins),
            "composed" => Ok(ProjectionMode::Composed),
            other => Err(UnknownControlValue(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str, description: &str, link_type: LinkType, paid: bool) -> Link {
        Link {
            id: title.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            link_type,
            paid,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = FilterSpec::default();
        assert!(filter.is_default());
        assert!(filter.matches(&link("", "", LinkType::Unset, true)));
        assert!(filter.matches(&link("a", "b", LinkType::Music, false)));
    }

    #[test]
    fn test_query_matches_title_or_description_case_insensitively() {
        let filter = FilterSpec {
            title_query: "RuSt".to_string(),
            ..Default::default()
        };
        assert!(filter.matches(&link("The Rust Book", "", LinkType::Code, false)));
        assert!(filter.matches(&link("Book", "learn rust", LinkType::Code, false)));
        assert!(!filter.matches(&link("Go", "gophers", LinkType::Code, false)));
    }

    #[test]
    fn test_type_and_paid_restrictions() {
        let filter = FilterSpec {
            link_type: TypeFilter::Music,
            paid: PaidFilter::Free,
            ..Default::default()
        };
        assert!(filter.matches(&link("a", "", LinkType::Music, false)));
        assert!(!filter.matches(&link("a", "", LinkType::Music, true)));
        assert!(!filter.matches(&link("a", "", LinkType::Code, false)));
        assert!(!filter.matches(&link("a", "", LinkType::Unset, false)));
    }

    #[test]
    fn test_control_values() {
        assert_eq!("music".parse::<TypeFilter>(), Ok(TypeFilter::Music));
        assert_eq!("free".parse::<PaidFilter>(), Ok(PaidFilter::Free));
        assert!("both".parse::<PaidFilter>().is_err());
        assert_eq!(
            SortSpec::from_control("descByPaid"),
            SortSpec::by(SortField::Paid, SortDirection::Desc)
        );
        assert_eq!(SortSpec::from_control("all"), SortSpec::None);
        assert_eq!(SortSpec::from_control("ascByType").control_value(), "ascByType");
    }

    #[test]
    fn test_projection_mode_parse() {
        assert_eq!("".parse::<ProjectionMode>(), Ok(ProjectionMode::LastActionWins));
        assert_eq!("Composed".parse::<ProjectionMode>(), Ok(ProjectionMode::Composed));
        assert!("both".parse::<ProjectionMode>().is_err());
    }
}
