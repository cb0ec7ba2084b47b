use serde::{Deserialize, Deserializer, Serialize};

/// Category of a link record.
///
/// On the wire this is a plain string: `"code"`, `"music"`, or `""` for a
/// record that was saved without choosing a type. Anything else coming back
/// from the server (the form's `"all"` placeholder, `null`, unknown values)
/// is read as [`LinkType::Unset`] so a single odd record never breaks a
/// whole list fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum LinkType {
    #[default]
    Unset,
    Code,
    Music,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Unset => "",
            LinkType::Code => "code",
            LinkType::Music => "music",
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, LinkType::Unset)
    }
}

impl From<Option<String>> for LinkType {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("code") => LinkType::Code,
            Some(s) if s.eq_ignore_ascii_case("music") => LinkType::Music,
            _ => LinkType::Unset,
        }
    }
}

impl From<&str> for LinkType {
    fn from(raw: &str) -> Self {
        LinkType::from(Some(raw.to_string()))
    }
}

impl From<LinkType> for String {
    fn from(link_type: LinkType) -> Self {
        link_type.as_str().to_string()
    }
}

/// A link record as held by the store and exchanged with the `/links`
/// collection.
///
/// `id` is empty until the server (or the offline fallback) assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub link_type: LinkType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub paid: bool,
}

/// A link that has not been persisted yet. This is the POST body for
/// `/links`, so it carries no `id` field at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub link_type: LinkType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub paid: bool,
}

/// Fields a rendered row flags as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissingFields {
    pub url: bool,
    pub id: bool,
}

impl MissingFields {
    pub fn any(&self) -> bool {
        self.url || self.id
    }
}

impl Link {
    /// Builds a stored record from a draft and the id assigned to it.
    pub fn from_draft(draft: LinkDraft, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            url: draft.url,
            link_type: draft.link_type,
            description: draft.description,
            paid: draft.paid,
        }
    }

    /// The record minus its identity, e.g. to prefill the edit form.
    pub fn to_draft(&self) -> LinkDraft {
        LinkDraft {
            title: self.title.clone(),
            url: self.url.clone(),
            link_type: self.link_type,
            description: self.description.clone(),
            paid: self.paid,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// The URL to open for "view", or `None` when there is nothing to open.
    pub fn view_url(&self) -> Option<&str> {
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }

    /// `"paid"` or `"free"`, the same labels the paid filter matches on.
    pub fn paid_label(&self) -> &'static str {
        if self.paid { "paid" } else { "free" }
    }

    /// Presence checks shown next to each row.
    pub fn missing_fields(&self) -> MissingFields {
        MissingFields {
            url: self.url.is_empty(),
            id: self.id.is_empty(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
    Float(f64),
}

/// Accepts string or numeric ids; some REST mocks hand out integers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawId> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawId::Text(s)) => s,
        Some(RawId::Number(n)) => n.to_string(),
        Some(RawId::Float(f)) => f.to_string(),
        None => String::new(),
    })
}
