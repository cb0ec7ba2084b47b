//! Contents of the add/edit form, independent of the DOM.

use links_common::{Link, LinkDraft, LinkType};

/// Value of the type select's disabled "Choose type..." option.
pub const TYPE_PLACEHOLDER: &str = "all";

/// One edited form control.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Title(String),
    Url(String),
    Type(LinkType),
    Description(String),
    Paid(bool),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub title: String,
    pub url: String,
    pub link_type: LinkType,
    pub description: String,
    pub paid: bool,
}

impl FormState {
    pub fn apply(&mut self, field: FormField) {
        match field {
            FormField::Title(v) => self.title = v,
            FormField::Url(v) => self.url = v,
            FormField::Type(v) => self.link_type = v,
            FormField::Description(v) => self.description = v,
            FormField::Paid(v) => self.paid = v,
        }
    }

    /// Prefills the form with a record picked for editing.
    pub fn from_link(link: &Link) -> Self {
        Self {
            title: link.title.clone(),
            url: link.url.clone(),
            link_type: link.link_type,
            description: link.description.clone(),
            paid: link.paid,
        }
    }

    pub fn to_draft(&self) -> LinkDraft {
        LinkDraft {
            title: self.title.clone(),
            url: self.url.clone(),
            link_type: self.link_type,
            description: self.description.clone(),
            paid: self.paid,
        }
    }

    /// The form's fields on top of `original`, keeping its id.
    pub fn to_update(&self, original: &Link) -> Link {
        Link::from_draft(self.to_draft(), original.id.clone())
    }

    /// Value to select in the type control.
    pub fn type_value(&self) -> &'static str {
        if self.link_type.is_unset() {
            TYPE_PLACEHOLDER
        } else {
            self.link_type.as_str()
        }
    }
}
