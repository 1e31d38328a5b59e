use std::collections::HashSet;
use thiserror::Error;

/// A named, anchorable region of the page. `id` doubles as the DOM id
/// the navigation links point at (`#<id>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub order: u32,
}

impl Section {
    pub const fn new(id: &'static str, order: u32) -> Self {
        Self { id, order }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section registry is empty")]
    Empty,
    #[error("duplicate section id `{0}`")]
    DuplicateId(&'static str),
    #[error("section `{id}` has order {order}, expected more than {previous}")]
    OutOfOrder {
        id: &'static str,
        order: u32,
        previous: u32,
    },
}

/// Ordered, validated list of page sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

pub const PAGE_SECTIONS: [Section; 5] = [
    Section::new("home", 0),
    Section::new("about", 1),
    Section::new("services", 2),
    Section::new("expertise", 3),
    Section::new("contact", 4),
];

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        let mut previous: Option<u32> = None;
        for section in &sections {
            if !seen.insert(section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
            if let Some(previous) = previous {
                if section.order <= previous {
                    return Err(RegistryError::OutOfOrder {
                        id: section.id,
                        order: section.order,
                        previous,
                    });
                }
            }
            previous = Some(section.order);
        }

        Ok(Self { sections })
    }

    /// The five sections of the marketing page.
    pub fn page() -> Result<Self, RegistryError> {
        Self::new(PAGE_SECTIONS.to_vec())
    }

    // Never empty, enforced in `new`.
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}
