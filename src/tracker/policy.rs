use super::registry::SectionRegistry;

/// Vertical extent of a rendered element, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Read-only view of the page layout. Every query may come back empty
/// (no window, element not mounted yet) and callers skip the update then.
pub trait Geometry {
    fn scroll_y(&self) -> Option<f64>;
    fn viewport_height(&self) -> Option<f64>;
    fn section_rect(&self, id: &str) -> Option<Rect>;
}

/// Header height the bounding-box policy tests against.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// How the active section is derived from the current layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivePolicy {
    /// Treats every section as exactly one viewport tall. Breaks as soon as
    /// a section renders taller or shorter than the viewport.
    OffsetBanding,
    /// First section whose rendered rectangle crosses `threshold`.
    BoundingBox { threshold: f64 },
}

impl Default for ActivePolicy {
    fn default() -> Self {
        ActivePolicy::BoundingBox {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ActivePolicy {
    /// Pure function of the registry and the current geometry. `None` means
    /// "no answer", and the previous active section should stay.
    pub fn resolve(&self, registry: &SectionRegistry, geometry: &dyn Geometry) -> Option<&'static str> {
        match *self {
            ActivePolicy::OffsetBanding => {
                let scroll_y = geometry.scroll_y()?;
                let viewport = geometry.viewport_height()?;
                registry
                    .iter()
                    .enumerate()
                    .find(|(index, _)| *index as f64 * viewport + viewport > scroll_y)
                    .map(|(_, section)| section.id)
            }
            ActivePolicy::BoundingBox { threshold } => registry
                .iter()
                .find(|section| {
                    geometry
                        .section_rect(section.id)
                        .map_or(false, |rect| rect.straddles(threshold))
                })
                .map(|section| section.id),
        }
    }
}
