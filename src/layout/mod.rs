//! Which analytics sections are on screen.
//!
//! Visibility is a pure function of the selected tab and the viewport class.
//! The viewport class itself comes from a [`BreakpointObserver`], which turns a
//! stream of raw widths into class changes.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Overview,
    HumanMissions,
    Rockets,
    Costs,
    Timeline,
    Orbits,
    Missions,
    Family,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Overview,
        Section::HumanMissions,
        Section::Rockets,
        Section::Costs,
        Section::Timeline,
        Section::Orbits,
        Section::Missions,
        Section::Family,
    ];

    /// Tab caption, e.g. "Human Missions"
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::HumanMissions => "Human Missions",
            Section::Rockets => "Rockets",
            Section::Costs => "Costs",
            Section::Timeline => "Timeline",
            Section::Orbits => "Orbits",
            Section::Missions => "Missions",
            Section::Family => "Family",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    /// Tabs are shown, one section at a time
    Compact,
    /// Every section is laid out together
    Wide,
}

impl ViewportClass {
    pub fn for_width(width: u32, wide_min_width: u32) -> Self {
        if width >= wide_min_width {
            ViewportClass::Wide
        } else {
            ViewportClass::Compact
        }
    }
}

pub fn visible_sections(selected: Section, viewport: ViewportClass) -> Vec<Section> {
    match viewport {
        ViewportClass::Wide => Section::ALL.to_vec(),
        ViewportClass::Compact => vec![selected],
    }
}

pub fn is_visible(section: Section, selected: Section, viewport: ViewportClass) -> bool {
    viewport == ViewportClass::Wide || section == selected
}

/// Publishes viewport-class transitions to any number of subscribers
#[derive(Debug)]
pub struct BreakpointObserver {
    wide_min_width: u32,
    tx: watch::Sender<ViewportClass>,
}

impl BreakpointObserver {
    pub fn new(wide_min_width: u32, initial_width: u32) -> Self {
        let (tx, _rx) = watch::channel(ViewportClass::for_width(initial_width, wide_min_width));
        Self { wide_min_width, tx }
    }

    /// Feed a new width; subscribers are woken only when the class flips
    pub fn observe_width(&self, width: u32) -> bool {
        let class = ViewportClass::for_width(width, self.wide_min_width);
        self.tx.send_if_modified(|current| {
            if *current == class {
                false
            } else {
                *current = class;
                true
            }
        })
    }

    pub fn current(&self) -> ViewportClass {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewportClass> {
        self.tx.subscribe()
    }
}
