//! Door views.
//!
//! Each physical door between two rooms is stored twice, once in each room,
//! facing opposite compass directions. The dungeon exit is stored once.

use delve_data::Compass;

use crate::room::RoomIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Portal {
    Door { material: String },
    Doorway,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    pub direction: Compass,
    pub portal: Portal,
    pub description: String,
    pub locked: bool,
    pub closed: bool,
    /// Room on the other side. `None` only for the exit.
    pub leads_to: Option<RoomIndex>,
    pub is_exit: bool,
}

impl Door {
    pub fn is_doorway(&self) -> bool {
        matches!(self.portal, Portal::Doorway)
    }

    pub fn material(&self) -> Option<&str> {
        match &self.portal {
            Portal::Door { material } => Some(material),
            Portal::Doorway => None,
        }
    }

    /// "iron door" or "doorway".
    pub fn title(&self) -> String {
        match &self.portal {
            Portal::Door { material } => format!("{material} door"),
            Portal::Doorway => "doorway".to_string(),
        }
    }

    /// "north iron door".
    pub fn full_title(&self) -> String {
        format!("{} {}", self.direction, self.title())
    }

    /// Last word of the title: "door" or "doorway".
    pub fn kind_word(&self) -> &'static str {
        match self.portal {
            Portal::Door { .. } => "door",
            Portal::Doorway => "doorway",
        }
    }
}
