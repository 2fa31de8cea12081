// App-wide constants and persisted UI settings
use crate::model::Coords;
use crate::storage::NoteStorage;
use crate::util::cwarn;

/// localStorage slot holding the JSON array of notes.
pub const NOTES_KEY: &str = "notes";
pub const PANEL_HIDDEN_KEY: &str = "notes_setting_panel_hidden";

/// Ankara, used when the user does not share a location.
pub const DEFAULT_CENTER: Coords = Coords::new(39.925696, 32.855806);
pub const DEFAULT_CENTER_LABEL: &str = "Varsayılan Konum";
pub const CURRENT_POSITION_LABEL: &str = "Mevcut Konum";

pub const INITIAL_ZOOM: u8 = 8;
pub const FLY_ZOOM: u8 = 10;

pub const MAP_CONTAINER_ID: &str = "map";
pub const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

pub const CONFIRM_DELETE_MESSAGE: &str = "Notu silmeyi onaylıyor musunuz?";

/// Missing, unreadable or unrecognized values mean the panel is shown.
pub fn load_panel_hidden(storage: &impl NoteStorage) -> bool {
    match storage.read(PANEL_HIDDEN_KEY) {
        Ok(Some(v)) => v == "1" || v == "true",
        Ok(None) => false,
        Err(e) => {
            cwarn(&format!("panel setting not read: {}", e));
            false
        }
    }
}

pub fn save_panel_hidden(storage: &mut impl NoteStorage, hidden: bool) {
    if let Err(e) = storage.write(PANEL_HIDDEN_KEY, if hidden { "1" } else { "0" }) {
        cwarn(&format!("panel setting not saved: {}", e));
    }
}
