use crate::config::{CONFIRM_DELETE_MESSAGE, FLY_ZOOM};
use crate::map::MapAdapter;
use crate::model::{Coords, NoteDraft, NoteId};
use crate::storage::NoteStorage;
use crate::util::{clog, cwarn};

use super::render::{NoteListView, render_list, render_markers};
use super::store::NoteStore;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// Note list visible.
    Idle,
    /// Entry form visible, pinned to the last clicked point.
    Adding { pending: Coords },
}

/// One user gesture.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    MapClicked(Coords),
    Cancel,
    Submit { draft: NoteDraft, now_ms: i64 },
    Delete(NoteId),
    FlyTo(NoteId),
    TogglePanel,
    /// A map was (re)created and needs the marker layer drawn.
    MapReady,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    ModeChanged,
    NotesChanged,
    PanelToggled,
    Flew,
    Redrawn,
    /// Delete was not confirmed.
    Declined,
    NotFound(NoteId),
    /// Submit arrived without a clicked location; nothing was created.
    MissingLocation,
    InvalidDraft,
}

/// Answers the "really delete?" question.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Application state: the notes, the Idle/Adding mode, the panel flag and the last rendered list.
pub struct Controller<S: NoteStorage> {
    store: NoteStore<S>,
    mode: Mode,
    panel_hidden: bool,
    view: NoteListView,
}

impl<S: NoteStorage> Controller<S> {
    pub fn new(storage: S, panel_hidden: bool) -> Self {
        let store = NoteStore::load(storage);
        let view = render_list(store.all());
        Self {
            store,
            mode: Mode::Idle,
            panel_hidden,
            view,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_adding(&self) -> bool {
        matches!(self.mode(), Mode::Adding { .. })
    }

    pub fn panel_hidden(&self) -> bool {
        self.panel_hidden
    }

    pub fn view(&self) -> &NoteListView {
        &self.view
    }

    #[cfg(test)]
    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    fn refresh(&mut self, map: &mut dyn MapAdapter) {
        self.view = render_list(self.store.all());
        render_markers(self.store.all(), map);
    }

    pub fn dispatch(
        &mut self,
        cmd: Command,
        map: &mut dyn MapAdapter,
        confirm: &dyn Confirm,
    ) -> Outcome {
        match cmd {
            Command::MapClicked(at) => {
                self.mode = Mode::Adding { pending: at };
                Outcome::ModeChanged
            }
            Command::Cancel => {
                self.mode = Mode::Idle;
                Outcome::ModeChanged
            }
            Command::Submit { draft, now_ms } => {
                let Mode::Adding { pending } = self.mode else {
                    cwarn("note submitted without a map location, ignoring");
                    return Outcome::MissingLocation;
                };
                if !draft.is_valid() {
                    return Outcome::InvalidDraft;
                }
                let id = self.store.next_id(now_ms);
                if let Err(e) = self.store.add(draft.into_note(id, pending)) {
                    cwarn(&format!("note {} kept in memory only: {}", id, e));
                }
                self.mode = Mode::Idle;
                self.refresh(map);
                clog(&format!("note {} added", id));
                Outcome::NotesChanged
            }
            Command::Delete(id) => {
                if !confirm.confirm(CONFIRM_DELETE_MESSAGE) {
                    return Outcome::Declined;
                }
                let existed = self.store.find_by_id(id).is_some();
                if let Err(e) = self.store.remove(id) {
                    cwarn(&format!("removal of note {} not persisted: {}", id, e));
                }
                self.refresh(map);
                if existed {
                    Outcome::NotesChanged
                } else {
                    Outcome::NotFound(id)
                }
            }
            Command::FlyTo(id) => match self.store.find_by_id(id) {
                Some(note) => {
                    map.fly_to(note.coords, FLY_ZOOM);
                    Outcome::Flew
                }
                None => Outcome::NotFound(id),
            },
            Command::TogglePanel => {
                self.panel_hidden = !self.panel_hidden;
                Outcome::PanelToggled
            }
            Command::MapReady => {
                self.refresh(map);
                Outcome::Redrawn
            }
        }
    }
}
