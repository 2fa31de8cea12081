// Projects the note list into list cards and the marker layer
use crate::map::MapAdapter;
use crate::model::{Note, NoteId};
use crate::status::{icon_for, label_for};
use crate::util::format_note_date;

#[derive(Clone, Debug, PartialEq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub date_label: String,
    pub status_label: &'static str,
    pub status_icon: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteListView {
    pub cards: Vec<NoteCard>,
}

impl NoteListView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub fn render_list(notes: &[Note]) -> NoteListView {
    NoteListView {
        cards: notes
            .iter()
            .map(|n| NoteCard {
                id: n.id,
                title: n.title.clone(),
                date_label: format_note_date(&n.date),
                status_label: label_for(&n.status),
                status_icon: icon_for(&n.status),
            })
            .collect(),
    }
}

/// Replaces the whole marker layer: one marker per note, popup shows the title.
pub fn render_markers(notes: &[Note], map: &mut dyn MapAdapter) {
    map.clear_markers();
    for n in notes {
        map.show_marker(n.coords, icon_for(&n.status), &n.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::testing::{MapCall, RecordingMap};
    use crate::model::Coords;
    use crate::status::DEFAULT_LABEL;

    fn notes() -> Vec<Note> {
        vec![
            Note {
                id: NoteId(2),
                title: "Müze".into(),
                date: "2024-05-01".into(),
                status: "done".into(),
                coords: Coords::new(41.0, 29.0),
            },
            Note {
                id: NoteId(1),
                title: "Eski".into(),
                date: "bozuk".into(),
                status: "archived".into(),
                coords: Coords::new(39.9, 32.8),
            },
        ]
    }

    #[test]
    fn list_cards_follow_store_order_with_labels() {
        let view = render_list(&notes());
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].id, NoteId(2));
        assert_eq!(view.cards[0].date_label, "01 Mayıs 24");
        assert_eq!(view.cards[0].status_label, "Tamamlandı");
        assert_eq!(view.cards[1].date_label, "bozuk");
        assert_eq!(view.cards[1].status_label, DEFAULT_LABEL);
    }

    #[test]
    fn markers_are_cleared_then_redrawn_one_per_note() {
        let mut map = RecordingMap::default();
        render_markers(&notes(), &mut map);
        assert_eq!(map.calls.len(), 3);
        assert_eq!(map.calls[0], MapCall::Clear);
        assert_eq!(
            map.calls[1],
            MapCall::Marker {
                at: Coords::new(41.0, 29.0),
                icon: icon_for("done").to_string(),
                popup: "Müze".into(),
            }
        );
        assert_eq!(map.visible_markers().len(), 2);
    }

    #[test]
    fn rendering_twice_gives_the_same_result() {
        let notes = notes();
        assert_eq!(render_list(&notes), render_list(&notes));

        let mut map = RecordingMap::default();
        render_markers(&notes, &mut map);
        let first = map.visible_markers();
        render_markers(&notes, &mut map);
        assert_eq!(map.visible_markers(), first);
    }

    #[test]
    fn empty_store_renders_nothing() {
        let mut map = RecordingMap::default();
        render_markers(&[], &mut map);
        assert!(render_list(&[]).is_empty());
        assert!(map.visible_markers().is_empty());
    }
}
