use super::{note_form::NoteForm, note_list::NoteList, panel_toggle::PanelToggle};
use crate::config::{load_panel_hidden, save_panel_hidden};
use crate::map::{LeafletMap, initial_center, request_location};
use crate::model::{NoteDraft, NoteId};
use crate::state::{Command, Controller, Outcome};
use crate::storage::{BrowserStorage, LocalStorage};
use crate::util::cwarn;
use yew::prelude::*;

fn confirm_in_window(message: &str) -> bool {
    web_sys::window()
        .map(|win| win.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[function_component(App)]
pub fn app() -> Html {
    let controller = use_mut_ref(|| Controller::new(BrowserStorage::new(), load_panel_hidden(&LocalStorage)));
    let map = use_mut_ref(|| None::<LeafletMap>);
    let force_update = use_force_update();

    // Every gesture goes through here; the page re-renders from the controller afterwards
    let dispatch: Callback<Command, Outcome> = {
        let controller = controller.clone();
        let map = map.clone();
        Callback::from(move |cmd: Command| {
            let outcome = {
                let mut map = map.borrow_mut();
                controller
                    .borrow_mut()
                    .dispatch(cmd, &mut *map, &confirm_in_window)
            };
            force_update.force_update();
            outcome
        })
    };

    // Open the map once the position query settles
    {
        let dispatch = dispatch.clone();
        let map = map.clone();
        use_effect_with((), move |_| {
            request_location(move |located| {
                let (center, label) = initial_center(located);
                let on_click = {
                    let dispatch = dispatch.clone();
                    move |at| {
                        dispatch.emit(Command::MapClicked(at));
                    }
                };
                match LeafletMap::open(center, label, on_click) {
                    Ok(m) => {
                        *map.borrow_mut() = Some(m);
                        dispatch.emit(Command::MapReady);
                    }
                    Err(e) => cwarn(&format!("map could not be opened: {:?}", e)),
                }
            });
            || ()
        });
    }

    let (adding, panel_hidden, view) = {
        let ctl = controller.borrow();
        (ctl.is_adding(), ctl.panel_hidden(), ctl.view().clone())
    };

    // Persist panel visibility
    use_effect_with(panel_hidden, move |&hidden| {
        save_panel_hidden(&mut LocalStorage, hidden);
        || ()
    });

    let on_submit = {
        let dispatch = dispatch.clone();
        Callback::from(move |draft: NoteDraft| {
            let now_ms = js_sys::Date::now() as i64;
            dispatch.emit(Command::Submit { draft, now_ms }) == Outcome::NotesChanged
        })
    };
    let on_cancel = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.emit(Command::Cancel);
        })
    };
    let on_fly = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: NoteId| {
            if let Outcome::NotFound(id) = dispatch.emit(Command::FlyTo(id)) {
                cwarn(&format!("note {} no longer exists", id));
            }
        })
    };
    let on_delete = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: NoteId| {
            dispatch.emit(Command::Delete(id));
        })
    };
    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.emit(Command::TogglePanel);
        })
    };

    html! {<main>
        <aside class={classes!(adding.then_some("add"), panel_hidden.then_some("hide"))}>
            <PanelToggle hidden={panel_hidden} on_toggle={on_toggle} />
            <NoteForm on_submit={on_submit} on_cancel={on_cancel} />
            <NoteList view={view} on_fly={on_fly} on_delete={on_delete} />
        </aside>
        <div id="map"></div>
    </main>}
}
