use crate::model::NoteId;
use crate::state::NoteListView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoteListProps {
    pub view: NoteListView,
    pub on_fly: Callback<NoteId>,
    pub on_delete: Callback<NoteId>,
}

#[function_component]
pub fn NoteList(props: &NoteListProps) -> Html {
    if props.view.is_empty() {
        return html! {<ul class="list"><li class="empty">{"Haritaya tıklayarak not ekleyin"}</li></ul>};
    }
    html! {<ul class="list">
        { for props.view.cards.iter().map(|card| {
            let id = card.id;
            let fly_cb = {
                let cb = props.on_fly.clone();
                Callback::from(move |_| cb.emit(id))
            };
            let delete_cb = {
                let cb = props.on_delete.clone();
                Callback::from(move |_| cb.emit(id))
            };
            html!{<li key={id.to_string()} data-id={id.to_string()}>
                <div>
                    <p>{ card.title.clone() }</p>
                    <p>{ card.date_label.clone() }</p>
                    <p><img src={card.status_icon} alt="" width="16" height="16" />{ card.status_label }</p>
                </div>
                <div class="icons">
                    <i class="bi bi-airplane-fill" id="fly" onclick={fly_cb}></i>
                    <i class="bi bi-trash3-fill" id="delete" onclick={delete_cb}></i>
                </div>
            </li>}
        }) }
    </ul>}
}
