use crate::model::NoteDraft;
use crate::status::StatusCode;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoteFormProps {
    /// Returns true when the note was created, which clears the form.
    pub on_submit: Callback<NoteDraft, bool>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn NoteForm(props: &NoteFormProps) -> Html {
    let form_ref = use_node_ref();
    let title_ref = use_node_ref();
    let date_ref = use_node_ref();
    let status_ref = use_node_ref();

    let reset = {
        let form_ref = form_ref.clone();
        move || {
            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
        }
    };

    let submit_cb = {
        let cb = props.on_submit.clone();
        let reset = reset.clone();
        let (title_ref, date_ref, status_ref) = (title_ref.clone(), date_ref.clone(), status_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = NoteDraft {
                title: title_ref.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default(),
                date: date_ref.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default(),
                status: status_ref.cast::<HtmlSelectElement>().map(|s| s.value()).unwrap_or_default(),
            };
            if cb.emit(draft) {
                reset();
            }
        })
    };
    let cancel_cb = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| {
            reset();
            cb.emit(());
        })
    };

    html! {<form ref={form_ref} onsubmit={submit_cb}>
        <div class="form-header">
            <h2>{"Yeni Not"}</h2>
            <i class="bi bi-x-lg" id="cancel" onclick={cancel_cb}></i>
        </div>
        <div class="field">
            <label for="title">{"Başlık"}</label>
            <input ref={title_ref} id="title" type="text" required=true />
        </div>
        <div class="field">
            <label for="date">{"Tarih"}</label>
            <input ref={date_ref} id="date" type="date" required=true />
        </div>
        <div class="field">
            <label for="status">{"Durum"}</label>
            <select ref={status_ref} id="status">
                { for StatusCode::ALL.iter().map(|s| html!{ <option value={s.code()}>{ s.label() }</option> }) }
            </select>
        </div>
        <button type="submit">{"Kaydet"}</button>
    </form>}
}
