use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PanelToggleProps {
    pub hidden: bool,
    pub on_toggle: Callback<()>,
}

#[function_component]
pub fn PanelToggle(props: &PanelToggleProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let icon = if props.hidden { "bi bi-chevron-right" } else { "bi bi-chevron-left" };
    html! {<div class="arrow" onclick={toggle_cb}><i class={icon}></i></div>}
}
