mod components;
mod config;
mod map;
mod model;
mod state;
mod status;
mod storage;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
