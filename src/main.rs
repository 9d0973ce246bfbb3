use dioxus::prelude::*;

mod catalog;
mod form;
mod submit;
mod units;
mod validate;
mod views;

use views::Escala;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("assets/tailwind.css") }
        head {
            document::Meta {
                name: "description",
                content: "Registro de solicitações de alteração de escala médica",
            }
        }
        Escala {}
    }
}
