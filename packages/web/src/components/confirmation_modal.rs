//! Yes/No prompt for destructive actions

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmationModalProps {
    pub message: String,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn ConfirmationModal(props: ConfirmationModalProps) -> Element {
    rsx! {
        div {
            class: "confirmation-modal fixed top-0 right-0 p-4 bg-gray-950 max-w-5xl text-center mx-auto z-40",
            role: "alertdialog",
            p { "{props.message}" }
            div {
                class: "flex justify-center gap-3 my-3",
                button {
                    class: "shad-button_dark_4 px-4 py-2 rounded",
                    onclick: move |_| props.on_confirm.call(()),
                    "Yes"
                }
                button {
                    class: "shad-button_dark_4 px-4 py-2 rounded",
                    onclick: move |_| props.on_cancel.call(()),
                    "No"
                }
            }
        }
    }
}
