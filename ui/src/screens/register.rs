//=============================================================================
// File: src/screens/register.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::{Button, ButtonType, Card, Input};
use dioxus::prelude::*;
use greenscore_types::{Registration, Session};

#[allow(non_snake_case)]
#[component]
pub fn RegisterScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let company_name = use_signal(String::new);
    let tax_id = use_signal(String::new);

    rsx! {
        section {
            class: "register",
            Card {
                header {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| app_state_mut.apply(Session::back_to_landing),
                        "← Back"
                    }
                    h2 { "Register a profile" }
                }
                Input {
                    label: "Company name".to_string(),
                    name: "company_name".to_string(),
                    value: company_name,
                    placeholder: "e.g. VinFast Auto Ltd.".to_string(),
                }
                Input {
                    label: "Tax ID / ticker".to_string(),
                    name: "tax_id".to_string(),
                    value: tax_id,
                    placeholder: "e.g. VFS".to_string(),
                }
                // no validation: empty fields go through as-is
                Button {
                    on_click: move |_| {
                        let form = Registration {
                            company_name: company_name(),
                            tax_id: tax_id(),
                        };
                        app_state_mut.apply(move |s| s.submit_registration(form));
                    },
                    "Connect wallet & finish"
                }
            }
        }
    }
}
