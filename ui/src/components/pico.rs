//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use crate::compat;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element, #[props(default)] class: String) -> Element {
    rsx! { article { class: "{class}", {children} } }
}

/// An indeterminate progress bar with a caption underneath.
#[component]
pub fn Busy(caption: String, #[props(default)] detail: String) -> Element {
    rsx! {
        div {
            class: "busy",
            progress {}
            p { "aria-busy": "true", "{caption}" }
            if !detail.is_empty() {
                small { class: "mono", "{detail}" }
            }
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonType::Primary, false) => "",
            (ButtonType::Primary, true) => "outline",
            (ButtonType::Secondary, false) => "secondary",
            (ButtonType::Secondary, true) => "secondary outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    /// Shows Pico's spinner and disables the button.
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = props.button_type.to_class(props.outline);
    rsx! {
        button {
            class: "{class_str}",
            "aria-busy": if props.busy { "true" } else { "false" },
            disabled: props.busy,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    value: Signal<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
}

/// A labeled form input bound to a string signal.
pub fn Input(props: InputProps) -> Element {
    let mut value = props.value;
    let placeholder = props.placeholder.unwrap_or_default();
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

/// Label for a copy button, given the result of the last copy if any.
fn copy_label(last_copy: Option<bool>) -> &'static str {
    match last_copy {
        None => "Copy",
        Some(true) => "Copied ✔",
        Some(false) => "Copy failed",
    }
}

/// A small outline button that copies `text_to_copy` to the clipboard.
#[component]
pub fn CopyButton(text_to_copy: String) -> Element {
    let clipboard = compat::use_clipboard_writer();
    let mut last_copy = use_signal(|| None::<bool>);

    rsx! {
        button {
            class: "secondary outline copy-button",
            title: "Copy to clipboard",
            onclick: move |_| {
                let mut clipboard = clipboard.clone();
                let text = text_to_copy.clone();
                spawn(async move {
                    let ok = clipboard.write(text).await;
                    if !ok {
                        dioxus_logger::tracing::warn!("clipboard write failed");
                    }
                    last_copy.set(Some(ok));
                });
            },
            "{copy_label(last_copy())}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_label_reflects_last_result() {
        assert_eq!(copy_label(None), "Copy");
        assert_eq!(copy_label(Some(true)), "Copied ✔");
        assert_eq!(copy_label(Some(false)), "Copy failed");
    }

    #[test]
    fn outline_classes() {
        assert_eq!(ButtonType::Primary.to_class(false), "");
        assert_eq!(ButtonType::Secondary.to_class(true), "secondary outline");
    }
}
