//! Error boundaries for whole pages and for single storefront sections.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    section {
                        class: "error-page",
                        h1 { class: "error-title", "Something went wrong" }
                        p { class: "error-detail", "Boundary: {boundary_name}" }
                        a { href: "/", class: "button button-secondary", "Continue shopping" }
                        pre { class: "error-trace", "{_err:#?}" }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "button button-secondary",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "error-section",
            h3 { class: "error-title", "We couldn't load this section" }
            pre { class: "error-trace", "{error_txt}" }
            {children}
        }
    }
}
