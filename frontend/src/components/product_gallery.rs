use common::product::Media;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight};
use dioxus_free_icons::Icon;

/// One media item at a time with previous/next controls.
#[component]
pub fn ProductGallery(media: ReadSignal<Vec<Media>>) -> Element {
    let mut index = use_signal(|| 0usize);

    let count = media.read().len();
    if count == 0 {
        return rsx! {};
    }
    let current = index().min(count - 1);
    let item = media.read()[current].clone();
    let keys = media.read().iter().map(Media::key).collect::<Vec<_>>();

    rsx! {
        div {
            class: "product-gallery",
            div {
                class: "product-gallery-slide",
                MediaFile { media: item }
            }
            if count > 1 {
                div {
                    class: "product-gallery-controls",
                    button {
                        class: "slider-arrow",
                        "aria-label": "Previous image",
                        onclick: move |_| index.set((current + count - 1) % count),
                        Icon { icon: MdChevronLeft, style: "width: 28px; height: 28px;" }
                    }
                    for (i, media_key) in keys.into_iter().enumerate() {
                        button {
                            key: "{media_key}-{i}",
                            class: if i == current { "slider-dot slider-dot-active" } else { "slider-dot" },
                            "aria-label": "Show media {i + 1} of {count}",
                            onclick: move |_| index.set(i),
                        }
                    }
                    button {
                        class: "slider-arrow",
                        "aria-label": "Next image",
                        onclick: move |_| index.set((current + 1) % count),
                        Icon { icon: MdChevronRight, style: "width: 28px; height: 28px;" }
                    }
                }
            }
        }
    }
}

#[component]
fn MediaFile(media: ReadSignal<Media>) -> Element {
    let media = media.read().clone();
    let alt = media.alt_text();

    match media.type_name() {
        "Model3d" => {
            let source = media.sources.iter().find(|s| s.mime_type == "model/gltf-binary").or(media.sources.first());
            rsx! {
                div {
                    class: "media-model",
                    if let Some(source) = source {
                        a { href: "{source.url}", target: "_blank", rel: "noopener", "View 3D model" }
                    }
                }
            }
        }
        _ => rsx! {
            if let Some(image) = media.image {
                img {
                    class: "media-image",
                    tabindex: "0",
                    src: "{image.url}",
                    alt: "{alt}",
                    width: image.width.map(|w| w.to_string()),
                    height: image.height.map(|h| h.to_string()),
                }
            }
        },
    }
}
