#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use progress_ring::{PassthroughAttrs, ProgressCircle, RingSize};
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Fixture)]
fn fixture() -> Html {
    html! {
        <ProgressCircle
            value={42.6}
            size={RingSize::Large}
            class={classes!("m-2")}
            attrs={PassthroughAttrs::new().with("id", "ring").with("size", "tiny")}
        />
    }
}

#[function_component(HiddenLabel)]
fn hidden_label() -> Html {
    html! { <ProgressCircle value={10.0} show_value={false} /> }
}

fn mount_root() -> web_sys::Element {
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    root
}

#[wasm_bindgen_test]
async fn mounts_ring_with_passthrough_attributes() {
    let root = mount_root();
    yew::Renderer::<Fixture>::with_root(root.clone()).render();
    TimeoutFuture::new(10).await;

    let container = root.query_selector("#ring").unwrap().expect("container");
    assert_eq!(container.get_attribute("style").as_deref(), Some("width: 96px; height: 96px;"));
    assert!(container.get_attribute("class").unwrap().ends_with("m-2"));
    assert!(container.get_attribute("size").is_none());

    let circles = root.query_selector_all("circle").unwrap();
    assert_eq!(circles.length(), 2);

    let svg = root.query_selector("svg").unwrap().expect("svg");
    assert_eq!(svg.namespace_uri().as_deref(), Some("http://www.w3.org/2000/svg"));

    let label = root.query_selector("span").unwrap().expect("label");
    assert_eq!(label.text_content().as_deref(), Some("43%"));
}

#[wasm_bindgen_test]
async fn hidden_label_is_not_rendered() {
    let root = mount_root();
    yew::Renderer::<HiddenLabel>::with_root(root.clone()).render();
    TimeoutFuture::new(10).await;

    assert!(root.query_selector("svg").unwrap().is_some());
    assert!(root.query_selector("span").unwrap().is_none());
}
