use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use crate::geometry::RingSize;

#[derive(Properties, PartialEq)]
pub struct SizeSelectorProps {
    pub size: RingSize,
    pub on_size_change: Callback<RingSize>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(SizeSelector)]
pub fn size_selector(props: &SizeSelectorProps) -> Html {
    let on_change = {
        let on_size_change = props.on_size_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<RingSize>() {
                Ok(size) => on_size_change.emit(size),
                Err(err) => gloo::console::warn!(err.to_string()),
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="ring-size">{ "Size:" }</label>
            <select
                id="ring-size"
                value={props.size.as_str()}
                onchange={on_change}
                disabled={props.disabled}
            >
                {
                    for RingSize::ALL.iter().map(|size| html! {
                        <option value={size.as_str()} selected={*size == props.size}>
                            { format!("{} ({}px)", size, size.diameter()) }
                        </option>
                    })
                }
            </select>
        </div>
    }
}
