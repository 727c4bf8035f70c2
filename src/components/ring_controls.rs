use web_sys::{Event, HtmlInputElement, InputEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RingControlsProps {
    pub value: f64,
    pub stroke_width: f64,
    pub show_value: bool,
    pub on_value_change: Callback<f64>,
    pub on_stroke_width_change: Callback<f64>,
    pub on_show_value_change: Callback<bool>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(RingControls)]
pub fn ring_controls(props: &RingControlsProps) -> Html {
    let on_value_input = {
        let callback = props.on_value_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<f64>() {
                callback.emit(value);
            }
        })
    };

    let on_stroke_width_change = {
        let callback = props.on_stroke_width_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(width) = input.value().parse::<f64>() {
                callback.emit(width);
            }
        })
    };

    let on_show_value_change = {
        let callback = props.on_show_value_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.checked());
        })
    };

    html! {
        <>
            <div class="form-group">
                <label for="ring-value">{ format!("Value: {}%", props.value) }</label>
                <input
                    id="ring-value"
                    type="range"
                    min="0"
                    max="100"
                    step="1"
                    value={props.value.to_string()}
                    oninput={on_value_input}
                    disabled={props.disabled}
                />
            </div>

            <div class="form-group">
                <label for="ring-stroke-width">{ "Stroke Width:" }</label>
                <input
                    id="ring-stroke-width"
                    type="number"
                    min="1"
                    max="32"
                    step="1"
                    value={props.stroke_width.to_string()}
                    onchange={on_stroke_width_change}
                />
            </div>

            <div class="form-group">
                <label for="ring-show-value">{ "Show Value:" }</label>
                <input
                    id="ring-show-value"
                    type="checkbox"
                    checked={props.show_value}
                    onchange={on_show_value_change}
                />
            </div>
        </>
    }
}
