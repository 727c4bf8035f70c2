use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SimulateButtonProps {
    pub running: bool,
    pub on_start: Callback<()>,
    pub on_stop: Callback<()>,
}

#[function_component(SimulateButton)]
pub fn simulate_button(props: &SimulateButtonProps) -> Html {
    let onclick = {
        let callback = if props.running {
            props.on_stop.clone()
        } else {
            props.on_start.clone()
        };
        Callback::from(move |_| {
            callback.emit(());
        })
    };

    html! {
        <button
            onclick={onclick}
            class="simulate-button"
        >
            { if props.running { "Stop Simulation" } else { "Simulate Progress" } }
        </button>
    }
}
