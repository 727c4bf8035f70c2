use crate::attrs::PassthroughAttrs;
use crate::components::{
    progress_circle::ProgressCircle,
    ring_controls::RingControls,
    simulate_button::SimulateButton,
    size_selector::SizeSelector,
};
use crate::geometry::{ProgressSpec, RingSize};
use gloo::console::log;
use gloo::timers::callback::Interval;
use yew::prelude::*;

const TICK_MS: u32 = 100;

pub struct App {
    spec: ProgressSpec,
    simulation: Option<Interval>,
    logs: Vec<String>,
}

pub enum Msg {
    SetValue(f64),
    SetSize(RingSize),
    SetStrokeWidth(f64),
    SetShowValue(bool),
    StartSimulation,
    Tick,
    StopSimulation,
    AddLog(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            spec: ProgressSpec::new(25.0),
            simulation: None,
            logs: vec!["Progress ring demo ready".to_string()],
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetValue(value) => {
                self.spec.value = value;
                true
            },
            Msg::SetSize(size) => {
                self.spec.size = size;
                self.add_log(ctx, format!("Size set to {} ({}px)", size, size.diameter()));
                true
            },
            Msg::SetStrokeWidth(width) => {
                self.spec.stroke_width = width;
                if width >= self.spec.size.diameter() {
                    self.add_log(ctx, format!("Stroke width {} leaves no room for the ring", width));
                } else {
                    self.add_log(ctx, format!("Stroke width set to {}", width));
                }
                true
            },
            Msg::SetShowValue(show) => {
                self.spec.show_value = show;
                true
            },
            Msg::StartSimulation => {
                self.spec.value = 0.0;
                let link = ctx.link().clone();
                self.simulation = Some(Interval::new(TICK_MS, move || {
                    link.send_message(Msg::Tick);
                }));
                log!("Simulation started");
                self.add_log(ctx, "Simulating progress...".to_string());
                true
            },
            Msg::Tick => {
                self.spec.value = (self.spec.value + 1.0).min(100.0);
                if self.spec.value >= 100.0 {
                    ctx.link().send_message(Msg::StopSimulation);
                }
                true
            },
            Msg::StopSimulation => {
                // dropping the handle cancels the interval
                if self.simulation.take().is_some() {
                    log!("Simulation stopped at", self.spec.value);
                    self.add_log(ctx, format!("Simulation stopped at {}%", self.spec.value));
                }
                true
            },
            Msg::AddLog(entry) => {
                self.logs.push(entry);
                true
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let running = self.simulation.is_some();

        html! {
            <div class="app-container">
                <header>
                    <h1>{ "Progress Ring" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <h2>{ "Settings" }</h2>
                        <div class="settings-grid">
                            <SizeSelector
                                size={self.spec.size}
                                on_size_change={ctx.link().callback(Msg::SetSize)}
                            />

                            <RingControls
                                value={self.spec.value}
                                stroke_width={self.spec.stroke_width}
                                show_value={self.spec.show_value}
                                on_value_change={ctx.link().callback(Msg::SetValue)}
                                on_stroke_width_change={ctx.link().callback(Msg::SetStrokeWidth)}
                                on_show_value_change={ctx.link().callback(Msg::SetShowValue)}
                                disabled={running}
                            />
                        </div>

                        <div class="button-container">
                            <SimulateButton
                                running={running}
                                on_start={ctx.link().callback(|_| Msg::StartSimulation)}
                                on_stop={ctx.link().callback(|_| Msg::StopSimulation)}
                            />
                        </div>
                    </div>

                    <div class="panel">
                        <h2>{ "Preview" }</h2>
                        <ProgressCircle
                            value={self.spec.value}
                            size={self.spec.size}
                            show_value={self.spec.show_value}
                            stroke_width={self.spec.stroke_width}
                            attrs={PassthroughAttrs::new()
                                .with("id", "preview-ring")
                                .with("title", format!("{}% complete", self.spec.value))}
                        />

                        <h2>{ "All Sizes" }</h2>
                        <div class="ring-gallery">
                            {
                                for RingSize::ALL.iter().map(|size| html! {
                                    <ProgressCircle
                                        value={self.spec.value}
                                        size={*size}
                                        show_value={self.spec.show_value}
                                        class={classes!("m-2")}
                                        attrs={PassthroughAttrs::new().with("data-size", size.as_str())}
                                    />
                                })
                            }
                        </div>

                        <h2>{ "Logs" }</h2>
                        <div class="logs-container">
                            {
                                for self.logs.iter().map(|log| {
                                    html! { <div class="log-entry">{ log }</div> }
                                })
                            }
                        </div>
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn add_log(&mut self, ctx: &Context<Self>, message: String) {
        let timestamp = js_sys::Date::new_0().to_locale_time_string("en-US");
        let log_entry = format!("[{}] {}", timestamp, message);
        ctx.link().send_message(Msg::AddLog(log_entry));
    }
}
