use yew::prelude::*;
use yew::virtual_dom::{VTag, VText};

use crate::attrs::PassthroughAttrs;
use crate::geometry::{ProgressSpec, RingSize, DEFAULT_STROKE_WIDTH};
use crate::render::{render_progress_circle, Node};

#[derive(Properties, PartialEq)]
pub struct ProgressCircleProps {
    /// Percentage, normally 0..=100. Not clamped.
    pub value: f64,
    #[prop_or_default]
    pub size: RingSize,
    #[prop_or(true)]
    pub show_value: bool,
    #[prop_or(DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f64,
    /// Extra classes merged onto the container.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub attrs: PassthroughAttrs,
}

impl From<&ProgressCircleProps> for ProgressSpec {
    fn from(props: &ProgressCircleProps) -> Self {
        ProgressSpec::new(props.value)
            .size(props.size)
            .show_value(props.show_value)
            .stroke_width(props.stroke_width)
    }
}

#[function_component(ProgressCircle)]
pub fn progress_circle(props: &ProgressCircleProps) -> Html {
    let spec = ProgressSpec::from(props);
    let class = props.class.to_string();
    let class = (!class.is_empty()).then_some(class.as_str());

    to_html(&render_progress_circle(&spec, class, &props.attrs))
}

fn to_html(node: &Node) -> Html {
    match node {
        Node::Text(text) => VText::new(text.clone()).into(),
        Node::Element(element) => {
            let mut tag = VTag::new(element.tag);
            for (name, value) in &element.attrs {
                tag.add_attribute(*name, value.clone());
            }
            for child in &element.children {
                tag.add_child(to_html(child));
            }
            tag.into()
        }
    }
}
