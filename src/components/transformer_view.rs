use yew::prelude::*;

use crate::components::StageContext;
use crate::types::{ANCHOR_FILL, ANCHOR_SIZE, TRANSFORMER_STROKE};

/// Border and resize anchors around whichever node the transformer is
/// attached to. Hit-testing of the anchors happens in the stage.
#[function_component(TransformerView)]
pub fn transformer_view() -> Html {
    let context = use_context::<StageContext>()
        .expect("TransformerView must be rendered inside a StageView");
    let stage = context.handle.borrow();

    let Some(bbox) = stage.transformer.client_rect(&stage.layer) else {
        return html! {};
    };
    let half = ANCHOR_SIZE / 2.0;

    let anchors: Html = stage
        .transformer
        .anchors(&stage.layer)
        .into_iter()
        .map(|(handle, pos)| {
            html! {
                <rect
                    key={handle.to_kebab_case()}
                    data-testid={format!("anchor-{}", handle.to_kebab_case())}
                    x={(pos.x - half).to_string()}
                    y={(pos.y - half).to_string()}
                    width={ANCHOR_SIZE.to_string()}
                    height={ANCHOR_SIZE.to_string()}
                    fill={ANCHOR_FILL}
                    stroke={TRANSFORMER_STROKE}
                    stroke-width="1"
                    style={format!("cursor: {};", handle.cursor())}
                />
            }
        })
        .collect();

    html! {
        <g data-testid="transformer">
            <rect
                x={bbox.x.to_string()}
                y={bbox.y.to_string()}
                width={bbox.width.max(0.0).to_string()}
                height={bbox.height.max(0.0).to_string()}
                fill="none"
                stroke={TRANSFORMER_STROKE}
                stroke-width="1"
                pointer-events="none"
            />
            {anchors}
        </g>
    }
}
