use yew::prelude::*;

use crate::canvas_state::CanvasState;
use crate::components::{Rectangle, StageView};
use crate::scene::PointerTarget;
use crate::types::{RectAttrs, FALLBACK_STAGE_SIZE};
use crate::utils::viewport_size;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(CanvasState::default);
    let (width, height) = *use_state(|| {
        viewport_size().unwrap_or_else(|err| {
            log::error!("{}, using {:?}", err, FALLBACK_STAGE_SIZE);
            FALLBACK_STAGE_SIZE
        })
    });

    // Deselect when the press hit empty canvas
    let check_deselect = {
        let state = state.clone();
        Callback::from(move |target: PointerTarget| {
            let mut next = (*state).clone();
            if next.check_deselect(&target) {
                state.set(next);
            }
        })
    };

    let rectangles = state
        .rectangles
        .iter()
        .enumerate()
        .map(|(i, rect)| {
            let on_select = {
                let state = state.clone();
                let id = rect.id.clone();
                Callback::from(move |_: ()| {
                    let mut next = (*state).clone();
                    next.select_shape(&id);
                    state.set(next);
                })
            };

            let on_change = {
                let state = state.clone();
                Callback::from(move |new_attrs: RectAttrs| {
                    let mut next = (*state).clone();
                    match next.update(i, new_attrs) {
                        Ok(()) => state.set(next),
                        Err(err) => log::error!("rect change dropped: {}", err),
                    }
                })
            };

            html! {
                <Rectangle
                    key={i}
                    index={i}
                    shape_props={rect.clone()}
                    is_selected={state.is_selected(&rect.id)}
                    {on_select}
                    {on_change}
                />
            }
        })
        .collect::<Html>();

    html! {
        <StageView {width} {height} on_mouse_down={check_deselect}>
            {rectangles}
        </StageView>
    }
}
