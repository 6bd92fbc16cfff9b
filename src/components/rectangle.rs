use yew::prelude::*;

use crate::components::{ShapeEvent, StageContext};
use crate::rectangle::{
    attach_transformer, drag_end_attrs, release_transformer, transform_end_attrs,
};
use crate::types::RectAttrs;

#[derive(Properties, Clone, PartialEq)]
pub struct RectangleProps {
    /// Position in the view's list, which is also the draw order
    pub index: usize,
    pub shape_props: RectAttrs,
    pub is_selected: bool,
    pub on_select: Callback<()>,
    pub on_change: Callback<RectAttrs>,
}

/// One draggable, resizable rectangle.
///
/// Its attributes are applied to the matching layer node on render; the
/// node's live geometry is what gets drawn, so an in-flight drag or resize
/// shows without touching the attributes until the gesture completes.
#[function_component(Rectangle)]
pub fn rectangle(props: &RectangleProps) -> Html {
    let context = use_context::<StageContext>()
        .expect("Rectangle must be rendered inside a StageView");
    let handle = context.handle.clone();
    let id = props.shape_props.id.clone();

    let node = handle
        .borrow_mut()
        .layer
        .sync_node(props.index, &props.shape_props)
        .clone();

    // Leave the layer on unmount
    {
        let handle = handle.clone();
        let id = id.clone();
        use_effect_with((), move |_| {
            move || {
                let mut stage = handle.borrow_mut();
                release_transformer(&mut stage, &id);
                stage.layer.remove_node(&id);
            }
        });
    }

    // Attach the shared transformer while selected
    {
        let handle = handle.clone();
        let id = id.clone();
        let request_redraw = context.request_redraw.clone();
        use_effect_with(props.is_selected, move |is_selected| {
            let selected = *is_selected;
            if selected {
                attach_transformer(&mut handle.borrow_mut(), &id);
                request_redraw.emit(());
            }
            move || {
                if selected && release_transformer(&mut handle.borrow_mut(), &id) {
                    request_redraw.emit(());
                }
            }
        });
    }

    // Route this shape's pointer events to the callbacks of the latest render
    {
        let handle = handle.clone();
        let deps = (
            props.index,
            props.shape_props.clone(),
            props.on_select.clone(),
            props.on_change.clone(),
        );
        use_effect_with(deps, move |(index, shape_props, on_select, on_change)| {
            let id = shape_props.id.clone();
            let listener = {
                let handle = handle.clone();
                let index = *index;
                let shape_props = shape_props.clone();
                let on_select = on_select.clone();
                let on_change = on_change.clone();

                Callback::from(move |event: ShapeEvent| match event {
                    ShapeEvent::Click => on_select.emit(()),
                    ShapeEvent::DragEnd { position } => {
                        let attrs = drag_end_attrs(&shape_props, position);
                        log::debug!("drag end: {}", attrs.to_log_string());
                        on_change.emit(attrs);
                    }
                    ShapeEvent::TransformEnd => {
                        let result = {
                            let mut stage = handle.borrow_mut();
                            let result = stage
                                .layer
                                .require_mut(&shape_props.id)
                                .map(|node| transform_end_attrs(&shape_props, node));
                            // Show the folded size right away instead of a
                            // frame with identity scale and the old size
                            if let Ok(attrs) = &result {
                                stage.layer.sync_node(index, attrs);
                            }
                            result
                        };
                        match result {
                            Ok(attrs) => {
                                log::debug!("transform end: {}", attrs.to_log_string());
                                on_change.emit(attrs);
                            }
                            Err(err) => log::error!("transform end: {}", err),
                        }
                    }
                })
            };
            handle.listen(&id, listener);
            move || handle.unlisten(&id)
        });
    }

    let bbox = node.client_rect();

    html! {
        <rect
            data-id={id}
            x={bbox.x.to_string()}
            y={bbox.y.to_string()}
            width={bbox.width.max(0.0).to_string()}
            height={bbox.height.max(0.0).to_string()}
            fill={node.fill.clone()}
            style="cursor: move;"
        />
    }
}
