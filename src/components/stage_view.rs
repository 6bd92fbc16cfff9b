use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, SvgsvgElement};
use yew::prelude::*;

use crate::components::TransformerView;
use crate::scene::{PointerTarget, Stage, StageEvent, Vec2};
use crate::utils::client_to_stage_coords;

/// Pointer events delivered to the shape they concern
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeEvent {
    Click,
    DragEnd { position: Vec2 },
    TransformEnd,
}

/// Shared handle to the scene plus the per-shape listeners.
///
/// Listeners are keyed by shape id, so a shape component registers
/// itself without the stage holding anything but a callback.
#[derive(Clone)]
pub struct StageHandle {
    stage: Rc<RefCell<Stage>>,
    listeners: Rc<RefCell<HashMap<String, Callback<ShapeEvent>>>>,
}

impl PartialEq for StageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stage, &other.stage)
    }
}

impl StageHandle {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage: Rc::new(RefCell::new(stage)),
            listeners: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn borrow(&self) -> Ref<'_, Stage> {
        self.stage.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Stage> {
        self.stage.borrow_mut()
    }

    pub fn draw_count(&self) -> u64 {
        self.borrow().layer.draw_count()
    }

    pub fn listen(&self, id: &str, listener: Callback<ShapeEvent>) {
        self.listeners.borrow_mut().insert(id.to_string(), listener);
    }

    pub fn unlisten(&self, id: &str) {
        self.listeners.borrow_mut().remove(id);
    }

    /// Deliver shape events to their listeners and hand back the target of
    /// any mouse-down, which belongs to the stage-level handler.
    ///
    /// No borrow of the stage is held while a listener runs.
    fn dispatch(&self, events: Vec<StageEvent>) -> Option<PointerTarget> {
        let mut mouse_down = None;
        for event in events {
            let (id, shape_event) = match event {
                StageEvent::MouseDown { target } => {
                    mouse_down = Some(target);
                    continue;
                }
                StageEvent::Click { id } => (id, ShapeEvent::Click),
                StageEvent::DragEnd { id, position } => (id, ShapeEvent::DragEnd { position }),
                StageEvent::TransformEnd { id } => (id, ShapeEvent::TransformEnd),
            };
            let listener = self.listeners.borrow().get(&id).cloned();
            match listener {
                Some(listener) => listener.emit(shape_event),
                None => log::warn!("no listener for shape `{}`", id),
            }
        }
        mouse_down
    }
}

/// What shape components read from their enclosing stage
#[derive(Clone, PartialEq)]
pub struct StageContext {
    pub handle: StageHandle,
    /// Layer draw count at the last redraw
    pub version: u64,
    pub request_redraw: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct StageViewProps {
    pub width: f64,
    pub height: f64,

    /// Every press on the stage, whatever it landed on
    #[prop_or_default]
    pub on_mouse_down: Callback<PointerTarget>,

    #[prop_or_default]
    pub children: Html,
}

/// SVG surface owning the scene and routing pointer input into it.
#[function_component(StageView)]
pub fn stage_view(props: &StageViewProps) -> Html {
    let (width, height) = (props.width, props.height);
    // Size is fixed once the stage exists
    let handle = (*use_state(move || StageHandle::new(Stage::new(width, height)))).clone();
    let version = use_state(|| 0u64);
    let pointer_active = use_state(|| false);
    let svg_ref = use_node_ref();

    let request_redraw = {
        let version = version.clone();
        use_callback(handle.clone(), move |_: (), handle| {
            version.set(handle.draw_count());
        })
    };

    let onmousedown = {
        let handle = handle.clone();
        let svg_ref = svg_ref.clone();
        let pointer_active = pointer_active.clone();
        let on_mouse_down = props.on_mouse_down.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(svg) = svg_ref.cast::<SvgsvgElement>() else {
                return;
            };
            let point = client_to_stage_coords(&e, &svg);

            let result = handle.borrow_mut().pointer_down(point);
            match result {
                Ok(events) => {
                    if let Some(target) = handle.dispatch(events) {
                        on_mouse_down.emit(target);
                    }
                    pointer_active.set(handle.borrow().is_pointer_active());
                }
                Err(err) => log::error!("pointer down at {:?}: {}", point, err),
            }
        })
    };

    // Window-level move/up listeners, only while a gesture is in progress
    {
        let handle = handle.clone();
        let svg_ref = svg_ref.clone();
        let version = version.clone();
        let pointer_active_handle = pointer_active.clone();

        use_effect_with(*pointer_active, move |active| -> Box<dyn FnOnce()> {
            if !*active {
                return Box::new(|| ());
            }

            let window = gloo::utils::window();

            let mousemove_listener = {
                let handle = handle.clone();
                let svg_ref = svg_ref.clone();
                let version = version.clone();

                EventListener::new(&window, "mousemove", move |event| {
                    let (Some(mouse_event), Some(svg)) =
                        (event.dyn_ref::<MouseEvent>(), svg_ref.cast::<SvgsvgElement>())
                    else {
                        return;
                    };
                    let point = client_to_stage_coords(mouse_event, &svg);

                    let moved = handle.borrow_mut().pointer_move(point);
                    match moved {
                        Ok(true) => version.set(handle.draw_count()),
                        Ok(false) => {}
                        Err(err) => log::error!("pointer move at {:?}: {}", point, err),
                    }
                })
            };

            let mouseup_listener = {
                let pointer_active = pointer_active_handle.clone();

                EventListener::new(&window, "mouseup", move |event| {
                    let mouse_event = event.dyn_ref::<MouseEvent>();
                    let point = match (mouse_event, svg_ref.cast::<SvgsvgElement>()) {
                        (Some(mouse_event), Some(svg)) => {
                            client_to_stage_coords(mouse_event, &svg)
                        }
                        _ => Vec2::ZERO,
                    };

                    let events = handle.borrow_mut().pointer_up(point);
                    handle.dispatch(events);
                    pointer_active.set(false);
                    version.set(handle.draw_count());
                })
            };

            Box::new(move || {
                drop(mousemove_listener);
                drop(mouseup_listener);
            })
        });
    }

    let (stage_width, stage_height) = {
        let stage = handle.borrow();
        (stage.width(), stage.height())
    };

    let context = StageContext {
        handle: handle.clone(),
        version: *version,
        request_redraw,
    };

    html! {
        <svg
            ref={svg_ref}
            width={stage_width.to_string()}
            height={stage_height.to_string()}
            data-testid="stage"
            style="display: block; background-color: white;"
            {onmousedown}
        >
            <ContextProvider<StageContext> context={context}>
                {props.children.clone()}
                <TransformerView />
            </ContextProvider<StageContext>>
        </svg>
    }
}
