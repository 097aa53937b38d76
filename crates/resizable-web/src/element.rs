//! `ElementHost` over a DOM element.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use resizable::{ResizeConfig, ResizeError, ResizeResult, Resizable};
use resizable_core::alloc::HashMap;
use resizable_core::edges::Edges;
use resizable_core::geometry::{Rect, Size};
use resizable_core::host::{
    ElementHost, HostError, HostResult, ListenerId, StyleWrite, ZoneId, ZoneSpec,
};
use resizable_core::math::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, PointerEvent, Window};

type PointerCallback = Closure<dyn FnMut(PointerEvent)>;

/// Where DOM callbacks find the behavior they drive.
type Target = Rc<RefCell<Weak<RefCell<Resizable<WebElement>>>>>;

/// Errors raised while attaching to a DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// Attaching the behavior failed.
    Resize(ResizeError),
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebError::NoWindow => write!(f, "No global window available"),
            WebError::NoDocument => write!(f, "Window has no document"),
            WebError::Resize(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for WebError {}

impl From<ResizeError> for WebError {
    fn from(err: ResizeError) -> Self {
        WebError::Resize(err)
    }
}

/// A zone element and the callback wired to it.
struct ZoneBinding {
    node: HtmlElement,
    on_pointer_down: PointerCallback,
}

/// Run `f` against the behavior, unless it is gone or already borrowed.
fn dispatch(target: &Target, f: impl FnOnce(&mut Resizable<WebElement>)) {
    let Some(resizable) = target.borrow().upgrade() else {
        return;
    };
    match resizable.try_borrow_mut() {
        Ok(mut resizable) => f(&mut resizable),
        Err(_) => tracing::warn!("Dropped re-entrant pointer event"),
    }
}

fn page_position(event: &PointerEvent) -> Vec2 {
    Vec2::new(event.page_x() as f32, event.page_y() as f32)
}

/// [`ElementHost`] backed by an `HtmlElement`.
pub struct WebElement {
    element: HtmlElement,
    window: Window,
    document: Document,
    target: Target,
    zones: RefCell<HashMap<ZoneId, ZoneBinding>>,
    next_zone_id: Cell<u64>,
    on_pointer_move: PointerCallback,
    on_pointer_up: PointerCallback,
    active_listener: Cell<Option<ListenerId>>,
    next_listener_id: Cell<u64>,
}

impl WebElement {
    fn new(element: HtmlElement, window: Window, document: Document, target: Target) -> Self {
        let move_target = target.clone();
        let on_pointer_move = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            dispatch(&move_target, |resizable| {
                resizable.pointer_move(page_position(&event));
            });
        });

        let up_target = target.clone();
        let on_pointer_up = Closure::<dyn FnMut(PointerEvent)>::new(move |_event: PointerEvent| {
            dispatch(&up_target, |resizable| {
                resizable.pointer_up();
            });
        });

        Self {
            element,
            window,
            document,
            target,
            zones: RefCell::new(HashMap::new()),
            next_zone_id: Cell::new(1),
            on_pointer_move,
            on_pointer_up,
            active_listener: Cell::new(None),
            next_listener_id: Cell::new(1),
        }
    }

    /// The element being resized.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn build_zone(&self, spec: &ZoneSpec) -> Result<HtmlElement, wasm_bindgen::JsValue> {
        let node = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(wasm_bindgen::JsValue::from)?;

        node.class_list().add_1(ZoneSpec::CLASS)?;
        node.set_attribute(ZoneSpec::TAG_ATTRIBUTE, spec.tag())?;

        let style = node.style();
        let size = format!("{}px", spec.size);
        style.set_property("width", &size)?;
        style.set_property("height", &size)?;
        style.set_property("position", "absolute")?;

        let placement = [
            ("top", spec.placement.top),
            ("bottom", spec.placement.bottom),
            ("left", spec.placement.left),
            ("right", spec.placement.right),
        ];
        for (property, offset) in placement {
            if let Some(offset) = offset {
                style.set_property(property, &format!("{}px", offset))?;
            }
        }

        let borders = [
            (Edges::TOP, "border-top"),
            (Edges::BOTTOM, "border-bottom"),
            (Edges::RIGHT, "border-right"),
            (Edges::LEFT, "border-left"),
        ];
        for (edge, property) in borders {
            if spec.borders.contains(edge) {
                style.set_property(property, &spec.border_style)?;
            }
        }

        style.set_property("cursor", spec.cursor.css_name())?;
        Ok(node)
    }
}

impl ElementHost for WebElement {
    fn client_size(&self) -> Size<f32> {
        Size::new(
            self.element.client_width() as f32,
            self.element.client_height() as f32,
        )
    }

    fn bounding_rect(&self) -> Rect<f32> {
        let rect = self.element.get_bounding_client_rect();
        Rect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn computed_transform(&self) -> Option<String> {
        let style = self.window.get_computed_style(&self.element).ok().flatten()?;
        let transform = style.get_property_value("transform").ok()?;
        (!transform.is_empty()).then_some(transform)
    }

    fn write_style(&self, write: StyleWrite) {
        let (property, value) = write.to_css();
        if let Err(err) = self.element.style().set_property(property, &value) {
            tracing::warn!("Failed to set {} to {}: {:?}", property, value, err);
        }
    }

    fn insert_zone(&self, spec: &ZoneSpec) -> HostResult<ZoneId> {
        let node = self
            .build_zone(spec)
            .map_err(|err| HostError::ZoneCreation(format!("{:?}", err)))?;

        let id = ZoneId(self.next_zone_id.get());
        self.next_zone_id.set(id.0 + 1);

        let target = self.target.clone();
        let on_pointer_down = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            dispatch(&target, |resizable| {
                resizable.pointer_down(id, page_position(&event));
            });
        });

        node.add_event_listener_with_callback("pointerdown", on_pointer_down.as_ref().unchecked_ref())
            .map_err(|err| HostError::ZoneCreation(format!("{:?}", err)))?;
        self.element
            .append_child(&node)
            .map_err(|err| HostError::ZoneCreation(format!("{:?}", err)))?;

        self.zones.borrow_mut().insert(
            id,
            ZoneBinding {
                node,
                on_pointer_down,
            },
        );
        Ok(id)
    }

    fn remove_zone(&self, id: ZoneId) {
        let Some(binding) = self.zones.borrow_mut().remove(&id) else {
            return;
        };

        let _ = binding.node.remove_event_listener_with_callback(
            "pointerdown",
            binding.on_pointer_down.as_ref().unchecked_ref(),
        );
        // The element may already be gone from the document.
        binding.node.remove();
    }

    fn listen_global(&self) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);

        let added = self
            .window
            .add_event_listener_with_callback(
                "pointermove",
                self.on_pointer_move.as_ref().unchecked_ref(),
            )
            .and_then(|_| {
                self.window.add_event_listener_with_callback(
                    "pointerup",
                    self.on_pointer_up.as_ref().unchecked_ref(),
                )
            });
        if let Err(err) = added {
            tracing::warn!("Failed to listen for global pointer events: {:?}", err);
        }

        self.active_listener.set(Some(id));
        id
    }

    fn unlisten_global(&self, id: ListenerId) {
        if self.active_listener.get() != Some(id) {
            return;
        }

        let _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.on_pointer_move.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "pointerup",
            self.on_pointer_up.as_ref().unchecked_ref(),
        );
        self.active_listener.set(None);
    }
}

/// Handle to a behavior attached with [`attach_web`].
///
/// Dropping it detaches the behavior.
pub struct WebResizable {
    inner: Rc<RefCell<Resizable<WebElement>>>,
}

impl WebResizable {
    /// Replace the configuration.
    pub fn update(&self, config: impl Into<ResizeConfig>) -> ResizeResult<()> {
        self.inner.borrow_mut().update(config)
    }

    /// Remove zones and listeners. Idempotent.
    pub fn detach(&self) {
        self.inner.borrow_mut().detach();
    }

    /// Check if a gesture is in progress.
    pub fn is_resizing(&self) -> bool {
        self.inner.borrow().is_resizing()
    }
}

/// Make `element` resizable.
pub fn attach_web(
    element: HtmlElement,
    config: impl Into<ResizeConfig>,
) -> Result<WebResizable, WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let target: Target = Rc::new(RefCell::new(Weak::new()));
    let host = WebElement::new(element, window, document, target.clone());
    let resizable = Resizable::attach(host, config)?;

    let inner = Rc::new(RefCell::new(resizable));
    *target.borrow_mut() = Rc::downgrade(&inner);
    Ok(WebResizable { inner })
}
