//! Browser host: DOM-backed surface and event wiring.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::app::HexagonLayout;
use crate::config::{load_config, HexagonConfig, RuleContainerIds};
use crate::error::{AppError, AppResult};
use crate::hover::{HoverEvent, HoverMachine};
use crate::logging;
use crate::surface::{
    HexagonSurface, RuleSlot, StyleProperty, StyleTarget, SurfaceError, SurfaceResult, TextTarget,
};

const CONFIG_ELEMENT_ID: &str = "hexagon-config";

thread_local! {
    static RUNNING: RefCell<Option<WebApp>> = const { RefCell::new(None) };
}

#[derive(Debug, Clone)]
pub struct DomElement(HtmlElement);

impl StyleTarget for DomElement {
    fn set_style(&self, property: StyleProperty, value: &str) -> SurfaceResult<()> {
        self.0
            .style()
            .set_property(property.css_name(), value)
            .map_err(|err| SurfaceError::StyleRejected {
                property: property.css_name(),
                reason: format!("{err:?}"),
            })
    }
}

#[derive(Debug, Clone)]
pub struct DomContainer(Element);

impl TextTarget for DomContainer {
    fn replace_text(&self, text: &str) -> SurfaceResult<()> {
        self.0.set_text_content(Some(text));
        Ok(())
    }
}

pub struct DomSurface {
    document: Document,
    selector: String,
    containers: RuleContainerIds,
}

impl DomSurface {
    pub fn new(document: Document, config: &HexagonConfig) -> Self {
        Self {
            document,
            selector: config.selector(),
            containers: config.containers.clone(),
        }
    }
}

impl HexagonSurface for DomSurface {
    type Element = DomElement;
    type Container = DomContainer;

    fn query_hexagons(&self) -> Vec<DomElement> {
        let nodes = match self.document.query_selector_all(&self.selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                tracing::warn!(selector = %self.selector, ?err, "hexagon query failed");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
            .collect()
    }

    fn style_container(&self, slot: RuleSlot) -> Option<DomContainer> {
        self.document
            .get_element_by_id(self.containers.id_for(slot))
            .map(DomContainer)
    }
}

/// Keeps the layout and its listeners alive for the page lifetime.
pub struct WebApp {
    layout: Rc<HexagonLayout<DomSurface>>,
    _listeners: Vec<EventListener>,
}

impl WebApp {
    pub fn layout(&self) -> &HexagonLayout<DomSurface> {
        &self.layout
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run().map_err(|err| JsValue::from_str(&err.to_string()))
}

pub fn run() -> AppResult<()> {
    if let Err(err) = logging::init_with_writer(logging::DEFAULT_LEVEL, ConsoleWriter::default) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
    tracing::info!("starting hexagons");

    let window = web_sys::window().ok_or(AppError::Host("no window"))?;
    let document = window.document().ok_or(AppError::Host("no document"))?;
    let config = load_config(
        document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .as_deref(),
    );

    let app = mount(window, document, config);
    RUNNING.with(|running| *running.borrow_mut() = Some(app));
    Ok(())
}

/// Initial styling, first resize pass, then resize and hover listeners.
pub fn mount(window: Window, document: Document, config: HexagonConfig) -> WebApp {
    let layout = Rc::new(HexagonLayout::new(
        DomSurface::new(document, &config),
        config,
    ));
    layout.install();
    if let Some(width) = viewport_width(&window) {
        layout.resize(width);
    }

    let mut listeners = Vec::new();
    for element in layout.surface().query_hexagons() {
        let machine = Rc::new(Cell::new(HoverMachine::new()));
        for event in [HoverEvent::PointerEnter, HoverEvent::PointerLeave] {
            let layout = Rc::clone(&layout);
            let machine = Rc::clone(&machine);
            let target = element.clone();
            listeners.push(EventListener::new(
                &element.0,
                event.dom_event_name(),
                move |_event| {
                    let mut current = machine.get();
                    layout.handle_hover(&target, &mut current, event);
                    machine.set(current);
                },
            ));
        }
    }

    let resize_layout = Rc::clone(&layout);
    let resize_window = window.clone();
    listeners.push(EventListener::new(&window, "resize", move |_event| {
        if let Some(width) = viewport_width(&resize_window) {
            resize_layout.resize(width);
        }
    }));

    tracing::info!(listeners = listeners.len(), "hexagon listeners registered");
    WebApp {
        layout,
        _listeners: listeners,
    }
}

fn viewport_width(window: &Window) -> Option<u32> {
    let width = window.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

/// Buffers one formatted event and prints it to the browser console on drop.
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}
