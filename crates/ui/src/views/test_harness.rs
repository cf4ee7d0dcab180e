use std::any::Any;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dioxus::core::{AttributeValue, ElementId, Mutation, Mutations};
use dioxus::html::{
    PlatformEventData, SerializedFormData, SerializedHtmlEventConverter, SerializedMouseData,
    set_event_converter,
};
use dioxus::prelude::*;
use roadmap_core::model::{ActiveSession, Roadmap};
use roadmap_core::time::fixed_clock;
use services::{AppServices, ChatRelay, SessionManager};
use storage::repository::Storage;

use crate::app::{Gate, Shell};
use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::{ChatWidget, RoadmapView};
use crate::vm::ChatVm;

#[derive(Default)]
pub struct RecordingLinkOpener {
    pub opened: Mutex<Vec<String>>,
}

impl UiLinkOpener for RecordingLinkOpener {
    fn open_url(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

struct TestApp {
    services: AppServices,
    links: Arc<RecordingLinkOpener>,
}

impl UiApp for TestApp {
    fn roadmap(&self) -> Arc<Roadmap> {
        self.services.roadmap()
    }

    fn session(&self) -> Arc<SessionManager> {
        self.services.session()
    }

    fn chat(&self) -> Arc<ChatRelay> {
        self.services.chat()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        self.links.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Shell,
    Roadmap(ActiveSession),
    Chat { open: bool },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    exits: Arc<Mutex<Vec<Gate>>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));

    let open = matches!(props.view, ViewKind::Chat { open: true });
    use_context_provider(|| {
        let mut vm = ChatVm::new();
        if open {
            vm.toggle_open();
        }
        Signal::new(vm)
    });

    match props.view.clone() {
        ViewKind::Shell => rsx! { Shell {} },
        ViewKind::Roadmap(session) => {
            let exits = Arc::clone(&props.exits);
            rsx! {
                RoadmapView {
                    session,
                    on_exit: move |gate: Gate| exits.lock().unwrap().push(gate),
                }
            }
        }
        ViewKind::Chat { .. } => rsx! { ChatWidget {} },
    }
}

/// A dynamic attribute or listener the dom mounted, in mount order.
#[derive(Clone, Debug)]
enum Mounted {
    Attribute {
        name: String,
        value: String,
        id: ElementId,
    },
    Listener {
        name: String,
        id: ElementId,
    },
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
    pub links: Arc<RecordingLinkOpener>,
    pub exits: Arc<Mutex<Vec<Gate>>>,
    mounted: Vec<Mounted>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        let edits = self.dom.rebuild_to_vec();
        self.record(edits);
        self.drive();
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        let edits = self.dom.render_immediate_to_vec();
        self.record(edits);
        self.dom.process_events();
    }

    /// Keep driving until `span` of tokio time has passed.
    pub async fn drive_for(&mut self, span: std::time::Duration) {
        let deadline = tokio::time::Instant::now() + span;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// The first element mounted with a dynamic `name="value"` attribute.
    pub fn element_with(&self, name: &str, value: &str) -> ElementId {
        self.position_of(name, value)
            .and_then(|idx| self.attribute_id(idx))
            .unwrap_or_else(|| panic!("no element with {name}={value:?}"))
    }

    /// The checkbox inside the milestone row tagged `milestone_id`.
    pub fn milestone_checkbox(&self, milestone_id: &str) -> ElementId {
        let row = self
            .position_of("data-milestone", milestone_id)
            .unwrap_or_else(|| panic!("no milestone row {milestone_id}"));
        self.mounted[row..]
            .iter()
            .find_map(|mounted| match mounted {
                Mounted::Attribute { name, id, .. } if name == "aria-checked" => Some(*id),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no checkbox in milestone row {milestone_id}"))
    }

    /// The first element listening for `event`.
    pub fn listener(&self, event: &str) -> ElementId {
        self.mounted
            .iter()
            .find_map(|mounted| match mounted {
                Mounted::Listener { name, id } if name == event => Some(*id),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no {event} listener mounted"))
    }

    pub fn click(&mut self, target: ElementId) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        self.dispatch("click", data, target);
    }

    /// Submit the form at `target` with no field values attached.
    pub fn submit(&mut self, target: ElementId) {
        let form: SerializedFormData =
            serde_json::from_str("{}").expect("empty form payload");
        self.dispatch("submit", PlatformEventData::new(Box::new(form)), target);
    }

    fn dispatch(&mut self, name: &str, data: PlatformEventData, target: ElementId) {
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event, target);
        self.drive();
    }

    fn drive(&mut self) {
        self.dom.process_events();
        let edits = self.dom.render_immediate_to_vec();
        self.record(edits);
        self.dom.process_events();
    }

    fn record(&mut self, edits: Mutations) {
        for edit in edits.edits {
            match edit {
                Mutation::SetAttribute {
                    name,
                    value: AttributeValue::Text(value),
                    id,
                    ..
                } => self.mounted.push(Mounted::Attribute {
                    name: name.to_string(),
                    value,
                    id,
                }),
                Mutation::NewEventListener { name, id } => {
                    self.mounted.push(Mounted::Listener {
                        name: name.to_string(),
                        id,
                    });
                }
                _ => {}
            }
        }
    }

    fn position_of(&self, attribute: &str, expected: &str) -> Option<usize> {
        self.mounted.iter().position(|mounted| {
            matches!(
                mounted,
                Mounted::Attribute { name, value, .. } if name == attribute && value == expected
            )
        })
    }

    fn attribute_id(&self, idx: usize) -> Option<ElementId> {
        match self.mounted.get(idx)? {
            Mounted::Attribute { id, .. } => Some(*id),
            Mounted::Listener { .. } => None,
        }
    }
}

/// Services over fresh in-memory storage with a fixed clock and no chat key.
pub fn test_services() -> (Storage, AppServices) {
    let storage = Storage::in_memory();
    let services = AppServices::from_storage(&storage, fixed_clock(), ChatRelay::new(None))
        .expect("builtin roadmap");
    (storage, services)
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let (storage, services) = test_services();
    setup_view_harness_with(view, storage, services)
}

pub fn setup_view_harness_with(
    view: ViewKind,
    storage: Storage,
    services: AppServices,
) -> ViewHarness {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let links = Arc::new(RecordingLinkOpener::default());
    let exits = Arc::new(Mutex::new(Vec::new()));
    let app = Arc::new(TestApp {
        services: services.clone(),
        links: Arc::clone(&links),
    });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            view,
            exits: Arc::clone(&exits),
        },
    );

    ViewHarness {
        dom,
        storage,
        services,
        links,
        exits,
        mounted: Vec::new(),
    }
}
