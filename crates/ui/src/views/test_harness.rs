use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppConfig, AppServices, Timings, ValidationService};
use werkstatt_core::model::ScenarioId;
use werkstatt_core::{Catalog, Progress};

use crate::context::{UiApp, build_app_context, use_progress_provider};
use crate::views::diagnosis::DiagnosisTestHandles;
use crate::views::workbench::WorkbenchTestHandles;
use crate::views::{DeskView, ProgressView};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn validation(&self) -> Arc<ValidationService> {
        self.services.validation()
    }

    fn timings(&self) -> Timings {
        self.services.timings()
    }

    fn start_scenario(&self) -> ScenarioId {
        self.services.start_scenario().clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Desk,
    Progress,
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    progress: Rc<RefCell<Option<Signal<Progress>>>>,
    pub diagnosis: DiagnosisTestHandles,
    pub workbench: WorkbenchTestHandles,
}

impl HarnessHandles {
    fn progress(&self) -> Signal<Progress> {
        (*self.progress.borrow()).expect("progress registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let progress = use_progress_provider();
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.diagnosis.clone());
    use_context_provider(|| props.handles.workbench.clone());

    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.progress.borrow_mut() = Some(progress);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Desk => rsx! { DeskView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drives the dom until `done` holds or `rounds` runs out.
    pub async fn drive_until(&mut self, rounds: usize, done: impl Fn(&Progress) -> bool) {
        for _ in 0..rounds {
            if self.read_progress(&done) {
                return;
            }
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Runs `f` against the live session state, then re-renders.
    pub fn with_progress<R>(&mut self, f: impl FnOnce(&mut Progress) -> R) -> R {
        let mut progress = self.handles.progress();
        let out = self.dom.in_runtime(|| f(&mut progress.write()));
        drive_dom(&mut self.dom);
        out
    }

    pub fn read_progress<R>(&self, f: impl FnOnce(&Progress) -> R) -> R {
        let progress = self.handles.progress();
        self.dom.in_runtime(|| f(&progress.peek()))
    }

    /// Invokes a registered view callback inside the dom runtime.
    pub fn call<T: 'static>(&mut self, callback: Callback<T>, value: T) {
        self.dom.in_runtime(|| callback.call(value));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, timings: Timings) -> ViewHarness {
    let config = AppConfig {
        start_scenario: None,
        timings,
    };
    let services = AppServices::builtin(&config).expect("builtin services");
    let handles = HarnessHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { services }),
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
