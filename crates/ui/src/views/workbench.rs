use dioxus::prelude::*;
use werkstatt_core::model::Scenario;

use crate::context::{AppContext, use_progress};
use crate::views::ShadowPreview;
use crate::vm::WorkbenchVm;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const CHECK_FAILED: &str = "Die Prüfung konnte nicht durchgeführt werden.";

#[component]
pub fn WorkbenchView(scenario: Scenario) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress();
    let mut vm = use_signal(|| WorkbenchVm::new(&scenario));
    let mut check_task = use_signal(|| None::<Task>);

    use_effect(use_reactive(&scenario, move |scenario| {
        if vm.peek().scenario_id() != &scenario.id {
            vm.write().sync(&scenario);
        }
    }));

    use_drop(move || {
        if let Ok(mut slot) = check_task.try_write() {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
    });

    let edit = use_callback(move |css: String| {
        let mut progress = progress;
        progress.write().update_user_css(css);
    });

    let reset = {
        let initial_css = scenario.solution.initial_css.clone();
        use_callback(move |()| {
            let mut progress = progress;
            progress.write().update_user_css(initial_css.clone());
            vm.write().clear_feedback();
        })
    };

    let validate = {
        let validation = ctx.validation();
        let scenario_id = scenario.id.clone();
        use_callback(move |()| {
            if !vm.write().begin_validation() {
                return;
            }
            let validation = validation.clone();
            let scenario_id = scenario_id.clone();
            let css = progress.peek().user_css().to_string();
            let task = spawn(async move {
                let mut progress = progress;
                let result = validation.validate(&scenario_id, &css).await;
                check_task.set(None);
                match result {
                    Ok(verdict) => {
                        vm.write().finish_validation(&verdict);
                        let mut state = progress.write();
                        if verdict.passed {
                            if let Err(err) = state.complete_scenario(&scenario_id) {
                                tracing::warn!(%err, "passing ticket could not be completed");
                            }
                        } else {
                            state.add_mistake();
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%err, "validation failed");
                        vm.write().abort_validation(CHECK_FAILED);
                    }
                }
            });
            check_task.set(Some(task));
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WorkbenchTestHandles>() {
                handles.register(edit, validate);
            }
        }
    }

    let user_css = progress.read().user_css().to_string();
    let state = vm.read().clone();
    let revealed = state.revealed_hints(&scenario).to_vec();

    rsx! {
        div { class: "workbench",
            header { class: "workbench__toolbar",
                div { class: "workbench__heading",
                    h2 { "{scenario.title}" }
                    span { class: "badge", "Workspace" }
                }
                div { class: "workbench__actions",
                    button {
                        class: if state.show_help() { "btn btn--help btn--on" } else { "btn btn--help" },
                        r#type: "button",
                        onclick: move |_| vm.write().toggle_help(),
                        "Hilfe & Tipps"
                    }
                    button {
                        class: "btn btn--icon",
                        r#type: "button",
                        title: "Code zurücksetzen",
                        onclick: move |_| reset.call(()),
                        "↺"
                    }
                    button {
                        class: "btn btn--check",
                        r#type: "button",
                        disabled: state.is_validating(),
                        onclick: move |_| validate.call(()),
                        "{state.check_label()}"
                    }
                }
            }
            if state.show_help() {
                section { class: "workbench__hints",
                    h3 { "Mentor-Hinweise" }
                    for (index, hint) in revealed.iter().enumerate() {
                        div { key: "{index}", class: "hint",
                            span { class: "hint__title", "{hint.title}" }
                            p { "{hint.text}" }
                        }
                    }
                    if let Some(label) = state.reveal_label() {
                        button {
                            class: "hint__more",
                            r#type: "button",
                            onclick: move |_| {
                                vm.write().reveal_next_hint();
                            },
                            "{label}"
                        }
                    }
                }
            }
            div { class: "workbench__split",
                div { class: "workbench__editor",
                    textarea {
                        class: "css-editor",
                        spellcheck: false,
                        value: "{user_css}",
                        oninput: move |evt: FormEvent| edit.call(evt.value()),
                    }
                    if let Some(feedback) = state.feedback() {
                        div { class: "workbench__feedback",
                            strong { "Hinweis: " }
                            "{feedback}"
                        }
                    }
                }
                div { class: "workbench__preview panel",
                    div { class: "panel__title", "Vorschau" }
                    div { class: "panel__preview",
                        ShadowPreview {
                            html: scenario.solution.initial_html.clone(),
                            css: user_css.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WorkbenchTestHandles {
    edit: Rc<RefCell<Option<Callback<String>>>>,
    validate: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl WorkbenchTestHandles {
    pub(crate) fn register(&self, edit: Callback<String>, validate: Callback<()>) {
        *self.edit.borrow_mut() = Some(edit);
        *self.validate.borrow_mut() = Some(validate);
    }

    pub(crate) fn edit(&self) -> Callback<String> {
        (*self.edit.borrow()).expect("workbench edit registered")
    }

    pub(crate) fn validate(&self) -> Callback<()> {
        (*self.validate.borrow()).expect("workbench validate registered")
    }
}
