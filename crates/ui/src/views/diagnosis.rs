use dioxus::prelude::*;
use werkstatt_core::model::{OptionId, Phase, Scenario};
use werkstatt_core::{DiagnosisFlow, DiagnosisOutcome};

use crate::context::{AppContext, use_progress};
use crate::views::ShadowPreview;
use crate::vm::{analysis_tip, map_diagnosis_options, use_delayed_transition};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn DiagnosisView(scenario: Scenario) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress();
    let mut flow = use_signal(DiagnosisFlow::new);
    let mut show_tip = use_signal(|| false);
    let advance = use_delayed_transition();
    let advance_delay = ctx.timings().diagnosis_advance;

    let submit = {
        let scenario = scenario.clone();
        use_callback(move |option_id: OptionId| {
            let mut progress = progress;
            let outcome = flow.write().submit(&scenario.diagnosis, &option_id);
            match outcome {
                DiagnosisOutcome::Correct { .. } => {
                    let scenario_id = scenario.id.clone();
                    advance.schedule(advance_delay, move || {
                        let mut progress = progress;
                        let mut state = progress.write();
                        if state.current_scenario_id() != Some(&scenario_id) {
                            return;
                        }
                        if let Err(err) = state.set_phase(Phase::Workbench) {
                            tracing::debug!(%err, "diagnosis could not advance");
                        }
                    });
                }
                DiagnosisOutcome::Incorrect { .. } => progress.write().add_mistake(),
                DiagnosisOutcome::Ignored => {}
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DiagnosisTestHandles>() {
                handles.register(submit);
            }
        }
    }

    let options = map_diagnosis_options(&scenario.diagnosis, &flow.read());
    let tip = analysis_tip(&scenario).to_string();

    rsx! {
        div { class: "diagnosis",
            section { class: "diagnosis__visual panel",
                div { class: "panel__title", "Visuelle Analyse" }
                div { class: "panel__preview",
                    ShadowPreview {
                        html: scenario.solution.initial_html.clone(),
                        css: scenario.solution.initial_css.clone(),
                    }
                }
            }
            section { class: "diagnosis__questions",
                h2 { "Was ist das Problem?" }
                p { class: "diagnosis__question", "{scenario.diagnosis.question}" }
                div { class: "diagnosis__options",
                    for option in options {
                        div { key: "{option.id}", class: "diagnosis__item",
                            button {
                                class: option.state.class(),
                                r#type: "button",
                                disabled: option.disabled,
                                onclick: {
                                    let id = option.id.clone();
                                    move |_| submit.call(id.clone())
                                },
                                "{option.text}"
                            }
                            if let Some(feedback) = option.feedback.as_ref() {
                                div { class: "diagnosis__feedback",
                                    span { "{feedback}" }
                                    if option.can_retry {
                                        button {
                                            class: "link",
                                            r#type: "button",
                                            onclick: move |_| {
                                                flow.write().retry();
                                            },
                                            "Nochmal versuchen"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "diagnosis__tip",
                    button {
                        class: "link link--tip",
                        r#type: "button",
                        onclick: move |_| show_tip.toggle(),
                        if show_tip() { "Hinweis ausblenden" } else { "Ich brauche einen Tipp" }
                    }
                    if show_tip() {
                        div { class: "tip",
                            p { class: "tip__title", "KI-Tipp zur Analyse:" }
                            p { class: "tip__text", "\"{tip}\"" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DiagnosisTestHandles {
    submit: Rc<RefCell<Option<Callback<OptionId>>>>,
}

#[cfg(test)]
impl DiagnosisTestHandles {
    pub(crate) fn register(&self, submit: Callback<OptionId>) {
        *self.submit.borrow_mut() = Some(submit);
    }

    pub(crate) fn submit(&self) -> Callback<OptionId> {
        (*self.submit.borrow()).expect("diagnosis submit registered")
    }
}
