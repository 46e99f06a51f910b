use std::time::Duration;

use dioxus::prelude::*;

/// A single pending, cancellable action tied to the owning component.
///
/// Only one action can be pending: scheduling again while one waits is a
/// no-op, so repeated clicks never stack timers.
#[derive(Clone, Copy, PartialEq)]
pub struct DelayedTransition {
    pending: Signal<Option<Task>>,
}

impl DelayedTransition {
    /// Runs `action` after `delay`. Returns `false` when an action is already pending.
    pub fn schedule(&self, delay: Duration, action: impl FnOnce() + 'static) -> bool {
        let mut pending = self.pending;
        if pending.peek().is_some() {
            return false;
        }
        let task = spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            pending.set(None);
            action();
        });
        pending.set(Some(task));
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.read().is_some()
    }

    /// Drops the pending action, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending;
        let Ok(mut slot) = pending.try_write() else {
            return;
        };
        if let Some(task) = slot.take() {
            task.cancel();
        }
    }
}

/// A `DelayedTransition` whose pending action is cancelled on unmount.
pub fn use_delayed_transition() -> DelayedTransition {
    let pending = use_signal(|| None::<Task>);
    let transition = DelayedTransition { pending };
    use_drop(move || transition.cancel());
    transition
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use dioxus::core::NoOpMutations;

    use super::*;
    use crate::views::test_harness::drive_dom;

    const DELAY: Duration = Duration::from_millis(20);

    #[derive(Clone, Default)]
    struct Handles {
        fired: Rc<Cell<u32>>,
        mounted: Rc<RefCell<Option<Signal<bool>>>>,
        schedule: Rc<RefCell<Option<Callback<(), bool>>>>,
        pending: Rc<RefCell<Option<Callback<(), bool>>>>,
        cancel: Rc<RefCell<Option<Callback<()>>>>,
    }

    #[derive(Props, Clone)]
    struct HostProps {
        handles: Handles,
    }

    impl PartialEq for HostProps {
        fn eq(&self, _other: &Self) -> bool {
            true
        }
    }

    #[component]
    fn Host(props: HostProps) -> Element {
        use_context_provider(|| props.handles.clone());
        let mounted = use_signal(|| true);
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            *props.handles.mounted.borrow_mut() = Some(mounted);
        }
        rsx! {
            if mounted() {
                Countdown {}
            }
        }
    }

    #[component]
    fn Countdown() -> Element {
        let handles = use_context::<Handles>();
        let transition = use_delayed_transition();
        let schedule = {
            let fired = handles.fired.clone();
            use_callback(move |()| {
                let fired = fired.clone();
                transition.schedule(DELAY, move || fired.set(fired.get() + 1))
            })
        };
        let pending = use_callback(move |()| transition.is_pending());
        let cancel = use_callback(move |()| transition.cancel());

        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            *handles.schedule.borrow_mut() = Some(schedule);
            *handles.pending.borrow_mut() = Some(pending);
            *handles.cancel.borrow_mut() = Some(cancel);
        }
        rsx! { "counting" }
    }

    struct Fixture {
        dom: VirtualDom,
        handles: Handles,
    }

    impl Fixture {
        fn mount() -> Self {
            let handles = Handles::default();
            let mut dom = VirtualDom::new_with_props(
                Host,
                HostProps {
                    handles: handles.clone(),
                },
            );
            dom.rebuild_in_place();
            drive_dom(&mut dom);
            Self { dom, handles }
        }

        fn schedule(&mut self) -> bool {
            let callback = (*self.handles.schedule.borrow()).expect("schedule registered");
            let scheduled = self.dom.in_runtime(|| callback.call(()));
            drive_dom(&mut self.dom);
            scheduled
        }

        fn is_pending(&self) -> bool {
            let callback = (*self.handles.pending.borrow()).expect("pending registered");
            self.dom.in_runtime(|| callback.call(()))
        }

        fn cancel(&mut self) {
            let callback = (*self.handles.cancel.borrow()).expect("cancel registered");
            self.dom.in_runtime(|| callback.call(()));
            drive_dom(&mut self.dom);
        }

        fn unmount(&mut self) {
            let mut mounted = (*self.handles.mounted.borrow()).expect("host registered");
            self.dom.in_runtime(|| mounted.set(false));
            drive_dom(&mut self.dom);
        }

        /// Polls the dom well past `DELAY` so any surviving task gets to run.
        async fn wait_past_delay(&mut self) {
            for _ in 0..6 {
                let _ = tokio::time::timeout(DELAY, self.dom.wait_for_work()).await;
                self.dom.render_immediate(&mut NoOpMutations);
                self.dom.process_events();
            }
        }

        fn fired(&self) -> u32 {
            self.handles.fired.get()
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn action_runs_once_and_rescheduling_waits_for_it() {
        let mut fixture = Fixture::mount();

        assert!(fixture.schedule());
        assert!(fixture.is_pending());
        assert!(!fixture.schedule(), "second schedule must not stack");

        fixture.wait_past_delay().await;
        assert_eq!(fixture.fired(), 1);
        assert!(!fixture.is_pending());

        assert!(fixture.schedule(), "slot frees up once the action ran");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn cancel_drops_the_pending_action() {
        let mut fixture = Fixture::mount();

        assert!(fixture.schedule());
        fixture.cancel();
        assert!(!fixture.is_pending());

        fixture.wait_past_delay().await;
        assert_eq!(fixture.fired(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unmounting_drops_the_pending_action() {
        let mut fixture = Fixture::mount();

        assert!(fixture.schedule());
        assert!(fixture.is_pending());
        fixture.unmount();

        fixture.wait_past_delay().await;
        assert_eq!(fixture.fired(), 0);
    }
}
