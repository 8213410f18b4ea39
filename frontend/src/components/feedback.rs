use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// True for the first `LOADING_SKELETON_MS` after mount.
#[hook]
pub fn use_loading_skeleton() -> bool {
    let loading = use_state(|| true);
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::LOADING_SKELETON_MS, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }
    *loading
}

/// Elements currently playing the click shake. Each entry carries the
/// ticket of the click that started it, so an older timer cannot cut a
/// newer shake short.
#[derive(Debug, Clone, PartialEq)]
pub struct Shakes<K> {
    active: Vec<(u32, K)>,
}

impl<K> Default for Shakes<K> {
    fn default() -> Self {
        Self { active: Vec::new() }
    }
}

pub enum ShakeAction<K> {
    Start { key: K, ticket: u32 },
    Finish(u32),
}

impl<K: PartialEq> Shakes<K> {
    pub fn is_shaking(&self, key: &K) -> bool {
        self.active.iter().any(|(_, active)| active == key)
    }

    fn start(&mut self, key: K, ticket: u32) {
        self.active.retain(|(_, active)| *active != key);
        self.active.push((ticket, key));
    }

    fn finish(&mut self, ticket: u32) {
        self.active.retain(|(active, _)| *active != ticket);
    }
}

impl<K: Clone + PartialEq + 'static> Reducible for Shakes<K> {
    type Action = ShakeAction<K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ShakeAction::Start { key, ticket } => next.start(key, ticket),
            ShakeAction::Finish(ticket) => next.finish(ticket),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone)]
pub struct UseShakeHandle<K: Clone + PartialEq + 'static> {
    shakes: UseReducerHandle<Shakes<K>>,
    tickets: Rc<Cell<u32>>,
}

impl<K: Clone + PartialEq + 'static> UseShakeHandle<K> {
    pub fn is_shaking(&self, key: &K) -> bool {
        self.shakes.is_shaking(key)
    }

    /// Adds the `shake` class to `key` and removes it after `SHAKE_MS`.
    pub fn shake(&self, key: K) {
        let ticket = self.tickets.get().wrapping_add(1);
        self.tickets.set(ticket);
        self.shakes.dispatch(ShakeAction::Start { key, ticket });

        let dispatcher = self.shakes.dispatcher();
        Timeout::new(config::SHAKE_MS, move || dispatcher.dispatch(ShakeAction::Finish(ticket))).forget();
    }
}

#[hook]
pub fn use_shake<K: Clone + PartialEq + 'static>() -> UseShakeHandle<K> {
    let shakes = use_reducer(Shakes::<K>::default);
    let tickets = use_memo(|_| Cell::new(0), ());
    UseShakeHandle { shakes, tickets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Rc<Shakes<&'static str>>, action: ShakeAction<&'static str>) -> Rc<Shakes<&'static str>> {
        state.reduce(action)
    }

    #[test]
    fn test_shake_ends_with_its_own_ticket() {
        let shakes = reduce(Rc::default(), ShakeAction::Start { key: "mechanicCTA", ticket: 1 });
        assert!(shakes.is_shaking(&"mechanicCTA"));
        assert!(!shakes.is_shaking(&"supplierCTA"));

        let shakes = reduce(shakes, ShakeAction::Finish(1));
        assert!(!shakes.is_shaking(&"mechanicCTA"));
    }

    #[test]
    fn test_stale_timer_does_not_stop_a_newer_shake() {
        let shakes = reduce(Rc::default(), ShakeAction::Start { key: "faq", ticket: 1 });
        let shakes = reduce(shakes, ShakeAction::Start { key: "faq", ticket: 2 });
        let shakes = reduce(shakes, ShakeAction::Finish(1));
        assert!(shakes.is_shaking(&"faq"));

        let shakes = reduce(shakes, ShakeAction::Finish(2));
        assert!(!shakes.is_shaking(&"faq"));
    }

    #[test]
    fn test_unknown_ticket_is_a_no_op() {
        let shakes = reduce(Rc::default(), ShakeAction::Start { key: "careers", ticket: 3 });
        let after = reduce(shakes.clone(), ShakeAction::Finish(9));
        assert!(Rc::ptr_eq(&shakes, &after));
    }
}
