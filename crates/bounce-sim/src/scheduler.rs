//! Ordered system execution.

use log::trace;

use crate::store::Store;
use crate::surface::RenderSurface;

/// A per-tick operation over the store. Systems keep no entity state between
/// ticks; anything they need lives in components.
pub trait System {
    fn name(&self) -> &'static str;

    fn update(&mut self, store: &mut Store, surface: &mut dyn RenderSurface);
}

/// Runs every registered system once per `update`, in registration order.
#[derive(Default)]
pub struct Scheduler {
    systems: Vec<Box<dyn System>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, system: impl System + 'static) {
        self.systems.push(Box::new(system));
    }

    pub fn with(mut self, system: impl System + 'static) -> Self {
        self.add(system);
        self
    }

    pub fn update(&mut self, store: &mut Store, surface: &mut dyn RenderSurface) {
        for system in &mut self.systems {
            trace!("running system {}", system.name());
            system.update(store, surface);
        }
    }

    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::surface::RecordingSurface;

    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl System for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn update(&mut self, _store: &mut Store, _surface: &mut dyn RenderSurface) {
            self.log.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn runs_in_registration_order_even_when_store_is_empty() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        for name in ["first", "second", "third"] {
            scheduler.add(Probe {
                name,
                log: Rc::clone(&log),
            });
        }

        let mut store = Store::new();
        let mut surface = RecordingSurface::new();
        scheduler.update(&mut store, &mut surface);
        scheduler.update(&mut store, &mut surface);

        assert_eq!(
            *log.borrow(),
            vec!["first", "second", "third", "first", "second", "third"]
        );
        assert_eq!(scheduler.system_names(), vec!["first", "second", "third"]);
    }
}
