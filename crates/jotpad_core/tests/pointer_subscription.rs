use jotpad_core::{PointerSource, PointerSubscription};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counters {
    attached: Cell<usize>,
    detached: Cell<usize>,
}

#[derive(Debug)]
struct CountingSource {
    counters: Rc<Counters>,
    fail_attach: bool,
}

impl PointerSource for CountingSource {
    type Error = &'static str;

    fn attach(&mut self) -> Result<(), Self::Error> {
        if self.fail_attach {
            return Err("no pointer device");
        }
        self.counters.attached.set(self.counters.attached.get() + 1);
        Ok(())
    }

    fn detach(&mut self) {
        self.counters.detached.set(self.counters.detached.get() + 1);
    }
}

#[test]
fn mount_attaches_once_and_teardown_detaches_once() {
    let counters = Rc::new(Counters::default());
    {
        let _subscription = PointerSubscription::acquire(CountingSource {
            counters: Rc::clone(&counters),
            fail_attach: false,
        })
        .expect("attach should succeed");
        assert_eq!(counters.attached.get(), 1);
        assert_eq!(counters.detached.get(), 0);
    }
    assert_eq!(counters.detached.get(), 1);
}

#[test]
fn repeated_mount_cycles_do_not_leak_listeners() {
    let counters = Rc::new(Counters::default());
    for _ in 0..3 {
        let subscription = PointerSubscription::acquire(CountingSource {
            counters: Rc::clone(&counters),
            fail_attach: false,
        })
        .unwrap();
        drop(subscription);
    }
    assert_eq!(counters.attached.get(), 3);
    assert_eq!(counters.detached.get(), 3);
}

#[test]
fn failed_attach_never_detaches() {
    let counters = Rc::new(Counters::default());
    let err = PointerSubscription::acquire(CountingSource {
        counters: Rc::clone(&counters),
        fail_attach: true,
    })
    .unwrap_err();

    assert_eq!(err, "no pointer device");
    assert_eq!(counters.detached.get(), 0);
}
