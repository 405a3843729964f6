
use std::cell::Cell;
use std::cmp::Ordering;

/// Routes the crate's `log` output through the test harness so it only shows for failing tests.
pub(crate) fn init_logging() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}

thread_local! {
    static COMPARISONS_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Lets the current thread make `budget` more comparisons between [`Fragile`] keys before they
/// start panicking. `None` lifts the limit.
pub(crate) fn limit_comparisons(budget: Option<usize>) {
    COMPARISONS_LEFT.with(|left| left.set(budget));
}

/// A key whose comparisons panic once the thread's budget runs out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Fragile(pub(crate) i32);

impl PartialOrd for Fragile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fragile {
    fn cmp(&self, other: &Self) -> Ordering {
        COMPARISONS_LEFT.with(|left| match left.get() {
            Some(0) => panic!("comparison budget spent"),
            Some(n) => left.set(Some(n - 1)),
            None => {}
        });
        self.0.cmp(&other.0)
    }
}
