//! Ownership of the single live chart.
//!
//! A chart is never updated in place: each successful analysis disposes the
//! current instance and constructs a new one from a fresh [`LineChartSpec`].

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::error::UploadError;
use crate::models::LineChartSpec;

/// A constructed chart that must be released explicitly.
pub trait ChartHandle {
    fn dispose(self);
}

/// Something that can draw a line chart (Chart.js in the browser, egui_plot natively).
pub trait ChartBackend {
    type Handle: ChartHandle;
    fn create(&mut self, spec: &LineChartSpec) -> Result<Self::Handle, UploadError>;
}

/// Holds at most one live chart handle.
pub struct ChartSlot<H: ChartHandle> {
    current: Option<H>,
    generation: u64,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<H: ChartHandle> ChartSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&H> {
        self.current.as_ref()
    }

    /// How many charts this slot has constructed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Disposes the current chart (if any), then builds its replacement.
    ///
    /// If construction fails the slot is left empty.
    pub fn replace<B>(&mut self, backend: &mut B, spec: &LineChartSpec) -> Result<&H, UploadError>
    where
        B: ChartBackend<Handle = H>,
    {
        self.dispose();
        let handle = backend.create(spec)?;
        self.generation += 1;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_chart_lifecycle {
            log::info!(
                "📈 Chart #{} created ({} points)",
                self.generation,
                spec.series.len()
            );
        }

        Ok(self.current.insert(handle))
    }

    pub fn dispose(&mut self) {
        if let Some(old) = self.current.take() {
            old.dispose();

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_chart_lifecycle {
                log::info!("🗑️  Chart #{} disposed", self.generation);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live charts so tests can check the one-instance rule.
    pub(crate) struct CountingBackend {
        pub live: Rc<Cell<i32>>,
        pub created: usize,
        pub fail_next: bool,
    }

    pub(crate) struct CountingHandle {
        pub points: usize,
        live: Rc<Cell<i32>>,
    }

    impl ChartHandle for CountingHandle {
        fn dispose(self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl CountingBackend {
        pub(crate) fn new() -> Self {
            Self {
                live: Rc::new(Cell::new(0)),
                created: 0,
                fail_next: false,
            }
        }
    }

    impl ChartBackend for CountingBackend {
        type Handle = CountingHandle;

        fn create(&mut self, spec: &LineChartSpec) -> Result<CountingHandle, UploadError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(UploadError::Chart("canvas unavailable".into()));
            }
            self.created += 1;
            self.live.set(self.live.get() + 1);
            Ok(CountingHandle {
                points: spec.series.len(),
                live: Rc::clone(&self.live),
            })
        }
    }

    #[test]
    fn replace_disposes_before_creating() {
        let mut backend = CountingBackend::new();
        let mut slot = ChartSlot::new();

        slot.replace(&mut backend, &LineChartSpec::default()).unwrap();
        slot.replace(&mut backend, &LineChartSpec::default()).unwrap();
        slot.replace(&mut backend, &LineChartSpec::default()).unwrap();

        assert_eq!(backend.created, 3);
        assert_eq!(backend.live.get(), 1);
        assert_eq!(slot.generation(), 3);
    }

    #[test]
    fn failed_construction_leaves_slot_empty() {
        let mut backend = CountingBackend::new();
        let mut slot = ChartSlot::new();
        slot.replace(&mut backend, &LineChartSpec::default()).unwrap();

        backend.fail_next = true;
        assert!(slot.replace(&mut backend, &LineChartSpec::default()).is_err());
        assert!(slot.get().is_none());
        assert_eq!(backend.live.get(), 0);
    }

    #[test]
    fn dispose_on_empty_slot_is_a_no_op() {
        let mut slot: ChartSlot<CountingHandle> = ChartSlot::new();
        slot.dispose();
        assert!(slot.get().is_none());
    }
}
