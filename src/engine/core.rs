use crate::config::DISPLAY;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::AnalysisClient;
use crate::engine::chart_slot::{ChartBackend, ChartSlot};
use crate::engine::error::UploadError;
use crate::engine::messages::{Submission, SubmissionOutcome};
use crate::engine::view_port::ResultView;
use crate::models::{AnalysisResult, AnalysisView};
use crate::utils::app_time::elapsed_ms;

/// Drives one form: file check, hand-off to the network, and the three render steps.
///
/// The controller never awaits while holding UI state. Callers that share it
/// (the browser build keeps it in an `Rc<RefCell<_>>`) call [`Self::begin`],
/// await the request themselves, then call [`Self::complete`]. Only the most
/// recently begun submission may render; older responses are dropped.
pub struct UploadController<B: ChartBackend> {
    backend: B,
    chart: ChartSlot<B::Handle>,
    next_id: u64,
    latest: Option<u64>,
    in_flight: usize,
}

impl<B: ChartBackend> UploadController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            chart: ChartSlot::new(),
            next_id: 0,
            latest: None,
            in_flight: 0,
        }
    }

    /// The live chart, if an analysis has been rendered.
    pub fn chart(&self) -> Option<&B::Handle> {
        self.chart.get()
    }

    /// Number of charts constructed since start-up.
    pub fn charts_created(&self) -> u64 {
        self.chart.generation()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Checks that a file was chosen and issues a ticket for it.
    ///
    /// Without a file the user gets the blocking notice and nothing else happens.
    pub fn begin<U, V>(
        &mut self,
        selected: Option<U>,
        view: &mut V,
    ) -> Result<(Submission, U), UploadError>
    where
        V: ResultView + ?Sized,
    {
        let Some(upload) = selected else {
            log::warn!("⚠️  Submit without a file; nothing sent");
            view.notify(DISPLAY.no_file_notice);
            return Err(UploadError::NoFileSelected);
        };

        self.next_id += 1;
        let submission = Submission::new(self.next_id);
        self.latest = Some(submission.id);
        self.in_flight += 1;
        view.set_busy(true);

        Ok((submission, upload))
    }

    /// Applies the response of a submission started with [`Self::begin`].
    pub fn complete<V>(
        &mut self,
        submission: Submission,
        response: Result<AnalysisResult, UploadError>,
        view: &mut V,
    ) -> SubmissionOutcome
    where
        V: ResultView + ?Sized,
    {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            view.set_busy(false);
        }
        let elapsed = elapsed_ms(submission.started_at());

        if self.latest != Some(submission.id) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_superseded {
                log::info!(
                    "⏭️  Dropping response #{} after {} ms (latest is #{:?})",
                    submission.id,
                    elapsed,
                    self.latest
                );
            }
            return SubmissionOutcome::Superseded { id: submission.id };
        }

        match self.render(response, view) {
            Ok(rows) => {
                log::info!(
                    "✅ Analysis #{} rendered {} rows in {} ms",
                    submission.id,
                    rows,
                    elapsed
                );
                SubmissionOutcome::Rendered { rows }
            }
            Err(error) => {
                log::error!("❌ Analysis #{} failed: {}", submission.id, error);
                view.show_error(&error);
                SubmissionOutcome::Rejected(error)
            }
        }
    }

    /// begin → request → complete, for callers that own the controller outright.
    pub async fn submit<C, V>(
        &mut self,
        client: &C,
        selected: Option<C::Upload>,
        view: &mut V,
    ) -> SubmissionOutcome
    where
        C: AnalysisClient + ?Sized,
        V: ResultView + ?Sized,
    {
        let (submission, upload) = match self.begin(selected, view) {
            Ok(started) => started,
            Err(error) => return SubmissionOutcome::Rejected(error),
        };
        let response = client.analyze(upload).await;
        self.complete(submission, response, view)
    }

    // Nothing is touched until the payload has decoded and validated, so a bad
    // response leaves the previous summary, chart and table in place.
    fn render<V>(
        &mut self,
        response: Result<AnalysisResult, UploadError>,
        view: &mut V,
    ) -> Result<usize, UploadError>
    where
        V: ResultView + ?Sized,
    {
        let result = response?;
        result.validate()?;
        let analysis = AnalysisView::from_result(&result);

        view.show_summary(&analysis.summary);
        let chart = self
            .chart
            .replace(&mut self.backend, &analysis.chart)
            .map(|_| ());
        view.show_history(&analysis.rows);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_view_updates {
            log::info!(
                "Summary: {} | {} | {} rows",
                analysis.summary.trend,
                analysis.summary.slope,
                analysis.rows.len()
            );
        }

        chart?;
        Ok(analysis.rows.len())
    }
}
