use chrono::{DateTime, Local};
use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::data::{AnalysisClient, HttpAnalysisClient};
use crate::engine::{ResultView, Submission, UploadController, UploadError};
use crate::models::{AnalysisResult, HistoryRow, SummaryFields};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::panels::{ErrorLine, HistoryPanel, Panel, SummaryPanel, UploadEvent, UploadPanel};
use crate::ui::plot_view::{PlotBackend, show_price_chart};

/// Start-up options handed over from the command line.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub server: String,
    pub initial_file: Option<PathBuf>,
    pub analyze_on_start: bool,
}

/// What the window remembers between runs.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    last_path: String,
}

/// Everything the controller writes; the panels read it back each frame.
#[derive(Default)]
pub struct ViewState {
    pub summary: Option<SummaryFields>,
    pub rows: Vec<HistoryRow>,
    pub notice: Option<String>,
    pub last_error: Option<ErrorLine>,
    pub busy: bool,
    pub rendered_at: Option<DateTime<Local>>,
}

impl ResultView for ViewState {
    fn notify(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }

    fn show_summary(&mut self, summary: &SummaryFields) {
        self.summary = Some(summary.clone());
        self.last_error = None;
    }

    fn show_history(&mut self, rows: &[HistoryRow]) {
        self.rows = rows.to_vec();
    }

    fn show_error(&mut self, error: &UploadError) {
        self.last_error = Some(ErrorLine {
            text: error.to_string(),
            user_input: error.is_user_input(),
        });
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}

/// A blank path field means no file was chosen.
fn selected_file(path_input: &str) -> Option<PathBuf> {
    let trimmed = path_input.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

struct PendingRequest {
    submission: Submission,
    promise: Promise<Result<AnalysisResult, UploadError>>,
}

pub struct TrendViewerApp {
    controller: UploadController<PlotBackend>,
    view: ViewState,
    client: Arc<HttpAnalysisClient>,
    runtime: tokio::runtime::Handle,
    path_input: String,
    pending: Vec<PendingRequest>,
}

impl TrendViewerApp {
    pub fn new(
        cc: &eframe::CreationContext,
        settings: AppSettings,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let persisted: PersistedState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let path_input = settings
            .initial_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or(persisted.last_path);

        let mut app = Self {
            controller: UploadController::new(PlotBackend::default()),
            view: ViewState::default(),
            client: Arc::new(HttpAnalysisClient::new(&settings.server)),
            runtime,
            path_input,
            pending: Vec::new(),
        };
        log::info!("Posting uploads to {}", app.client.url());

        if settings.analyze_on_start {
            app.start_analysis();
        }
        app
    }

    fn start_analysis(&mut self) {
        let selected = selected_file(&self.path_input);
        let Ok((submission, path)) = self.controller.begin(selected, &mut self.view) else {
            return;
        };

        let client = Arc::clone(&self.client);
        let runtime = self.runtime.clone();
        let promise = Promise::spawn_thread("analyze_upload", move || {
            runtime.block_on(client.analyze(path))
        });
        self.pending.push(PendingRequest {
            submission,
            promise,
        });
    }

    fn poll_pending(&mut self, ctx: &egui::Context) {
        let mut still_pending = Vec::new();
        for request in std::mem::take(&mut self.pending) {
            match request.promise.try_take() {
                Ok(response) => {
                    let outcome =
                        self.controller
                            .complete(request.submission, response, &mut self.view);
                    if outcome.is_rendered() {
                        self.view.rendered_at = Some(Local::now());
                    }
                }
                Err(promise) => still_pending.push(PendingRequest {
                    submission: request.submission,
                    promise,
                }),
            }
        }
        self.pending = still_pending;

        if !self.pending.is_empty() {
            ctx.request_repaint();
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.view.notice.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(UI_TEXT.notice_title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button(UI_TEXT.notice_ok).clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.view.notice = None;
        }
    }
}

impl eframe::App for TrendViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_pending(ctx);

        egui::TopBottomPanel::top("upload_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            let events = UploadPanel::new(&mut self.path_input, self.view.busy).render(ui);
            ui.add_space(4.0);
            for event in events {
                match event {
                    UploadEvent::AnalyzeRequested => self.start_analysis(),
                }
            }
        });

        egui::SidePanel::left("summary_panel")
            .exact_width(UI_CONFIG.side_panel_width)
            .show(ctx, |ui| {
                SummaryPanel::new(
                    self.view.summary.as_ref(),
                    self.view.rendered_at,
                    self.view.last_error.as_ref(),
                )
                .render(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(chart) = self.controller.chart() {
                show_price_chart(ui, chart);
                ui.separator();
            }
            HistoryPanel::new(&self.view.rows).render(ui);
        });

        self.show_notice(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            last_path: self.path_input.clone(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DISPLAY;

    #[test]
    fn view_state_clears_error_on_new_summary() {
        let mut view = ViewState::default();
        view.show_error(&UploadError::Network("timed out".into()));
        assert_eq!(
            view.last_error,
            Some(ErrorLine {
                text: "Request failed: timed out".into(),
                user_input: false,
            })
        );

        view.show_summary(&SummaryFields::default());
        assert!(view.last_error.is_none());
    }

    #[test]
    fn unreadable_file_is_flagged_as_user_input() {
        let mut view = ViewState::default();
        view.show_error(&UploadError::FileRead("missing.csv: not found".into()));
        let line = view.last_error.expect("error recorded");
        assert!(line.user_input);
        assert_eq!(line.text, "Could not read file: missing.csv: not found");
    }

    #[test]
    fn empty_path_counts_as_no_file() {
        let mut controller = UploadController::new(PlotBackend::default());
        let mut view = ViewState::default();
        assert_eq!(
            selected_file(" data/prices.csv "),
            Some(PathBuf::from("data/prices.csv"))
        );

        assert!(controller.begin(selected_file("   "), &mut view).is_err());
        assert_eq!(view.notice.as_deref(), Some(DISPLAY.no_file_notice));
        assert!(!view.busy);
    }
}
