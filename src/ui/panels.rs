use chrono::{DateTime, Local};
use eframe::egui::{Grid, Key, ScrollArea, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::models::{HistoryColumn, HistoryRow, SummaryFields};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    AnalyzeRequested,
}

/// File path field plus the Analyze button (the desktop stand-in for the upload form).
pub struct UploadPanel<'a> {
    path_input: &'a mut String,
    busy: bool,
}

impl<'a> UploadPanel<'a> {
    pub fn new(path_input: &'a mut String, busy: bool) -> Self {
        Self { path_input, busy }
    }
}

impl Panel for UploadPanel<'_> {
    type Event = UploadEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<UploadEvent> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.file_label);
            let response = ui.add(
                TextEdit::singleline(self.path_input)
                    .hint_text(UI_TEXT.file_hint)
                    .desired_width(420.0),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if ui.button(UI_TEXT.analyze_button).clicked() || submitted {
                events.push(UploadEvent::AnalyzeRequested);
            }
            if self.busy {
                ui.spinner();
            }
        });
        events
    }
}

/// Last failure shown under the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLine {
    pub text: String,
    /// Something the user can fix on their side (no file, unreadable file)
    pub user_input: bool,
}

pub struct SummaryPanel<'a> {
    summary: Option<&'a SummaryFields>,
    rendered_at: Option<DateTime<Local>>,
    last_error: Option<&'a ErrorLine>,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(
        summary: Option<&'a SummaryFields>,
        rendered_at: Option<DateTime<Local>>,
        last_error: Option<&'a ErrorLine>,
    ) -> Self {
        Self {
            summary,
            rendered_at,
            last_error,
        }
    }
}

impl Panel for SummaryPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<()> {
        ui.label_header(UI_TEXT.summary_heading);
        ui.add_space(4.0);

        match self.summary {
            Some(summary) => {
                let value = UI_CONFIG.colors.value;
                ui.metric(UI_TEXT.trend_label, &summary.trend, UI_CONFIG.colors.heading);
                ui.label(&summary.slope);
                ui.metric(UI_TEXT.highest_label, &summary.highest, value);
                ui.metric(UI_TEXT.lowest_label, &summary.lowest, value);
                ui.metric(UI_TEXT.average_label, &summary.average, value);
                ui.metric(UI_TEXT.count_label, &summary.count, value);
            }
            None => ui.label_subdued(UI_TEXT.no_analysis_yet),
        }

        if let Some(at) = self.rendered_at {
            ui.add_space(4.0);
            ui.label_subdued(format!("{} {}", UI_TEXT.rendered_at_label, at.format("%H:%M:%S")));
        }
        if let Some(error) = self.last_error {
            ui.add_space(8.0);
            if error.user_input {
                ui.label_warning(&error.text);
            } else {
                ui.label_error(&error.text);
            }
        }
        Vec::new()
    }
}

pub struct HistoryPanel<'a> {
    rows: &'a [HistoryRow],
}

impl<'a> HistoryPanel<'a> {
    pub fn new(rows: &'a [HistoryRow]) -> Self {
        Self { rows }
    }
}

impl Panel for HistoryPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<()> {
        ui.label_header(UI_TEXT.history_heading);
        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            Grid::new("history_table").striped(true).num_columns(3).show(ui, |ui| {
                for column in HistoryColumn::iter() {
                    ui.strong(column.to_string());
                }
                ui.end_row();

                for row in self.rows {
                    for column in HistoryColumn::iter() {
                        ui.monospace(row.cell(column));
                    }
                    ui.end_row();
                }
            });
        });
        Vec::new()
    }
}
