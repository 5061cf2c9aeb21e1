use chrono::{Local, NaiveDate};
use crossbeam_channel::Receiver;
use eframe::egui;
use egui_extras::DatePickerButton;
use reservations::{EventType, FormDraft, ReservationStore, StoreEvent, Warning};

use crate::controller::events::UiEvent;
use crate::controller::orchestration::submit_draft;
use crate::ui::table::RowCache;

pub const WINDOW_TITLE: &str = "Gestion Salle des Fêtes - Projet BUT 1";
const HEADING: &str = "Planning des Réservations";
const FIELD_WIDTH: f32 = 150.0;
const PICKED_DATE_FORMAT: &str = "%d/%m/%Y";
// Contains no chrono specifier, so the button shows it verbatim.
const NO_DATE_LABEL: &str = "Choisir une date";

pub struct HallApp {
    store: ReservationStore,
    store_rx: Receiver<StoreEvent>,
    rows: RowCache,
    draft: FormDraft,
    // Calendar cursor for the picker; only `draft.date` counts as a chosen date.
    picker_date: NaiveDate,
    warning: Option<Warning>,
    pending: Vec<UiEvent>,
    status: String,
}

impl HallApp {
    pub fn new() -> Self {
        let mut store = ReservationStore::new();
        let store_rx = store.subscribe();
        Self {
            store,
            store_rx,
            rows: RowCache::default(),
            draft: FormDraft::default(),
            picker_date: Local::now().date_naive(),
            warning: None,
            pending: Vec::new(),
            status: "Aucune réservation".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        for event in std::mem::take(&mut self.pending) {
            match event {
                UiEvent::SubmitRequested => {
                    // A visible warning blocks the form until it is dismissed.
                    if self.warning.is_some() {
                        continue;
                    }
                    self.warning = submit_draft(&mut self.store, &mut self.draft, &mut self.status);
                }
                UiEvent::DatePicked(date) => {
                    self.picker_date = date;
                    self.draft.date = Some(date);
                }
                UiEvent::WarningDismissed => self.warning = None,
            }
        }
    }

    fn process_store_events(&mut self) {
        while let Ok(event) = self.store_rx.try_recv() {
            self.rows.apply(event, &self.store);
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        ui.add_enabled_ui(self.warning.is_none(), |ui| {
            ui.horizontal(|ui| {
                let name = ui.add(
                    egui::TextEdit::singleline(&mut self.draft.name)
                        .id_salt("client_name")
                        .hint_text("Nom du client")
                        .desired_width(FIELD_WIDTH),
                );
                let date_format = if self.draft.date.is_some() {
                    PICKED_DATE_FORMAT
                } else {
                    NO_DATE_LABEL
                };
                let picker = ui.add(
                    DatePickerButton::new(&mut self.picker_date)
                        .id_salt("event_date")
                        .format(date_format),
                );
                if picker.changed() {
                    self.pending.push(UiEvent::DatePicked(self.picker_date));
                }
                if ui.small_button("Aujourd'hui").clicked() {
                    self.pending
                        .push(UiEvent::DatePicked(Local::now().date_naive()));
                }

                egui::ComboBox::from_id_salt("event_type")
                    .selected_text(self.draft.event_type.label())
                    .show_ui(ui, |ui| {
                        for kind in EventType::ALL {
                            ui.selectable_value(&mut self.draft.event_type, kind, kind.label());
                        }
                    });

                let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                let submitted_by_enter = enter_pressed && name.lost_focus();
                if ui.button("Ajouter la réservation").clicked() || submitted_by_enter {
                    self.pending.push(UiEvent::SubmitRequested);
                }
            });
        });
    }

    fn show_warning_window(&mut self, ctx: &egui::Context) {
        let Some(warning) = self.warning else {
            return;
        };

        egui::Window::new(warning.title)
            .id(egui::Id::new("validation_warning"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚠").size(20.0));
                    ui.label(warning.message);
                });
                ui.add_space(6.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        self.pending.push(UiEvent::WarningDismissed);
                    }
                });
            });
    }
}

impl eframe::App for HallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.process_store_events();

        egui::TopBottomPanel::bottom("reservation_form")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                self.show_form(ui);
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    ui.small("Statut :");
                    ui.small(egui::RichText::new(&self.status).weak());
                });
                ui.add_space(6.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.label(egui::RichText::new(HEADING).strong());
            ui.add_space(10.0);
            self.rows.show(ui);
        });

        self.show_warning_window(ctx);

        if !self.pending.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HallApp;
    use crate::controller::events::UiEvent;
    use chrono::NaiveDate;
    use reservations::EventType;

    fn run_frame_logic(app: &mut HallApp) {
        app.process_ui_events();
        app.process_store_events();
    }

    #[test]
    fn submit_event_adds_a_row_and_clears_the_form() {
        let mut app = HallApp::new();
        app.draft.name = "Alice Dupont".to_string();
        app.pending.push(UiEvent::DatePicked(
            NaiveDate::from_ymd_opt(2025, 6, 14).expect("date"),
        ));
        app.pending.push(UiEvent::SubmitRequested);

        run_frame_logic(&mut app);

        assert_eq!(app.rows.rows().len(), 1);
        assert_eq!(
            app.rows.rows()[0],
            [
                "Alice Dupont".to_string(),
                "2025-06-14".to_string(),
                "Mariage".to_string()
            ]
        );
        assert!(app.draft.name.is_empty());
        assert_eq!(app.draft.date, None);
        assert_eq!(app.draft.event_type, EventType::Wedding);
        assert!(app.warning.is_none());
    }

    #[test]
    fn invalid_submit_shows_warning_and_blocks_until_dismissed() {
        let mut app = HallApp::new();
        app.draft.name = "Bob".to_string();
        app.draft.event_type = EventType::Birthday;
        app.pending.push(UiEvent::SubmitRequested);
        run_frame_logic(&mut app);

        let warning = app.warning.expect("warning shown");
        assert_eq!(warning.title, "Erreur");
        assert!(app.rows.rows().is_empty());

        app.pending.push(UiEvent::DatePicked(
            NaiveDate::from_ymd_opt(2025, 6, 15).expect("date"),
        ));
        app.pending.push(UiEvent::SubmitRequested);
        run_frame_logic(&mut app);
        assert!(app.rows.rows().is_empty());

        app.pending.push(UiEvent::WarningDismissed);
        app.pending.push(UiEvent::SubmitRequested);
        run_frame_logic(&mut app);
        assert!(app.warning.is_none());
        assert_eq!(app.rows.rows().len(), 1);
        assert_eq!(app.rows.rows()[0][2], "Anniversaire");
    }

    #[test]
    fn calendar_cursor_alone_is_not_a_chosen_date() {
        let mut app = HallApp::new();
        app.draft.name = "Chloé".to_string();
        assert_eq!(app.draft.date, None);

        app.pending.push(UiEvent::SubmitRequested);
        run_frame_logic(&mut app);
        assert!(app.warning.is_some());
        assert!(app.rows.rows().is_empty());

        let picked = NaiveDate::from_ymd_opt(2025, 12, 24).expect("date");
        app.pending.push(UiEvent::WarningDismissed);
        app.pending.push(UiEvent::DatePicked(picked));
        run_frame_logic(&mut app);
        assert_eq!(app.picker_date, picked);
        assert_eq!(app.draft.date, Some(picked));

        app.pending.push(UiEvent::SubmitRequested);
        run_frame_logic(&mut app);
        assert_eq!(app.rows.rows()[0][1], "2025-12-24");
        assert_eq!(app.draft.date, None);
    }
}
