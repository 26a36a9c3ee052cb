use catalog::{rows, Catalog, EditorEvent, EditorState, ProductField, COLUMNS};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::controller::events::{err_label, UiError, UiEvent};
use crate::controller::orchestration::dispatch_ui_event;
use crate::controller::reducer::{reduce, ViewModel};

#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub empty_catalog: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            title: "NeoFit".to_string(),
            window_size: [960.0, 640.0],
            empty_catalog: false,
        }
    }
}

impl StartupConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("window title must not be blank");
        }
        let [width, height] = self.window_size;
        if !(width.is_finite() && height.is_finite()) || width < 640.0 || height < 420.0 {
            anyhow::bail!("window size must be at least 640x420, got {width}x{height}");
        }
        Ok(())
    }

    pub fn initial_catalog(&self) -> Catalog {
        if self.empty_catalog {
            Catalog::empty()
        } else {
            Catalog::seeded()
        }
    }
}

const FORM_FIELDS: [ProductField; 6] = [
    ProductField::ProductId,
    ProductField::Name,
    ProductField::Design,
    ProductField::Color,
    ProductField::Size,
    ProductField::Material,
];

pub struct CatalogEditorApp {
    title: String,
    model: ViewModel,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    status_banner: Option<UiError>,
}

impl CatalogEditorApp {
    pub fn new(startup: &StartupConfig, ui_tx: Sender<UiEvent>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            title: startup.title.clone(),
            model: ViewModel::new(EditorState::with_catalog(startup.initial_catalog())),
            ui_tx,
            ui_rx,
            status_banner: None,
        }
    }

    pub fn with_status_banner(mut self, banner: Option<UiError>) -> Self {
        self.status_banner = banner;
        self
    }

    pub fn model(&self) -> &ViewModel {
        &self.model
    }

    fn dispatch(&mut self, event: impl Into<UiEvent>) {
        dispatch_ui_event(&self.ui_tx, event.into(), &mut self.status_banner);
    }

    /// Drains queued events in arrival order, each fully applied before the next.
    pub fn process_ui_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model = reduce(&self.model, event);
            processed += 1;
        }
        processed
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(111, 53, 53))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{}: {}",
                                err_label(banner.category()),
                                banner.message()
                            ))
                            .color(egui::Color32::WHITE),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn form_text_field(
        &mut self,
        ui: &mut egui::Ui,
        field: ProductField,
        submit_requested: &mut bool,
    ) {
        let mut value = self.model.editor.draft().field_text(field);
        let edit = egui::TextEdit::singleline(&mut value)
            .id_salt(("product_form", field.label()))
            .hint_text(field.label())
            .desired_width(f32::INFINITY);
        let response = ui.add_sized([ui.available_width(), 30.0], edit);

        if response.changed() {
            self.dispatch(EditorEvent::SetField { field, value });
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            *submit_requested = true;
        }
    }

    fn form_price_field(&mut self, ui: &mut egui::Ui) {
        let mut price = self.model.editor.draft().price;
        let response = ui.add(
            egui::DragValue::new(&mut price)
                .speed(1.0)
                .prefix(format!("{}: ", ProductField::Price.label())),
        );
        if response.changed() {
            self.dispatch(EditorEvent::SetField {
                field: ProductField::Price,
                value: price.to_string(),
            });
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let mut submit_requested = false;

        egui::Grid::new("product_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (index, field) in FORM_FIELDS.into_iter().enumerate() {
                    self.form_text_field(ui, field, &mut submit_requested);
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
                self.form_price_field(ui);
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let label = self.model.editor.submit_label();
            if ui
                .add_sized([160.0, 32.0], egui::Button::new(label))
                .clicked()
            {
                submit_requested = true;
            }
            if self.model.editor.mode().is_edit() && ui.button("Cancel").clicked() {
                self.dispatch(EditorEvent::Clear);
            }
        });

        if submit_requested {
            self.dispatch(EditorEvent::Submit);
        }
    }

    fn show_table(&mut self, ui: &mut egui::Ui) {
        let mut pending = Vec::new();

        egui::ScrollArea::both().show(ui, |ui| {
            egui::Grid::new("product_table")
                .num_columns(COLUMNS.len())
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for column in COLUMNS {
                        ui.label(egui::RichText::new(column).strong());
                    }
                    ui.end_row();

                    for row in rows(self.model.editor.catalog()) {
                        for cell in row.cells() {
                            ui.label(cell);
                        }
                        // Index breaks ties when ids collide.
                        ui.push_id((row.key().as_str(), row.index()), |ui| {
                            ui.horizontal(|ui| {
                                if ui.button("Edit").clicked() {
                                    pending.push(row.edit_action());
                                }
                                if ui.button("Delete").clicked() {
                                    pending.push(row.delete_action());
                                }
                            });
                        });
                        ui.end_row();
                    }
                });
        });

        for event in pending {
            self.dispatch(event);
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.model.alert.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("validation_alert")).show(ctx, |ui| {
            ui.set_width(280.0);
            ui.heading(err_label(alert.category()));
            ui.label(alert.message());
            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button("OK").clicked()
            })
            .inner
        });

        if modal.inner || modal.should_close() {
            self.dispatch(UiEvent::DismissAlert);
        }
    }
}

impl eframe::App for CatalogEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.process_ui_events() > 0 {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new(&self.title).size(28.0).strong());
            });
            ui.add_space(12.0);
            self.show_status_banner(ui);
            self.show_form(ui);
            ui.separator();
            self.show_table(ui);
        });

        self.show_alert(ctx);

        if !self.ui_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
