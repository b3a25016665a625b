//! App shell for the predictor form and the backend worker that serves it.

use std::thread;
use std::time::Duration;

use client_core::{
    HttpPredictionClient, PredictionSession, Settings, SubmitResult,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{EmbarkPort, FieldSnapshot, NumericField, PassengerClass, Sex};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

pub struct PredictorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    snapshot: FieldSnapshot,
    loading: bool,
    result: Option<String>,

    status: String,
    status_banner: Option<StatusBanner>,
}

impl PredictorApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            snapshot: FieldSnapshot::default(),
            loading: false,
            result: None,
            status: "Backend worker starting...".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::HealthOk(message) => {
                    self.status = format!("Connected: {message}");
                }
                UiEvent::Prediction(result) => {
                    self.loading = false;
                    self.status_banner = None;
                    self.status = "Prediction received".to_string();
                    self.result = Some(result);
                }
                UiEvent::Error(err) => match err.context() {
                    UiErrorContext::Predict => {
                        self.loading = false;
                        self.result = None;
                        self.status = err.display_message();
                        self.status_banner = Some(StatusBanner {
                            severity: StatusBannerSeverity::Error,
                            message: err.display_message(),
                        });
                    }
                    UiErrorContext::HealthCheck => {
                        // Reachability is informational; never blocks the form.
                        self.status = format!("Service not reachable yet: {}", err.message());
                    }
                    UiErrorContext::BackendStartup => {
                        self.status = err.display_message();
                        self.status_banner = Some(StatusBanner {
                            severity: StatusBannerSeverity::Error,
                            message: err.display_message(),
                        });
                    }
                },
            }
        }
    }

    fn try_predict(&mut self) {
        if self.loading {
            return;
        }

        // Clear stale feedback before the new attempt so it never lingers.
        self.status_banner = None;
        self.result = None;

        let dispatched = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Predict {
                snapshot: self.snapshot.clone(),
            },
            &mut self.status,
        );
        if dispatched {
            self.loading = true;
            self.status = "Predicting...".to_string();
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::new()
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }

    fn show_fields(&mut self, ui: &mut egui::Ui) {
        ui.add_enabled_ui(!self.loading, |ui| {
            combo_field(
                ui,
                "field_pclass",
                "Passenger Class",
                &mut self.snapshot.passenger_class,
                &PassengerClass::ALL,
                PassengerClass::label,
            );
            combo_field(
                ui,
                "field_sex",
                "Sex",
                &mut self.snapshot.sex,
                &Sex::ALL,
                Sex::label,
            );
            combo_field(
                ui,
                "field_embarked",
                "Port of Embarkation",
                &mut self.snapshot.embarked,
                &EmbarkPort::ALL,
                EmbarkPort::label,
            );

            numeric_field(
                ui,
                "field_age",
                NumericField::Age,
                "Enter age (0-100)",
                &mut self.snapshot.age,
            );
            numeric_field(
                ui,
                "field_sibsp",
                NumericField::SiblingsSpouses,
                "Enter number (0-8)",
                &mut self.snapshot.siblings_spouses,
            );
            numeric_field(
                ui,
                "field_parch",
                NumericField::ParentsChildren,
                "Enter number (0-6)",
                &mut self.snapshot.parents_children,
            );
            numeric_field(
                ui,
                "field_fare",
                NumericField::Fare,
                "Enter fare (0-500)",
                &mut self.snapshot.fare,
            );
        });
    }

    fn show_submit_row(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(
            egui::RichText::new(if self.loading {
                "Predicting..."
            } else {
                "Predict Survival"
            })
            .strong()
            .size(16.0),
        )
        .min_size(egui::vec2(ui.available_width(), 40.0));

        if ui.add_enabled(!self.loading, button).clicked() {
            self.try_predict();
        }

        if self.loading {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.small("Waiting for the prediction service...");
            });
        }
    }

    fn show_result(&mut self, ui: &mut egui::Ui) {
        if let Some(result) = self.result.clone() {
            ui.add_space(6.0);
            egui::Frame::new()
                .fill(egui::Color32::from_rgb(47, 92, 59))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 175, 118)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!("Prediction: {result}"))
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                    });
                });
        }
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(360.0, 460.0);
            ui.add_space((avail.y * 0.06).clamp(12.0, 48.0));

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                egui::Frame::new()
                    .fill(ui.visuals().faint_bg_color)
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(20, 18))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 8.0);

                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("🚢").size(24.0));
                            ui.vertical(|ui| {
                                ui.heading("Titanic Survival Predictor");
                                ui.weak("Enter passenger details to predict survival.");
                            });
                        });

                        ui.add_space(8.0);
                        self.show_status_banner(ui);
                        self.show_fields(ui);
                        ui.add_space(10.0);
                        self.show_submit_row(ui);
                        self.show_result(ui);

                        ui.add_space(10.0);
                        ui.separator();
                        ui.horizontal_wrapped(|ui| {
                            ui.small("Status:");
                            ui.small(egui::RichText::new(&self.status).weak());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("⟳ Check service").clicked() {
                                        dispatch_backend_command(
                                            &self.cmd_tx,
                                            BackendCommand::CheckHealth,
                                            &mut self.status,
                                        );
                                    }
                                },
                            );
                        });
                    });
            });
        });
    }
}

fn combo_field<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    value: &mut T,
    options: &[T],
    option_label: fn(T) -> &'static str,
) {
    ui.label(egui::RichText::new(label).strong());
    egui::ComboBox::from_id_salt(id)
        .selected_text(option_label(*value))
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, *option, option_label(*option));
            }
        });
}

fn numeric_field(
    ui: &mut egui::Ui,
    id: &'static str,
    field: NumericField,
    hint: &str,
    value: &mut String,
) {
    ui.label(egui::RichText::new(field.label()).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(hint)
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), 30.0], edit);
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_form(ctx);

        if self.loading {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

pub fn start_backend_bridge(
    settings: Settings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = match HttpPredictionClient::from_settings(&settings) {
                Ok(client) => client,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: {err}"),
                    )));
                    tracing::error!("failed to build prediction client: {err}");
                    return;
                }
            };
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Backend worker ready ({})",
                client.server_url()
            )));

            report_health(&client, &ui_tx).await;

            let mut session = PredictionSession::new(client);
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Predict { snapshot } => {
                        match session.submit(&snapshot).await {
                            SubmitResult::Predicted(response) => {
                                let _ = ui_tx.try_send(UiEvent::Prediction(response.result));
                            }
                            SubmitResult::Failed(err) => {
                                let _ = ui_tx.try_send(UiEvent::Error(
                                    UiError::from_predict_error(UiErrorContext::Predict, &err),
                                ));
                            }
                            SubmitResult::Ignored => {
                                tracing::warn!(
                                    "predict command ignored: request already in flight"
                                );
                            }
                        }
                    }
                    BackendCommand::CheckHealth => {
                        report_health(session.transport(), &ui_tx).await;
                    }
                }
            }
        });
    });
}

async fn report_health(client: &HttpPredictionClient, ui_tx: &Sender<UiEvent>) {
    match client.check_health().await {
        Ok(health) => {
            tracing::info!(message = %health.message, "prediction service reachable");
            let _ = ui_tx.try_send(UiEvent::HealthOk(health.message));
        }
        Err(err) => {
            tracing::warn!("prediction service health probe failed: {err}");
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_predict_error(
                UiErrorContext::HealthCheck,
                &err,
            )));
        }
    }
}
