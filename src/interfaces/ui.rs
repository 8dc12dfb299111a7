use crate::application::feedback::FeedbackDesk;
use crate::application::pricing_service::PredictionService;
use crate::domain::vehicle::{Fuel, Owner, SellerType, Transmission, YEAR_MAX, YEAR_MIN};
use crate::interfaces::components::{Card, category_picker, code_legend};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::PriceFormViewModel;
use eframe::egui;

pub const APP_TITLE: &str = "Car Price Prediction Web App";

/// Single-page price form
pub struct PriceFormApp {
    service: PredictionService,
    feedback: FeedbackDesk,
    form: PriceFormViewModel,
}

impl PriceFormApp {
    pub fn new(service: PredictionService, currency_symbol: impl Into<String>) -> Self {
        Self {
            service,
            feedback: FeedbackDesk::new(),
            form: PriceFormViewModel::new(currency_symbol),
        }
    }

    fn render_reference(&self, ui: &mut egui::Ui) {
        Card::new()
            .title("Input Variables and Additional Information")
            .highlight(true)
            .show(ui, |ui| {
                let info = |ui: &mut egui::Ui, name: &str, text: &str| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(name).strong().color(DesignSystem::INFO));
                        ui.label(egui::RichText::new(text).color(DesignSystem::INFO));
                    });
                };

                info(ui, "Year:", "Enter the year of the car model");
                info(ui, "Km-driven:", "Enter the total kilometers driven by the car");
                info(ui, "Fuel:", "Select the type of fuel used");
                code_legend::<Fuel>(ui, DesignSystem::INFO);
                info(ui, "Seller-type:", "Select the type of seller");
                code_legend::<SellerType>(ui, DesignSystem::INFO);
                info(ui, "Transmission:", "Select the transmission type");
                code_legend::<Transmission>(ui, DesignSystem::INFO);
                info(ui, "Owner:", "Select the number of previous owners");
                code_legend::<Owner>(ui, DesignSystem::INFO);
            });
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.form;

        egui::Grid::new("car_inputs")
            .num_columns(2)
            .spacing([DesignSystem::SPACING_LARGE, DesignSystem::SPACING_SMALL])
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label("Year");
                    ui.add(
                        egui::DragValue::new(&mut form.year)
                            .range(YEAR_MIN..=YEAR_MAX)
                            .speed(1),
                    );
                });
                ui.vertical(|ui| {
                    ui.label("Km-driven");
                    ui.add(egui::DragValue::new(&mut form.km_driven).speed(100));
                });
                ui.end_row();

                ui.vertical(|ui| category_picker(ui, "Fuel", &mut form.fuel));
                ui.vertical(|ui| category_picker(ui, "Seller-type", &mut form.seller_type));
                ui.end_row();

                ui.vertical(|ui| category_picker(ui, "Transmission", &mut form.transmission));
                ui.vertical(|ui| category_picker(ui, "Owner", &mut form.owner));
                ui.end_row();
            });
    }

    fn render_prediction(&mut self, ui: &mut egui::Ui) {
        if ui
            .add(egui::Button::new("Predict Car Price").min_size(egui::vec2(180.0, 32.0)))
            .clicked()
        {
            self.form.request_prediction(&self.service);
        }

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.form.price_banner())
                    .size(22.0)
                    .strong()
                    .color(DesignSystem::PRICE),
            );
            if let Some(message) = self.form.last_error() {
                ui.label(egui::RichText::new(message).color(DesignSystem::DANGER));
            }
        });
    }

    fn render_feedback(&mut self, ui: &mut egui::Ui) {
        Card::new()
            .title("Feedback")
            .title_color(DesignSystem::TEXT_PRIMARY)
            .show(ui, |ui| {
                ui.label("Please share your feedback:");
                ui.add(
                    egui::TextEdit::multiline(&mut self.form.feedback_text)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);

                if ui.button("Submit Feedback").clicked() {
                    self.form.submit_feedback(&self.feedback);
                }
                if let Some(notice) = self.form.feedback_notice() {
                    ui.label(egui::RichText::new(notice).color(DesignSystem::SUCCESS));
                }
            });
    }
}

impl eframe::App for PriceFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(APP_TITLE)
                                    .size(30.0)
                                    .strong()
                                    .color(DesignSystem::TITLE),
                            );
                            ui.label(
                                egui::RichText::new(format!("Model: {}", self.service.model_name()))
                                    .small()
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                        });
                        ui.add_space(DesignSystem::SPACING_MEDIUM);

                        self.render_reference(ui);
                        ui.add_space(DesignSystem::SPACING_MEDIUM);

                        Card::new().show(ui, |ui| {
                            self.render_inputs(ui);
                            ui.add_space(DesignSystem::SPACING_MEDIUM);
                            self.render_prediction(ui);
                        });
                        ui.add_space(DesignSystem::SPACING_MEDIUM);

                        self.render_feedback(ui);
                    });
            });
    }
}
