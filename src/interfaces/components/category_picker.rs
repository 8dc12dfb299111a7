use crate::domain::vehicle::Categorical;
use eframe::egui;

/// Combo box over every label of a categorical field
pub fn category_picker<T: Categorical>(ui: &mut egui::Ui, label: &str, value: &mut T) {
    ui.label(label);
    egui::ComboBox::from_id_salt(T::FIELD)
        .selected_text(value.label())
        .width(200.0)
        .show_ui(ui, |ui| {
            for option in T::all() {
                ui.selectable_value(value, option, option.label());
            }
        });
}

/// Reference list of `'label' : code` lines for one field
pub fn code_legend<T: Categorical>(ui: &mut egui::Ui, color: egui::Color32) {
    for option in T::all() {
        ui.label(
            egui::RichText::new(format!("  • '{}' : {}", option.label(), option.code()))
                .color(color),
        );
    }
}
