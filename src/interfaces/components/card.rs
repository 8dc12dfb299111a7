use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Titled section container used for each block of the form
pub struct Card {
    title: Option<String>,
    title_color: egui::Color32,
    highlight: bool,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            title_color: DesignSystem::SECTION_TITLE,
            highlight: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_color(mut self, color: egui::Color32) -> Self {
        self.title_color = color;
        self
    }

    /// Use the green reference-box background
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let frame = if self.highlight {
            DesignSystem::highlight_frame()
        } else {
            DesignSystem::card_frame()
        };

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());

            if let Some(title) = self.title {
                ui.label(
                    egui::RichText::new(title)
                        .size(20.0)
                        .color(self.title_color)
                        .strong(),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            add_contents(ui)
        })
    }
}
