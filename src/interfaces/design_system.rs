use eframe::egui;

/// Light form theme
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(250, 250, 252);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
    pub const BG_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(209, 231, 221); // #D1E7DD
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(240, 242, 246);

    // Accents
    pub const TITLE: egui::Color32 = egui::Color32::from_rgb(255, 99, 71); // #FF6347 (Tomato)
    pub const SECTION_TITLE: egui::Color32 = egui::Color32::from_rgb(255, 87, 51); // #FF5733
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(23, 162, 184); // #17A2B8
    pub const PRICE: egui::Color32 = egui::Color32::from_rgb(0, 123, 255); // #007BFF

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(25, 135, 84);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 53, 69);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(33, 37, 41);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(90);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(206, 212, 218);

    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 5.0;
    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.selection.bg_fill = Self::PRICE.linear_multiply(0.25);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::PRICE);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Green info box used for the field reference
    pub fn highlight_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_HIGHLIGHT)
            .corner_radius(Self::ROUNDING_SMALL)
            .inner_margin(egui::Margin::same(10))
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
