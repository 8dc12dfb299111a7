pub mod price_form_view_model;

pub use price_form_view_model::PriceFormViewModel;
