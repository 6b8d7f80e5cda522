mod central_panel;
mod library_panel;
mod property_panel;
mod status_bar;
mod toolbar;

pub use central_panel::central_panel;
pub use library_panel::library_panel;
pub use property_panel::property_panel;
pub use status_bar::status_bar;
pub use toolbar::toolbar;
