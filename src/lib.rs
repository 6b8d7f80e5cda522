#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod id_generator;
pub mod page;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod util;
pub mod widgets;

pub use app::EditorApp;
pub use command::{Command, History};
pub use config::EditorConfig;
pub use document::Document;
pub use element::{Element, ElementId, ElementKind, ElementPatch};
pub use error::TransitionError;
pub use page::{PageSettings, PageSettingsPatch};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState, EditorStore};
