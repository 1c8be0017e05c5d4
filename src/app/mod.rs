use crate::model::{AppState, FormDocument, PublishedQuiz};
use crate::net::SubmitOutcome;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod fetch;
pub mod navigation;
pub mod submit;

/// Estado del modo "responder quiz": el primer quiz del listado y la
/// opción elegida por pregunta. Vive solo durante la sesión.
#[derive(Default)]
pub struct TakeState {
    pub quiz: Option<PublishedQuiz>,
    pub seleccion: HashMap<i64, i64>,
    pub cargando: bool,
}

#[derive(Serialize, Deserialize)]
pub struct BuilderApp {
    /// Borrador del quiz en construcción; se persiste entre sesiones.
    pub doc: FormDocument,
    pub message: String,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub confirm_clear: bool,
    #[serde(skip)]
    pub submit_rx: Option<Receiver<SubmitOutcome>>,
    #[serde(skip)]
    pub fetch_rx: Option<Receiver<Result<Vec<PublishedQuiz>, String>>>,
    #[serde(skip)]
    pub take: TakeState,
}

impl BuilderApp {
    pub fn new() -> Self {
        Self {
            doc: FormDocument::new(),
            message: String::new(),
            state: AppState::Welcome,
            confirm_clear: false,
            submit_rx: None,
            fetch_rx: None,
            take: TakeState::default(),
        }
    }

    pub fn is_submit_pending(&self) -> bool {
        self.submit_rx.is_some()
    }
}

impl Default for BuilderApp {
    fn default() -> Self {
        Self::new()
    }
}
