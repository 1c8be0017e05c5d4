use super::*;
use crate::net;
use crate::wire::encode_document;

impl BuilderApp {
    /// Intercepta el envío: valida, codifica y lanza el POST en un hilo
    /// aparte. El resultado llega por canal y se aplica en `poll`.
    pub fn publicar_formulario(&mut self) {
        if self.is_submit_pending() {
            self.message = "⏳ Ya hay un envío en progreso. Espera el resultado.".into();
            return;
        }

        if let Err(problema) = self.validar_formulario() {
            self.message = problema;
            return;
        }

        let mut pairs = encode_document(&self.doc);
        if let Some(token) = net::csrf_token() {
            // El token es opaco: se reenvía tal cual, delante del resto.
            pairs.insert(0, ("csrf_token".to_string(), token));
        }

        let endpoint = net::add_quiz_endpoint();
        let (tx, rx) = std::sync::mpsc::channel();
        self.submit_rx = Some(rx);
        self.state = AppState::Submitting;
        self.message = "⏳ Publicando quiz...".into();

        std::thread::spawn(move || {
            let outcome = net::enviar_formulario(&endpoint, &pairs);
            let _ = tx.send(outcome);
        });
    }

    /// Se llama en cada frame; aplica el resultado del envío cuando el
    /// hilo termina. Con éxito se vacía el borrador y se vuelve al menú;
    /// con fallo el formulario queda intacto para reintentar.
    pub fn poll_submit_result(&mut self) {
        let maybe_outcome = self
            .submit_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(outcome) = maybe_outcome {
            self.submit_rx = None;
            match &outcome {
                SubmitOutcome::Accepted => {
                    log::info!("quiz publicado");
                    self.doc = FormDocument::new();
                    self.state = AppState::Welcome;
                }
                SubmitOutcome::Rejected { status, body } => {
                    log::warn!("el servidor rechazó el quiz: HTTP {status}: {}", body.trim());
                    self.state = AppState::Builder;
                }
                SubmitOutcome::TransportError { message } => {
                    log::error!("fallo de red al publicar el quiz: {message}");
                    self.state = AppState::Builder;
                }
            }
            self.message = outcome.mensaje();
        }
    }
}
