use super::*;
use crate::net;

impl BuilderApp {
    /// Lanza la descarga del listado si no hay otra en curso. Solo se
    /// conserva el primer quiz del array; el resto se ignora.
    pub fn iniciar_descarga_quizzes(&mut self) {
        if self.fetch_rx.is_some() {
            return;
        }

        self.take = TakeState {
            cargando: true,
            ..TakeState::default()
        };

        let endpoint = net::quizzes_endpoint();
        let (tx, rx) = std::sync::mpsc::channel();
        self.fetch_rx = Some(rx);

        std::thread::spawn(move || {
            let resultado = net::descargar_quizzes(&endpoint).map_err(|e| e.to_string());
            let _ = tx.send(resultado);
        });
    }

    /// Cualquier fallo se registra y el área de quiz queda vacía, sin
    /// mensaje para el usuario.
    pub fn poll_fetch_result(&mut self) {
        let maybe_resultado = self
            .fetch_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(resultado) = maybe_resultado {
            self.fetch_rx = None;
            self.take.cargando = false;
            match resultado {
                Ok(quizzes) => {
                    if quizzes.is_empty() {
                        log::info!("el servidor no tiene quizzes publicados");
                    }
                    self.take.quiz = quizzes.into_iter().next();
                }
                Err(err) => {
                    log::error!("error descargando quizzes: {err}");
                }
            }
        }
    }

    pub fn seleccionar_opcion(&mut self, pregunta_id: i64, opcion_id: i64) {
        self.take.seleccion.insert(pregunta_id, opcion_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PublishedQuestion, PublishedQuiz};
    use std::sync::mpsc::channel;

    #[test]
    fn only_first_quiz_of_listing_is_kept() {
        let mut app = BuilderApp::new();
        app.take.cargando = true;
        let (tx, rx) = channel();
        app.fetch_rx = Some(rx);

        let primero = PublishedQuiz {
            id: 1,
            title: "primero".into(),
            questions: vec![PublishedQuestion {
                id: 10,
                text: "¿?".into(),
                options: vec![],
            }],
        };
        let segundo = PublishedQuiz {
            id: 2,
            title: "segundo".into(),
            questions: vec![],
        };
        tx.send(Ok(vec![primero, segundo])).unwrap();

        app.poll_fetch_result();

        assert!(!app.take.cargando);
        assert_eq!(app.take.quiz.as_ref().unwrap().id, 1);
        assert!(app.fetch_rx.is_none());
    }

    #[test]
    fn fetch_failure_leaves_quiz_area_empty() {
        let mut app = BuilderApp::new();
        app.take.cargando = true;
        let (tx, rx) = channel();
        app.fetch_rx = Some(rx);
        tx.send(Err("connection refused".into())).unwrap();

        app.poll_fetch_result();

        assert!(!app.take.cargando);
        assert!(app.take.quiz.is_none());
        // sin mensaje para el usuario
        assert!(app.message.is_empty());
    }

    #[test]
    fn seleccionar_opcion_replaces_previous_answer() {
        let mut app = BuilderApp::new();
        app.seleccionar_opcion(10, 100);
        app.seleccionar_opcion(10, 101);
        assert_eq!(app.take.seleccion.get(&10), Some(&101));
    }
}
