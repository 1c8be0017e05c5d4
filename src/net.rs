use crate::model::PublishedQuiz;

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Resultado de un envío del formulario. Solo distingue lo que la UI
/// necesita: aceptado, rechazado por el servidor o fallo de transporte.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { status: u16, body: String },
    TransportError { message: String },
}

impl SubmitOutcome {
    /// Mensaje único que se enseña al usuario.
    pub fn mensaje(&self) -> String {
        match self {
            SubmitOutcome::Accepted => "✅ Quiz publicado correctamente.".to_string(),
            SubmitOutcome::Rejected { status, body } => {
                if body.trim().is_empty() {
                    format!("❌ El servidor rechazó el formulario (HTTP {status}).")
                } else {
                    format!(
                        "❌ El servidor rechazó el formulario (HTTP {status}): {}",
                        body.trim()
                    )
                }
            }
            SubmitOutcome::TransportError { message } => {
                format!("❌ No se pudo conectar con el servidor: {message}")
            }
        }
    }
}

fn trim_trailing_slashes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed == "/" {
        return trimmed.to_string();
    }
    trimmed.trim_end_matches('/').to_string()
}

pub fn join_endpoint(base: &str, path: &str) -> String {
    let base = trim_trailing_slashes(base);
    if base.is_empty() || base == "/" {
        path.to_string()
    } else {
        format!("{base}{path}")
    }
}

/// Base del servidor, configurable con `QUIZ_MAKER_SERVER`.
pub fn server_base() -> String {
    std::env::var("QUIZ_MAKER_SERVER")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string())
}

pub fn add_quiz_endpoint() -> String {
    join_endpoint(&server_base(), "/add_quiz")
}

pub fn quizzes_endpoint() -> String {
    join_endpoint(&server_base(), "/get_quizzes")
}

/// Token CSRF opaco opcional; si existe se reenvía tal cual.
pub fn csrf_token() -> Option<String> {
    std::env::var("QUIZ_MAKER_CSRF_TOKEN")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// POST del formulario codificado. Cualquier 2xx cuenta como aceptado;
/// el cuerpo de la respuesta no se interpreta.
pub fn enviar_formulario(endpoint: &str, pairs: &[(String, String)]) -> SubmitOutcome {
    let client = reqwest::blocking::Client::new();
    match client.post(endpoint).form(pairs).send() {
        Ok(response) if response.status().is_success() => SubmitOutcome::Accepted,
        Ok(response) => {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            SubmitOutcome::Rejected { status, body }
        }
        Err(err) => SubmitOutcome::TransportError {
            message: err.to_string(),
        },
    }
}

/// GET del listado de quizzes publicados.
pub fn descargar_quizzes(
    endpoint: &str,
) -> Result<Vec<PublishedQuiz>, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::new();
    let response = client.get(endpoint).send()?;
    if !response.status().is_success() {
        return Err(format!("el servidor devolvió HTTP {}", response.status()).into());
    }
    Ok(response.json::<Vec<PublishedQuiz>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_endpoint_normalizes_trailing_slash() {
        assert_eq!(
            join_endpoint("http://127.0.0.1:5000/", "/add_quiz"),
            "http://127.0.0.1:5000/add_quiz"
        );
        assert_eq!(
            join_endpoint("http://quiz.example//", "/get_quizzes"),
            "http://quiz.example/get_quizzes"
        );
    }

    #[test]
    fn join_endpoint_keeps_clean_base() {
        assert_eq!(
            join_endpoint("http://127.0.0.1:5000", "/add_quiz"),
            "http://127.0.0.1:5000/add_quiz"
        );
    }

    #[test]
    fn join_endpoint_with_bare_slash_falls_back_to_path() {
        assert_eq!(join_endpoint("/", "/get_quizzes"), "/get_quizzes");
        assert_eq!(join_endpoint("  ", "/get_quizzes"), "/get_quizzes");
    }

    #[test]
    fn mensaje_for_rejected_includes_status() {
        let outcome = SubmitOutcome::Rejected {
            status: 422,
            body: String::new(),
        };
        assert!(outcome.mensaje().contains("422"));
    }

    #[test]
    fn mensaje_for_rejected_appends_body_when_present() {
        let outcome = SubmitOutcome::Rejected {
            status: 400,
            body: "falta el título\n".to_string(),
        };
        let mensaje = outcome.mensaje();
        assert!(mensaje.contains("400"));
        assert!(mensaje.contains("falta el título"));
    }
}
