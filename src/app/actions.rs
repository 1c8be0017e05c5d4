use super::*;

impl BuilderApp {
    pub fn agregar_pregunta(&mut self) {
        self.doc.add_question();
        self.message.clear();
    }

    pub fn agregar_opcion(&mut self, question_index: usize) {
        if self.doc.add_choice(question_index).is_none() {
            log::warn!("se pidió añadir opción a una pregunta inexistente: {question_index}");
        }
    }

    pub fn eliminar_pregunta(&mut self, question_index: usize) {
        if !self.doc.delete_question(question_index) {
            log::warn!("se pidió borrar una pregunta inexistente: {question_index}");
        }
    }

    pub fn eliminar_opcion(&mut self, question_index: usize, choice_index: usize) {
        if !self.doc.delete_choice(question_index, choice_index) {
            log::warn!(
                "se pidió borrar una opción inexistente: {question_index}-{choice_index}"
            );
        }
    }

    /// Validación en cliente antes de tocar la red. Devuelve el primer
    /// problema encontrado, con la numeración que ve el usuario.
    pub fn validar_formulario(&self) -> Result<(), String> {
        if self.doc.title.trim().is_empty() {
            return Err("⚠ El quiz necesita un título.".into());
        }
        if self.doc.questions.is_empty() {
            return Err("⚠ Añade al menos una pregunta.".into());
        }

        for (pos, pregunta) in self.doc.questions.iter().enumerate() {
            let numero = pos + 1;
            if pregunta.text.trim().is_empty() {
                return Err(format!("⚠ La pregunta {numero} no tiene enunciado."));
            }
            if pregunta.choices.is_empty() {
                return Err(format!(
                    "⚠ La pregunta {numero} necesita al menos una opción."
                ));
            }
            if pregunta.choices.iter().any(|c| c.text.trim().is_empty()) {
                return Err(format!("⚠ La pregunta {numero} tiene una opción vacía."));
            }
            if !pregunta.has_correct_choice() {
                return Err(format!(
                    "⚠ Marca al menos una opción correcta en la pregunta {numero}."
                ));
            }
        }

        Ok(())
    }
}
