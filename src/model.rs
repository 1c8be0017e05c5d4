// src/model.rs

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AppState {
    Welcome,
    Builder,
    Submitting,
    TakeQuiz,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}

/// Una opción de respuesta dentro de una pregunta del formulario.
///
/// El `index` se asigna al crearla y no se reutiliza nunca, aunque se
/// borren opciones hermanas.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChoiceBlock {
    pub index: usize,
    pub text: String,
    pub is_correct: bool,
}

/// Una pregunta del formulario con su lista dinámica de opciones.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionBlock {
    pub index: usize,
    pub text: String,
    pub choices: Vec<ChoiceBlock>,
    // Contador monótono para los índices de opción; nunca decrece.
    next_choice_index: usize,
}

impl QuestionBlock {
    fn new(index: usize) -> Self {
        Self {
            index,
            text: String::new(),
            choices: Vec::new(),
            next_choice_index: 0,
        }
    }

    /// Añade una opción vacía y devuelve el índice que le ha tocado.
    /// Si no se ha borrado ninguna, el índice coincide con el número de
    /// opciones que había antes de insertar.
    pub fn add_choice(&mut self) -> usize {
        let index = self.next_choice_index;
        self.next_choice_index += 1;
        self.choices.push(ChoiceBlock {
            index,
            text: String::new(),
            is_correct: false,
        });
        index
    }

    /// Borra la opción con ese índice. Las hermanas conservan el suyo.
    pub fn delete_choice(&mut self, choice_index: usize) -> bool {
        let before = self.choices.len();
        self.choices.retain(|c| c.index != choice_index);
        self.choices.len() != before
    }

    pub fn has_correct_choice(&self) -> bool {
        self.choices.iter().any(|c| c.is_correct)
    }
}

/// El documento raíz del constructor de quizzes: espejo 1:1 de lo que se
/// ve en pantalla. Borrar una pregunta borra también todas sus opciones.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FormDocument {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionBlock>,
    // Contador monótono para los índices de pregunta; nunca decrece.
    next_question_index: usize,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade una pregunta al final y devuelve su índice.
    pub fn add_question(&mut self) -> usize {
        let index = self.next_question_index;
        self.next_question_index += 1;
        self.questions.push(QuestionBlock::new(index));
        index
    }

    /// Borra la pregunta con ese índice (y sus opciones). No renumera a
    /// las supervivientes: los índices pueden quedar no contiguos.
    pub fn delete_question(&mut self, question_index: usize) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.index != question_index);
        self.questions.len() != before
    }

    pub fn question(&self, question_index: usize) -> Option<&QuestionBlock> {
        self.questions.iter().find(|q| q.index == question_index)
    }

    pub fn question_mut(&mut self, question_index: usize) -> Option<&mut QuestionBlock> {
        self.questions.iter_mut().find(|q| q.index == question_index)
    }

    /// Añade una opción a la pregunta indicada; `None` si no existe.
    pub fn add_choice(&mut self, question_index: usize) -> Option<usize> {
        self.question_mut(question_index).map(|q| q.add_choice())
    }

    pub fn delete_choice(&mut self, question_index: usize, choice_index: usize) -> bool {
        self.question_mut(question_index)
            .map(|q| q.delete_choice(choice_index))
            .unwrap_or(false)
    }

    /// ¿Hay algo escrito o alguna pregunta creada?
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.description.trim().is_empty()
            && self.questions.is_empty()
    }
}

// ----- Lectura de quizzes publicados (GET /get_quizzes) -----

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublishedOption {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublishedQuestion {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<PublishedOption>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublishedQuiz {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<PublishedQuestion>,
}
