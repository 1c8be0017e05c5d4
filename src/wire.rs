//! Codificación del formulario al esquema de nombres anidados que el
//! servidor decodifica como listas (`questions-0-choices-1-text`, etc.).

use crate::model::FormDocument;

/// Valor que manda un navegador para una casilla marcada.
pub const CHECKBOX_ON: &str = "on";

pub fn question_text_name(question_index: usize) -> String {
    format!("questions-{question_index}-text")
}

pub fn choice_text_name(question_index: usize, choice_index: usize) -> String {
    format!("questions-{question_index}-choices-{choice_index}-text")
}

pub fn choice_is_correct_name(question_index: usize, choice_index: usize) -> String {
    format!("questions-{question_index}-choices-{choice_index}-is_correct")
}

/// Serializa el documento completo a pares clave/valor en orden de
/// documento. El par `is_correct` solo aparece cuando la casilla está
/// marcada, igual que en un envío de formulario de navegador.
pub fn encode_document(doc: &FormDocument) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    pairs.push(("title".to_string(), doc.title.clone()));
    pairs.push(("description".to_string(), doc.description.clone()));

    for question in &doc.questions {
        pairs.push((question_text_name(question.index), question.text.clone()));
        for choice in &question.choices {
            pairs.push((
                choice_text_name(question.index, choice.index),
                choice.text.clone(),
            ));
            if choice.is_correct {
                pairs.push((
                    choice_is_correct_name(question.index, choice.index),
                    CHECKBOX_ON.to_string(),
                ));
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormDocument;
    use std::collections::HashSet;

    fn keys(pairs: &[(String, String)]) -> Vec<&str> {
        pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn field_names_encode_full_path() {
        let mut doc = FormDocument::new();
        doc.title = "Capitales".into();
        let q = doc.add_question();
        doc.question_mut(q).unwrap().text = "¿Capital de Francia?".into();
        let c0 = doc.add_choice(q).unwrap();
        let c1 = doc.add_choice(q).unwrap();
        {
            let pregunta = doc.question_mut(q).unwrap();
            pregunta.choices[0].text = "París".into();
            pregunta.choices[0].is_correct = true;
            pregunta.choices[1].text = "Lyon".into();
        }

        let pairs = encode_document(&doc);
        assert_eq!(
            keys(&pairs),
            vec![
                "title",
                "description",
                "questions-0-text",
                "questions-0-choices-0-text",
                "questions-0-choices-0-is_correct",
                "questions-0-choices-1-text",
            ]
        );
        assert_eq!(c0, 0);
        assert_eq!(c1, 1);
        assert_eq!(pairs[4].1, CHECKBOX_ON);
    }

    #[test]
    fn checkbox_pair_present_only_when_marked() {
        let mut doc = FormDocument::new();
        let q = doc.add_question();
        doc.add_choice(q);
        let pairs = encode_document(&doc);
        assert!(!keys(&pairs).contains(&"questions-0-choices-0-is_correct"));

        doc.question_mut(q).unwrap().choices[0].is_correct = true;
        let pairs = encode_document(&doc);
        assert!(keys(&pairs).contains(&"questions-0-choices-0-is_correct"));
    }

    #[test]
    fn indices_survive_deletion_without_renumbering() {
        let mut doc = FormDocument::new();
        doc.add_question();
        doc.add_question();
        doc.delete_question(0);

        let pairs = encode_document(&doc);
        assert!(keys(&pairs).contains(&"questions-1-text"));
        assert!(!keys(&pairs).contains(&"questions-0-text"));
    }

    #[test]
    fn field_names_stay_unique_under_mixed_adds_and_deletes() {
        let mut doc = FormDocument::new();
        let a = doc.add_question();
        let b = doc.add_question();
        doc.add_choice(a);
        doc.add_choice(a);
        doc.delete_choice(a, 0);
        doc.add_choice(a);
        doc.delete_question(b);
        let c = doc.add_question();
        doc.add_choice(c);

        // marcamos todo para que los nombres is_correct también cuenten
        for question in &mut doc.questions {
            for choice in &mut question.choices {
                choice.is_correct = true;
            }
        }

        let pairs = encode_document(&doc);
        let unique: HashSet<&str> = keys(&pairs).into_iter().collect();
        assert_eq!(unique.len(), pairs.len());
    }

    #[test]
    fn title_and_description_lead_the_payload() {
        let mut doc = FormDocument::new();
        doc.title = "Mi quiz".into();
        doc.description = "de prueba".into();
        let pairs = encode_document(&doc);
        assert_eq!(pairs[0], ("title".to_string(), "Mi quiz".to_string()));
        assert_eq!(
            pairs[1],
            ("description".to_string(), "de prueba".to_string())
        );
    }
}
