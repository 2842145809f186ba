//! CX reading generator: fixed business interpretation per label.
//!
//! The label enum is closed, so the original "reading not available"
//! fallback is unreachable here; the constant is kept for surfaces that
//! render labels from untyped data.

use crate::decision::Sentiment;

pub const READING_UNAVAILABLE: &str = "Leitura não disponível.";

/// Business-facing interpretation text for a label.
pub fn cx_reading(label: Sentiment) -> &'static str {
    match label {
        Sentiment::Positive => {
            "Cliente provavelmente satisfeito, baixo risco de churn. \
             Considere solicitar feedback público ou case de sucesso."
        }
        Sentiment::Negative => {
            "Cliente possivelmente frustrado, maior risco de churn; priorizar \
             follow-up. Ação recomendada: contato proativo em até 24h."
        }
        Sentiment::Neutral => {
            "Baixo sinal de emoção; frase informativa, sem indício forte de \
             satisfação ou frustração. Monitorar evolução."
        }
    }
}
