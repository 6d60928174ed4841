//! Resume generation boundary — pluggable, trait-based.
//!
//! Default: `HeuristicGenerator` (pattern extraction behind an artificial delay
//! that stands in for a remote generation call). `AppState` holds an
//! `Arc<dyn ResumeGenerator>`, so a real backend can replace it without touching
//! handlers.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::generation::assembler::assemble_resume;
use crate::models::resume::Resume;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ResumeGenerator: Send + Sync {
    async fn generate(&self, raw_text: &str) -> Result<Resume, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Extracts a resume with the pattern extractors after sleeping for `delay`.
///
/// Never fails for any input string; an empty string yields an all-defaults
/// resume. A panic inside extraction is reported as `AppError::Generation`.
#[derive(Debug, Clone)]
pub struct HeuristicGenerator {
    delay: Duration,
}

impl HeuristicGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResumeGenerator for HeuristicGenerator {
    async fn generate(&self, raw_text: &str) -> Result<Resume, AppError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let text = raw_text.to_owned();
        let resume = tokio::task::spawn_blocking(move || assemble_resume(&text))
            .await
            .map_err(|e| AppError::Generation(format!("extraction task failed: {e}")))?;

        info!(
            "Generated resume: {} experiences, {} education entries, {} skills",
            resume.experiences.len(),
            resume.education.len(),
            resume.skills.len()
        );

        Ok(resume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_input_is_not_an_error() {
        let generator = HeuristicGenerator::new(Duration::ZERO);
        let resume = generator.generate("").await.unwrap();
        assert_eq!(resume.experiences.len(), 2);
    }

    #[tokio::test]
    async fn test_generate_is_idempotent() {
        let generator = HeuristicGenerator::new(Duration::ZERO);
        let text = "Jane Doe\nSenior Engineer at Acme Corp\n2020 - 2023";
        let first = generator.generate(text).await.unwrap();
        let second = generator.generate(text).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.experiences[0].company, "Acme Corp");
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_waits_for_configured_delay() {
        let generator = HeuristicGenerator::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        generator.generate("Jane Doe").await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
