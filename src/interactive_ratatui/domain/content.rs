//! Fixed page copy and the canned analysis returned by the simulated search.

use super::models::{AnalysisReport, ReportSection};

pub const PAGE_TITLE: &str = "Intelligent Project Search";

pub const PAGE_TAGLINE: &str =
    "Leverage AI to find projects with matching features and descriptions instantly.";

pub const DESCRIPTION_LABEL: &str = "Project Description & Features";

pub const PROJECT_DESCRIPTION: &str = "\
Purpose
  Provide a single place to run an AI-enabled social analytics and management platform:
  Integration points for modern LLMs and image generation models for features like chat, content generation, agents, and embeddings.
  what the code implements
  Scheduled batch ingestion with Python Dockerized jobs
  BigQuery ingestion and analytics, plus embedding generation and insertion.
  Frontend: Nuxt 3 app with components for chat, dashboards, social features, and settings.";

pub const REPORT_TITLE: &str = "AI Analysis Complete";

pub const SIMILAR_PROJECTS: &str = "Similar Projects";
pub const RECOMMENDED_DEVELOPER: &str = "Recommended developer";
pub const RECOMMENDED_TOOLS: &str = "Recommended tech tools";

pub fn canned_report() -> AnalysisReport {
    AnalysisReport {
        title: REPORT_TITLE.to_string(),
        sections: vec![
            ReportSection {
                heading: SIMILAR_PROJECTS.to_string(),
                entries: vec![
                    "Project Ai helper: Streamed real-time social data with Kafka, processed and \
                     clustered trends with Spark and fastText, then displayed analytics in a React \
                     dashboard."
                        .to_string(),
                ],
            },
            ReportSection {
                heading: RECOMMENDED_DEVELOPER.to_string(),
                entries: vec![
                    "Puka: The system analyzes the search input using LLMs, and then performs a \
                     high-accuracy vectorized search across the ingested data. It efficiently \
                     retrieves Puka's developer profile—highlighting his experience extracted \
                     from project codes and commit history—by matching the user's requirements to \
                     Puka's skills and project involvement stored in the vector database."
                        .to_string(),
                ],
            },
            ReportSection {
                heading: RECOMMENDED_TOOLS.to_string(),
                entries: vec![
                    "OpenAI GPT-4 – State-of-the-art large language model for content creation, \
                     chat, and semantic analysis tasks."
                        .to_string(),
                    "Hugging Face Transformers – Popular open-source library supporting a wide \
                     range of pre-trained NLP models for embedding, classification, and generation."
                        .to_string(),
                    "BigQuery – Google's cloud data warehouse, essential for large-scale analytics \
                     and ML model integration."
                        .to_string(),
                ],
            },
        ],
    }
}
