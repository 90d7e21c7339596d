use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::domain::recommendation::MatchEntry;
use crate::processing::embedding::{Embedder, EmbeddingError, MatchError, rank_top_k};
use crate::processing::summary::{
    experience_level, job_summary, resume_summary, total_experience_years,
};
use crate::repository::{JobReader, RecommendationWriter, ResumeReader};

/// Ranked lists for both matching directions, keyed by entity id.
///
/// Every queried entity has a key, with an empty list when the other side
/// of the corpus is empty. The two directions are independent rankings and
/// are not required to agree.
#[derive(Debug, PartialEq)]
pub struct CrossMatch {
    pub job_to_resumes: HashMap<String, Vec<MatchEntry>>,
    pub resume_to_jobs: HashMap<String, Vec<MatchEntry>>,
}

#[derive(Debug, Default, PartialEq)]
pub struct MatchRunStats {
    pub resumes_loaded: usize,
    pub active_jobs_loaded: usize,
    pub malformed_experience_entries: usize,
    pub resume_embeddings_generated: usize,
    pub job_embeddings_generated: usize,
    pub job_lists_written: usize,
    pub resume_lists_written: usize,
    pub write_failures: usize,
}

/// Rank every query against the full candidate set, in query order.
pub fn rank_direction(
    queries: &[(String, Vec<f32>)],
    candidates: &[(String, Vec<f32>)],
    k: usize,
) -> Result<Vec<(String, Vec<MatchEntry>)>, MatchError> {
    queries
        .iter()
        .map(|(id, vector)| Ok((id.clone(), rank_top_k(vector, candidates, k)?)))
        .collect()
}

/// Run both ranking directions over already-embedded corpora.
pub fn cross_match(
    jobs: &[(String, Vec<f32>)],
    resumes: &[(String, Vec<f32>)],
    k: usize,
) -> Result<CrossMatch, MatchError> {
    Ok(CrossMatch {
        job_to_resumes: rank_direction(jobs, resumes, k)?.into_iter().collect(),
        resume_to_jobs: rank_direction(resumes, jobs, k)?.into_iter().collect(),
    })
}

/// Embed a batch of summaries, verifying the one-vector-per-text contract
/// and the embedder's declared dimension.
fn embed_texts(
    embedder: &mut dyn Embedder,
    texts: Vec<String>,
) -> Result<Vec<Vec<f32>>, EmbeddingError> {
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let expected = texts.len();
    let dimension = embedder.dimension();
    let vectors = embedder.embed(texts)?;
    if vectors.len() != expected {
        return Err(EmbeddingError::BatchShape {
            expected,
            actual: vectors.len(),
        });
    }
    if let Some(vector) = vectors.iter().find(|vector| vector.len() != dimension) {
        return Err(EmbeddingError::VectorShape {
            expected: dimension,
            actual: vector.len(),
        });
    }

    Ok(vectors)
}

/// Recompute and store recommendation lists for the whole corpus.
///
/// Loads every résumé and every active job, embeds their summaries, ranks
/// the two directions concurrently and replaces each entity's stored list.
/// A write failure for one entity is counted and skipped; load, embedding
/// and ranking failures abort the run.
pub async fn process_match_run<R>(
    repo: &R,
    embedder: &mut dyn Embedder,
    top_k: usize,
) -> Result<MatchRunStats, ()>
where
    R: ResumeReader + JobReader + RecommendationWriter,
{
    log::info!(
        "Starting match run: model={}, dimension={}, top_k={top_k}",
        embedder.model_name(),
        embedder.dimension()
    );

    let mut stats = MatchRunStats::default();
    let current_year = Utc::now().year();

    let resumes = match repo.list_resumes() {
        Ok(resumes) => resumes,
        Err(error) => {
            log::error!("Failed to list resumes: {error:?}");
            return Err(());
        }
    };
    stats.resumes_loaded = resumes.len();

    let jobs = match repo.list_active_jobs() {
        Ok(jobs) => jobs,
        Err(error) => {
            log::error!("Failed to list active jobs: {error:?}");
            return Err(());
        }
    };
    stats.active_jobs_loaded = jobs.len();

    let mut resume_texts = Vec::with_capacity(resumes.len());
    for resume in &resumes {
        let tenure = total_experience_years(&resume.experience, current_year);
        stats.malformed_experience_entries += tenure.malformed_entries;
        resume_texts.push(resume_summary(
            resume,
            experience_level(tenure.years as f32),
        ));
    }

    let job_texts: Vec<String> = jobs.iter().map(job_summary).collect();

    let resume_vectors = match embed_texts(embedder, resume_texts) {
        Ok(vectors) => vectors,
        Err(error) => {
            log::error!("Failed to embed resume summaries: {error}");
            return Err(());
        }
    };
    stats.resume_embeddings_generated = resume_vectors.len();

    let job_vectors = match embed_texts(embedder, job_texts) {
        Ok(vectors) => vectors,
        Err(error) => {
            log::error!("Failed to embed job summaries: {error}");
            return Err(());
        }
    };
    stats.job_embeddings_generated = job_vectors.len();

    let resume_embeddings: Arc<Vec<(String, Vec<f32>)>> = Arc::new(
        resumes
            .iter()
            .map(|resume| resume.id.clone())
            .zip(resume_vectors)
            .collect(),
    );
    let job_embeddings: Arc<Vec<(String, Vec<f32>)>> = Arc::new(
        jobs.iter()
            .map(|job| job.id.clone())
            .zip(job_vectors)
            .collect(),
    );

    // The two directions read the same embeddings and write disjoint
    // results, so they can run concurrently.
    let job_pass = {
        let jobs = Arc::clone(&job_embeddings);
        let resumes = Arc::clone(&resume_embeddings);
        tokio::task::spawn_blocking(move || rank_direction(&jobs, &resumes, top_k))
    };
    let resume_pass = {
        let jobs = Arc::clone(&job_embeddings);
        let resumes = Arc::clone(&resume_embeddings);
        tokio::task::spawn_blocking(move || rank_direction(&resumes, &jobs, top_k))
    };

    let (job_pass, resume_pass) = futures::future::join(job_pass, resume_pass).await;

    let job_matches = match job_pass {
        Ok(Ok(ranked)) => ranked,
        Ok(Err(error)) => {
            log::error!("Job matching pass failed: {error}");
            return Err(());
        }
        Err(error) => {
            log::error!("Job matching pass panicked: {error}");
            return Err(());
        }
    };

    let resume_matches = match resume_pass {
        Ok(Ok(ranked)) => ranked,
        Ok(Err(error)) => {
            log::error!("Resume matching pass failed: {error}");
            return Err(());
        }
        Err(error) => {
            log::error!("Resume matching pass panicked: {error}");
            return Err(());
        }
    };

    for (job_id, entries) in &job_matches {
        match repo.replace_job_recommendations(job_id, entries) {
            Ok(_) => stats.job_lists_written += 1,
            Err(error) => {
                log::error!("Failed to store matches for job {job_id}: {error:?}");
                stats.write_failures += 1;
            }
        }
    }

    for (resume_id, entries) in &resume_matches {
        match repo.replace_resume_recommendations(resume_id, entries) {
            Ok(_) => stats.resume_lists_written += 1,
            Err(error) => {
                log::error!("Failed to store matches for resume {resume_id}: {error:?}");
                stats.write_failures += 1;
            }
        }
    }

    log::info!(
        "Finished match run: resumes_loaded={}, active_jobs_loaded={}, malformed_experience_entries={}, resume_embeddings_generated={}, job_embeddings_generated={}, job_lists_written={}, resume_lists_written={}, write_failures={}",
        stats.resumes_loaded,
        stats.active_jobs_loaded,
        stats.malformed_experience_entries,
        stats.resume_embeddings_generated,
        stats.job_embeddings_generated,
        stats.job_lists_written,
        stats.resume_lists_written,
        stats.write_failures
    );

    Ok(stats)
}
