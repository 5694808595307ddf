use crate::analysis::classifier::classify;
use crate::models::{JobPosting, JobSource};

const SAMPLE_JOBS: &[(&str, &str, &str, &[&str])] = &[
    (
        "Machine Learning Engineer",
        "TechCorp",
        "Remote",
        &["Python", "TensorFlow", "PyTorch", "AWS", "Docker"],
    ),
    (
        "Senior Data Scientist",
        "DataWorks",
        "San Francisco, CA",
        &["Python", "SQL", "Machine Learning", "Pandas", "Scikit-learn"],
    ),
    (
        "AI Research Engineer",
        "AI Labs",
        "Remote",
        &["Python", "Deep Learning", "Research", "TensorFlow", "Mathematics"],
    ),
    (
        "Junior ML Engineer",
        "StartupXYZ",
        "New York, NY",
        &["Python", "Machine Learning", "Git", "Docker", "SQL"],
    ),
    (
        "Full Stack Developer",
        "WebSolutions",
        "Remote",
        &["JavaScript", "React", "Node.js", "Python", "MongoDB"],
    ),
    (
        "Backend Engineer",
        "CloudTech",
        "Austin, TX",
        &["Python", "Django", "PostgreSQL", "Redis", "AWS"],
    ),
    (
        "Data Engineer",
        "BigData Inc",
        "Remote",
        &["Python", "Spark", "Airflow", "SQL", "AWS", "ETL"],
    ),
    (
        "ML Ops Engineer",
        "AI Platform",
        "Seattle, WA",
        &["Python", "Kubernetes", "Docker", "MLflow", "CI/CD"],
    ),
    (
        "Computer Vision Engineer",
        "Vision Labs",
        "Remote",
        &["Python", "OpenCV", "PyTorch", "Deep Learning", "CNNs"],
    ),
    (
        "NLP Engineer",
        "Language AI",
        "Boston, MA",
        &["Python", "NLP", "Transformers", "BERT", "Hugging Face"],
    ),
];

/// Bundled demonstration postings, used when the live sources come back thin.
pub fn sample_postings() -> Vec<JobPosting> {
    SAMPLE_JOBS
        .iter()
        .map(|(title, company, location, skills)| JobPosting {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            url: String::new(),
            date: String::new(),
            level: classify(title),
            source: JobSource::Sample,
        })
        .collect()
}
