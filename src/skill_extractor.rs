use std::collections::BTreeSet;
use std::sync::LazyLock;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::NerError;
use crate::ner::EntityRecognizer;

/// Word-bounded alternations of known technology keywords, applied to
/// lower-cased text. Grouped roughly by ecosystem; a term matched by more
/// than one class still counts once (set union downstream).
static TECH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(python|java|javascript|c\+\+|c#|ruby|go|rust|php|swift|kotlin|scala|r|matlab|perl)\b",
        r"\b(react|angular|vue|django|flask|spring|nodejs|express|fastapi|rails|laravel)\b",
        r"\b(tensorflow|pytorch|keras|scikit-learn|pandas|numpy|opencv|nltk|spacy)\b",
        r"\b(aws|azure|gcp|docker|kubernetes|jenkins|git|terraform|ansible)\b",
        r"\b(mysql|postgresql|mongodb|redis|elasticsearch|cassandra|oracle|sql server)\b",
        r"\b(machine learning|deep learning|nlp|computer vision|data science|ai|ml|dl)\b",
        r"\b(html|css|sass|less|bootstrap|tailwind|jquery|ajax|rest|api|graphql)\b",
        r"\b(linux|unix|windows|bash|shell|powershell|vim|vscode|intellij|eclipse)\b",
        r"\b(agile|scrum|kanban|jira|confluence|slack|teams|devops|ci/cd)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Capitalized multi-word sequences ("Spring Boot", "Power BI") and all-caps
// acronyms ("AWS", "GCP"). Resume-parsing path only; runs on original-case
// text since the heuristics depend on casing.
static RE_CAPITALIZED_SEQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*)\b").unwrap());
static RE_ACRONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z]+(?:\.[A-Z]+)*)\b").unwrap());

/// Curated skill vocabulary, scanned by literal substring containment on
/// the resume-parsing path.
static SKILL_VOCABULARY: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let languages = [
        "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust", "php",
        "swift", "kotlin", "scala", "r", "matlab", "perl", "shell", "bash", "powershell", "sql",
        "html", "css", "sass", "less",
    ];
    let frameworks = [
        "react", "angular", "vue", "django", "flask", "fastapi", "spring", "spring boot",
        "nodejs", "node.js", "express", "rails", "laravel", "asp.net", "jquery", "bootstrap",
        "tailwind", "material-ui", "tensorflow", "pytorch", "keras", "scikit-learn", "pandas",
        "numpy", "matplotlib", "seaborn", "opencv",
    ];
    let tools = [
        "git", "github", "gitlab", "bitbucket", "docker", "kubernetes", "jenkins", "aws",
        "azure", "gcp", "heroku", "firebase", "mongodb", "mysql", "postgresql", "redis",
        "elasticsearch", "kafka", "rabbitmq", "nginx", "apache", "linux", "windows", "macos",
        "android", "ios", "react native", "flutter", "unity",
    ];
    let data_science = [
        "machine learning", "deep learning", "artificial intelligence", "data science",
        "data analysis", "data mining", "nlp", "natural language processing", "computer vision",
        "neural networks", "reinforcement learning", "big data", "hadoop", "spark", "tableau",
        "power bi", "excel", "statistics",
    ];

    languages
        .into_iter()
        .chain(frameworks)
        .chain(tools)
        .chain(data_science)
        .collect()
});

/// Case-fold a skill token: NFKC, trim, lower-case.
pub fn normalize_skill(skill: &str) -> String {
    skill.nfkc().collect::<String>().trim().to_lowercase()
}

/// Normalize a declared skill list into a deduplicated ordered set.
pub fn normalize_skill_set(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Matching-path extraction: pattern scan plus the optional entity scan.
/// Used on both resume and job composed texts during scoring.
///
/// An absent recognizer skips the entity scan silently; a failing one is a
/// real error and propagates to the caller.
pub fn extract(
    text: &str,
    recognizer: Option<&dyn EntityRecognizer>,
) -> Result<BTreeSet<String>, NerError> {
    let mut skills = BTreeSet::new();
    let lowered = text.to_lowercase();

    for pattern in TECH_PATTERNS.iter() {
        for caps in pattern.captures_iter(&lowered) {
            skills.insert(normalize_skill(&caps[1]));
        }
    }

    if let Some(recognizer) = recognizer {
        for entity in recognizer.extract(text)? {
            if !entity.label.is_skill_candidate() {
                continue;
            }
            let candidate = normalize_skill(&entity.text);
            if candidate.len() > 2 && !candidate.chars().all(|c| c.is_ascii_digit()) {
                skills.insert(candidate);
            }
        }
    }

    Ok(skills)
}

/// Resume-parsing path: everything `extract` finds, plus the vocabulary
/// substring scan and the capitalization heuristics. The substring scan is
/// deliberately literal — short vocabulary terms can fire inside longer
/// words — which is why this path never feeds the job side of scoring.
pub fn extract_from_resume(
    text: &str,
    recognizer: Option<&dyn EntityRecognizer>,
) -> Result<BTreeSet<String>, NerError> {
    let mut skills = extract(text, recognizer)?;
    let lowered = text.to_lowercase();

    for term in SKILL_VOCABULARY.iter() {
        if lowered.contains(term) {
            skills.insert((*term).to_string());
        }
    }

    for pattern in [&*RE_CAPITALIZED_SEQ, &*RE_ACRONYM] {
        for caps in pattern.captures_iter(text) {
            let candidate = &caps[1];
            if candidate.len() > 2 && candidate.len() < 20 {
                skills.insert(normalize_skill(candidate));
            }
        }
    }

    Ok(skills)
}
