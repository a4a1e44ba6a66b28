//! End-to-end flows over a real on-disk corpus: chat answers, the 12-week
//! trigger, roadmap fallback, and cache behavior.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use pathsmith::corpus::KnowledgeBase;
use pathsmith::message::Message;
use pathsmith::profile::Profile;
use pathsmith::service::GuidanceService;
use pathsmith::synthesis::MOTIVATION_LINE;

const SEED_CAREERS: &str = "\
Data Science career paths\nPython, SQL and statistics are the foundation of analytics roles.\n\
---\n\
Design careers\nFigma, wireframing and user research open doors into UX work.\n\
---\n\
Career planning basics\nStart with fundamentals, build a portfolio, earn one certification.";

fn service_over_seeds() -> (GuidanceService, TempDir) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("careers.txt"), SEED_CAREERS).unwrap();
    let knowledge = Arc::new(KnowledgeBase::new(dir.path()));
    (GuidanceService::new(knowledge, None), dir)
}

fn data_profile() -> Profile {
    Profile {
        name: Some("Ravi".into()),
        interest: Some("Data Science".into()),
        level: Some("beginner".into()),
        goal: Some("Become a data analyst".into()),
        ..Profile::default()
    }
}

#[tokio::test]
async fn chat_answer_carries_all_contract_sections_in_order() {
    let (service, _dir) = service_over_seeds();
    let answer = service
        .answer_chat(&[Message::user("how do I get into data science")], &data_profile())
        .await
        .unwrap();

    let summary_at = answer.find("Summary:").unwrap();
    let skills_at = answer.find("Recommended skills & certifications:").unwrap();
    let steps_at = answer.find("Next Steps:").unwrap();
    let projects_at = answer.find("Sample Projects:").unwrap();
    assert!(summary_at < skills_at && skills_at < steps_at && steps_at < projects_at);
    assert!(answer.ends_with(MOTIVATION_LINE));
}

#[tokio::test]
async fn chat_answer_is_byte_identical_across_calls() {
    let (service, _dir) = service_over_seeds();
    let messages = vec![Message::user("create a 12 week plan for data science")];
    let profile = data_profile();
    let first = service.answer_chat(&messages, &profile).await.unwrap();
    let second = service.answer_chat(&messages, &profile).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn twelve_week_phrase_toggles_the_plan_section() {
    let (service, _dir) = service_over_seeds();
    let profile = data_profile();

    let with_plan = service
        .answer_chat(&[Message::user("create a 12 week plan")], &profile)
        .await
        .unwrap();
    assert!(with_plan.contains("12-week plan:"));
    assert!(with_plan.matches("Week block ").count() >= 6);

    let without_plan = service
        .answer_chat(&[Message::user("what should I learn first")], &profile)
        .await
        .unwrap();
    assert!(!without_plan.contains("12-week plan:"));
}

#[tokio::test]
async fn corpus_is_loaded_once_per_process() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("seed.txt"), "Data skills matter.").unwrap();
    let knowledge = Arc::new(KnowledgeBase::new(dir.path()));
    let first = knowledge.chunks().unwrap().to_vec();

    // Mutate the directory; the cache must keep serving the first snapshot.
    fs::write(dir.path().join("seed.txt"), "Totally different content.").unwrap();
    fs::write(dir.path().join("extra.txt"), "More content.").unwrap();
    let second = knowledge.chunks().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn roadmap_over_empty_corpus_is_the_fixed_fallback() {
    let knowledge = Arc::new(KnowledgeBase::new("/missing/seeds"));
    let service = GuidanceService::new(knowledge, None);
    let roadmap = service.build_roadmap(&data_profile()).unwrap();
    assert!(roadmap.starts_with("🎯 Goal: Become a data analyst"));
    assert!(roadmap.contains("### Phase 0 — Foundations (2–4 weeks)"));
    assert!(roadmap.contains("### Phase 3 — Internships & Applications (4–8 weeks)"));
    assert!(roadmap.ends_with("💡 Tip: Keep a weekly log and build small public projects."));
}

#[tokio::test]
async fn roadmap_over_seeded_corpus_cites_the_knowledge_base() {
    let (service, _dir) = service_over_seeds();
    let roadmap = service.build_roadmap(&data_profile()).unwrap();
    assert!(roadmap.contains("📚 Based on our knowledge base:"));
    assert!(roadmap.contains("• "));
    assert!(roadmap.ends_with("💡 Tip: Keep a weekly log (skills learned, projects, outcomes)."));
}

#[tokio::test]
async fn profileless_chat_still_produces_a_full_answer() {
    let (service, _dir) = service_over_seeds();
    let answer = service
        .answer_chat(&[Message::user("help me choose a career")], &Profile::default())
        .await
        .unwrap();
    assert!(answer.contains("your chosen field"));
    assert!(answer.contains("(beginner)"));
    assert!(answer.ends_with(MOTIVATION_LINE));
}
