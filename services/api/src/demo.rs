use crate::infra::{
    InMemoryAssessmentRepository, InMemoryEntityRepository, InMemoryEventPublisher,
};
use chrono::SecondsFormat;
use clap::Args;
use nova_advisory::error::AppError;
use nova_advisory::workflows::eligibility::{
    score, validate, EligibilityForm, EligibilityService, EnglishTest, FieldOfStudy, GermanLevel,
    QualificationLevel, ScoreType, StudentId, WorkExperience,
};
use nova_advisory::workflows::lifecycle::{
    ActorRole, EntityKind, LifecycleAction, LifecycleService, TransitionCommand,
};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Path to a JSON eligibility form
    #[arg(long)]
    pub(crate) form: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the document review portion of the demo.
    #[arg(long)]
    pub(crate) skip_lifecycle: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.form)?;
    let form: EligibilityForm = serde_json::from_str(&raw)
        .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;

    match validate(&form) {
        Ok(profile) => {
            let result = score(&profile);
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?
            );
        }
        Err(error) => {
            println!("form is invalid:");
            for violation in &error.violations {
                println!("  - {violation}");
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Nova advisory workflow demo");

    let eligibility = EligibilityService::new(Arc::new(InMemoryAssessmentRepository::default()));
    let student = StudentId("demo-student".to_string());

    let form = EligibilityForm {
        qualification_level: Some(QualificationLevel::Bachelors),
        field_of_study: Some(FieldOfStudy::Engineering),
        other_field_of_study: None,
        score_type: Some(ScoreType::Cgpa),
        score: Some(7.4),
        english_test: Some(EnglishTest::Ielts),
        english_score: Some(6.5),
        german_level: Some(GermanLevel::A2),
        work_experience: Some(WorkExperience::OneToThree),
    };

    match eligibility.assess(student, form) {
        Ok(record) => {
            println!(
                "assessment: {}/100, tier {:?}, recorded {}",
                record.result.breakdown.total_score,
                record.result.level,
                record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            );
            for recommendation in &record.result.recommendations {
                println!("  advice: {recommendation}");
            }
        }
        Err(error) => println!("assessment failed: {error}"),
    }

    if args.skip_lifecycle {
        return Ok(());
    }

    let publisher = Arc::new(InMemoryEventPublisher::default());
    let lifecycle = LifecycleService::new(
        Arc::new(InMemoryEntityRepository::default()),
        publisher.clone(),
    );

    let entity = match lifecycle.create(EntityKind::Document, "demo-student".to_string()) {
        Ok(entity) => entity,
        Err(error) => {
            println!("document creation failed: {error}");
            return Ok(());
        }
    };
    println!("created {} in state {:?}", entity.entity_id.0, entity.status);

    let steps: [(LifecycleAction, &str, ActorRole, Option<&str>); 5] = [
        (LifecycleAction::Generate, "demo-student", ActorRole::Owner, None),
        (LifecycleAction::Edit, "demo-student", ActorRole::Owner, None),
        (LifecycleAction::Submit, "demo-student", ActorRole::Owner, None),
        (LifecycleAction::StartReview, "demo-counsellor", ActorRole::Reviewer, None),
        (
            LifecycleAction::Approve,
            "demo-counsellor",
            ActorRole::Reviewer,
            None,
        ),
    ];

    let mut version = entity.version;
    for (action, actor_id, actor_role, comments) in steps {
        let command = TransitionCommand {
            entity_id: entity.entity_id.clone(),
            action,
            actor_id: actor_id.to_string(),
            actor_role,
            comments: comments.map(str::to_owned),
            expected_version: version,
        };
        match lifecycle.apply(command) {
            Ok(updated) => {
                println!(
                    "  {} -> {:?} (version {})",
                    action.label(),
                    updated.status,
                    updated.version
                );
                version = updated.version;
            }
            Err(error) => println!("  {} rejected: {error}", action.label()),
        }
    }

    let events = publisher.events();
    println!("emitted {} domain events", events.len());
    if let Some(last) = events.last() {
        println!(
            "last transition {} -> {} at {}",
            last.from_status.label(),
            last.to_status.label(),
            last.occurred_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
    }
    Ok(())
}
