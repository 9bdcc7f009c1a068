use crate::infra::{
    default_completeness_config, parse_vetting, InMemoryProfileRepository, InMemoryVettingQueue,
};
use chrono::Utc;
use clap::Args;
use gigexecs::error::AppError;
use gigexecs::workflows::profile::{
    badge_style, display_text, is_ready_for_vetting, ConsultantProfile, ProfileRecord,
    ProfileSnapshot, ProfileStatusEngine, ProfileStatusService, RateRange, RelatedCounts,
    RoleProfile, StatusResult, UserData, UserId, UserRole, VettingStatus,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ProfileStatusArgs {
    /// Count of client references on file
    #[arg(long, default_value_t = 0)]
    pub(crate) references: u32,
    /// Proof-of-identity document uploaded
    #[arg(long)]
    pub(crate) id_document: bool,
    /// Count of qualifications on file
    #[arg(long, default_value_t = 0)]
    pub(crate) qualifications: u32,
    /// Count of certifications on file
    #[arg(long, default_value_t = 0)]
    pub(crate) certifications: u32,
    /// Count of portfolio projects on file
    #[arg(long, default_value_t = 0)]
    pub(crate) portfolio: u32,
    /// Count of work-experience entries on file
    #[arg(long, default_value_t = 0)]
    pub(crate) work_experience: u32,
    /// All basic onboarding fields are filled in
    #[arg(long)]
    pub(crate) core_complete: bool,
    /// Vetting outcome recorded by staff (verified, pending, rejected, ...)
    #[arg(long, value_parser = parse_vetting)]
    pub(crate) vetting: Option<VettingStatus>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the staff vetting decision portion of the demo
    #[arg(long)]
    pub(crate) skip_vetting: bool,
}

pub(crate) fn run_profile_status(args: ProfileStatusArgs) -> Result<(), AppError> {
    let engine = ProfileStatusEngine::new(default_completeness_config());
    let snapshot = synthetic_snapshot(&args);
    let result = engine.evaluate(&snapshot);

    render_status_report(&result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Profile progression demo");

    let repository = Arc::new(InMemoryProfileRepository::default());
    let vetting = Arc::new(InMemoryVettingQueue::default());
    let service = Arc::new(ProfileStatusService::new(
        repository,
        vetting.clone(),
        default_completeness_config(),
    ));

    println!("\nStage 1: account confirmed, onboarding not started");
    let record = service.upsert(demo_snapshot(RoleProfile::Consultant(
        ConsultantProfile::default(),
    )))?;
    render_record_line(&record);

    println!("\nStage 2: basic onboarding fields filled in");
    let mut snapshot = demo_snapshot(demo_consultant());
    let record = service.upsert(snapshot.clone())?;
    render_record_line(&record);

    println!("\nStage 3: references, ID document, and a certification land");
    snapshot.counts = RelatedCounts {
        references: 2,
        has_id_document: true,
        qualifications: 0,
        certifications: 1,
        portfolio_items: 0,
        work_experience: 4,
    };
    let record = service.upsert(snapshot.clone())?;
    render_record_line(&record);

    let events = vetting.events();
    if events.is_empty() {
        println!("  Vetting queue: nothing submitted");
    } else {
        println!("  Vetting queue:");
        for event in &events {
            println!(
                "    - {} submitted at tier {}",
                event.user_id.0,
                event.tier.label()
            );
        }
    }

    if args.skip_vetting {
        return Ok(());
    }

    println!("\nStage 4: staff verify the profile and a portfolio project arrives");
    snapshot.counts.portfolio_items = 1;
    snapshot.vetting_status = record.snapshot.vetting_status;
    service.upsert(snapshot)?;
    let record = service.record_vetting_decision(&demo_user_id(), VettingStatus::Verified)?;
    render_record_line(&record);

    match serde_json::to_string_pretty(&record.status_view()) {
        Ok(json) => println!("\nPublic status payload:\n{json}"),
        Err(err) => println!("\nPublic status payload unavailable: {err}"),
    }

    Ok(())
}

fn demo_user_id() -> UserId {
    UserId("demo-consultant".to_string())
}

fn demo_consultant() -> RoleProfile {
    RoleProfile::Consultant(ConsultantProfile {
        headline: Some("Supply chain transformation lead".to_string()),
        bio: Some("Delivered S&OP overhauls for three FTSE 100 manufacturers.".to_string()),
        rate: Some(RateRange {
            currency: "GBP".to_string(),
            min: 110,
            max: 160,
        }),
    })
}

fn demo_snapshot(role_profile: RoleProfile) -> ProfileSnapshot {
    let now = Utc::now();
    ProfileSnapshot {
        user: UserData {
            id: demo_user_id(),
            account_verified: true,
            role: UserRole::Consultant,
            created_at: now,
            updated_at: now,
        },
        role_profile,
        counts: RelatedCounts::default(),
        vetting_status: VettingStatus::NotSubmitted,
    }
}

fn synthetic_snapshot(args: &ProfileStatusArgs) -> ProfileSnapshot {
    let role_profile = if args.core_complete {
        demo_consultant()
    } else {
        RoleProfile::Consultant(ConsultantProfile::default())
    };

    let now = Utc::now();
    ProfileSnapshot {
        user: UserData {
            id: UserId("cli-report".to_string()),
            account_verified: true,
            role: UserRole::Consultant,
            created_at: now,
            updated_at: now,
        },
        role_profile,
        counts: RelatedCounts {
            references: args.references,
            has_id_document: args.id_document,
            qualifications: args.qualifications,
            certifications: args.certifications,
            portfolio_items: args.portfolio,
            work_experience: args.work_experience,
        },
        vetting_status: args.vetting.unwrap_or_default(),
    }
}

fn render_status_report(result: &StatusResult) {
    println!("Profile progress report");
    println!(
        "Status: {} ({})",
        display_text(result.status),
        badge_style(result.status)
    );
    println!(
        "Completeness: {}% (basic {} / full {} / all-star {})",
        result.percent, result.segments.basic, result.segments.full, result.segments.all_star
    );
    println!(
        "Tier: {} | ready for vetting: {}",
        result.tier.label(),
        if is_ready_for_vetting(result.tier) {
            "yes"
        } else {
            "no"
        }
    );

    if result.next_steps.is_empty() {
        println!("\nNext steps: none");
    } else {
        println!("\nNext steps");
        for step in &result.next_steps {
            println!("- {step}");
        }
    }

    println!("\nSuggested route: {}", result.cta_route);
}

fn render_record_line(record: &ProfileRecord) {
    let result = &record.result;
    println!(
        "- {} -> {} ({}%), vetting {}, next: {}",
        result.user_id.0,
        result.status.label(),
        result.percent,
        record.snapshot.vetting_status.label(),
        result
            .next_steps
            .first()
            .map(String::as_str)
            .unwrap_or("all done")
    );
}
