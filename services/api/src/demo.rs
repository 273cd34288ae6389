use crate::infra::allocation_service;
use clap::Args;
use room_allocation::allocation::{
    read_applicants_from_path, read_rooms_from_path, AllocationResult, RawApplicant,
};
use room_allocation::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AllocateArgs {
    /// JSON array of applicant records
    #[arg(long)]
    pub(crate) applicants: PathBuf,
    /// JSON array of available room ids
    #[arg(long)]
    pub(crate) rooms: PathBuf,
    /// Fix the tie-break seed (overrides APP_ALLOCATION_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the raw JSON result instead of a listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Fix the tie-break seed (overrides APP_ALLOCATION_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the raw JSON result instead of a listing
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_allocate(args: AllocateArgs) -> Result<(), AppError> {
    let AllocateArgs {
        applicants,
        rooms,
        seed,
        json,
    } = args;

    let applicants = read_applicants_from_path(applicants)?;
    let rooms = read_rooms_from_path(rooms)?;
    let service = allocation_service(seed)?;

    let result = service.allocate(&applicants, &rooms);
    render_result(&result, &rooms, json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { seed, json } = args;
    let (applicants, rooms) = demo_round();
    let service = allocation_service(seed)?;

    if !json {
        println!("Room allocation demo");
        println!("Applicants");
        for applicant in &applicants {
            println!(
                "- {} (seniority {}, holds {} [{}]) wishes: {}",
                applicant.name.as_deref().unwrap_or_default(),
                applicant.seniority.unwrap_or_default(),
                applicant
                    .current_room
                    .as_deref()
                    .filter(|room| !room.is_empty())
                    .unwrap_or("nothing"),
                applicant.current_room_type.as_deref().unwrap_or("-"),
                applicant
                    .preferences
                    .iter()
                    .flatten()
                    .flatten()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        println!();
    }

    let result = service.allocate(&applicants, &rooms);
    render_result(&result, &rooms, json);
    Ok(())
}

fn render_result(result: &AllocationResult, rooms: &[String], json: bool) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(payload) => println!("{}", payload),
            Err(err) => println!("Result payload unavailable: {}", err),
        }
        return;
    }

    let summary = result.summary();
    println!("Available rooms: {}", rooms.join(", "));
    println!(
        "{} applicants | {} assigned ({} in pairs) | {} unassigned",
        summary.applicants, summary.assigned, summary.paired_applicants, summary.unassigned
    );

    if result.assigned.is_empty() {
        println!("\nAssigned: none");
    } else {
        println!("\nAssigned");
        for assignment in &result.assigned {
            println!(
                "- {} -> {} ({})",
                assignment.name,
                assignment.room.as_deref().unwrap_or("-"),
                assignment.note
            );
        }
    }

    if result.unassigned.is_empty() {
        println!("\nUnassigned: none");
    } else {
        println!("\nUnassigned");
        for assignment in &result.unassigned {
            println!("- {} ({})", assignment.name, assignment.note);
        }
    }
}

fn demo_applicant(
    name: &str,
    seniority: i64,
    current_room: &str,
    room_type: &str,
    preferences: &[&str],
) -> RawApplicant {
    RawApplicant {
        name: Some(name.to_string()),
        current_room: Some(current_room.to_string()),
        current_room_type: Some(room_type.to_string()),
        seniority: Some(seniority),
        preferences: Some(
            preferences
                .iter()
                .map(|preference| Some(preference.to_string()))
                .collect(),
        ),
    }
}

pub(crate) fn demo_round() -> (Vec<RawApplicant>, Vec<String>) {
    let applicants = vec![
        demo_applicant("Ingrid", 12, "A1", "fleksirom", &["B1", "B2"]),
        demo_applicant("Jonas", 8, "A2", "parrom", &["B1", "A1"]),
        demo_applicant("Sara", 4, "", "", &["B3 venner", "A2"]),
        demo_applicant("Emil", 4, "", "", &["B3 venner", "A1"]),
        demo_applicant("Nora", 6, "A3", "enkeltrom", &["B3", "B2"]),
        demo_applicant("Ali", 1, "", "porten", &["A1", "A2", "A3"]),
    ];
    let rooms = vec!["B1".to_string(), "B2".to_string(), "B3".to_string()];
    (applicants, rooms)
}
