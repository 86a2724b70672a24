use shared_types::*;
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut types = Vec::new();

    types.push(strip_banner(ErrorResponse::export_to_string()?));
    types.push(strip_banner(MessageResponse::export_to_string()?));

    // Course and note types
    types.push(strip_banner(Priority::export_to_string()?));
    types.push(strip_banner(CourseStatus::export_to_string()?));
    types.push(strip_banner(Note::export_to_string()?));
    types.push(strip_banner(NoteWithCourse::export_to_string()?));
    types.push(strip_banner(Course::export_to_string()?));
    types.push(strip_banner(CreateCourseRequest::export_to_string()?));
    types.push(strip_banner(UpdateCourseRequest::export_to_string()?));
    types.push(strip_banner(CreateNoteRequest::export_to_string()?));
    types.push(strip_banner(UpdateNoteRequest::export_to_string()?));
    types.push(strip_banner(CoursesResponse::export_to_string()?));
    types.push(strip_banner(NotesResponse::export_to_string()?));
    types.push(strip_banner(AllNotesResponse::export_to_string()?));

    // Progress tree types
    types.push(strip_banner(SubGoal::export_to_string()?));
    types.push(strip_banner(MainGoal::export_to_string()?));
    types.push(strip_banner(MainCategory::export_to_string()?));
    types.push(strip_banner(CreateMainCategoryRequest::export_to_string()?));
    types.push(strip_banner(UpdateMainCategoryRequest::export_to_string()?));
    types.push(strip_banner(CreateMainGoalRequest::export_to_string()?));
    types.push(strip_banner(UpdateMainGoalRequest::export_to_string()?));
    types.push(strip_banner(CreateSubGoalRequest::export_to_string()?));
    types.push(strip_banner(UpdateSubGoalRequest::export_to_string()?));
    types.push(strip_banner(CategoriesResponse::export_to_string()?));
    types.push(strip_banner(GoalProgress::export_to_string()?));
    types.push(strip_banner(CategoryProgress::export_to_string()?));
    types.push(strip_banner(OverallProgress::export_to_string()?));

    // Certificate types
    types.push(strip_banner(Certificate::export_to_string()?));
    types.push(strip_banner(CreateCertificateRequest::export_to_string()?));
    types.push(strip_banner(CertificatesResponse::export_to_string()?));

    // Skill types
    types.push(strip_banner(SkillLevel::export_to_string()?));
    types.push(strip_banner(Skill::export_to_string()?));
    types.push(strip_banner(CreateSkillRequest::export_to_string()?));
    types.push(strip_banner(UpdateSkillRequest::export_to_string()?));
    types.push(strip_banner(SkillsResponse::export_to_string()?));

    // Project types
    types.push(strip_banner(Project::export_to_string()?));
    types.push(strip_banner(CreateProjectRequest::export_to_string()?));
    types.push(strip_banner(UpdateProjectRequest::export_to_string()?));
    types.push(strip_banner(ProjectsResponse::export_to_string()?));

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../web/src/api-types"));
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    fs::write(&output_path, types.join("\n\n"))?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// Drops the generated-file banner and per-type imports, since every type
/// ends up in the same file.
fn strip_banner(type_def: String) -> String {
    let kept: Vec<&str> = type_def
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = kept.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
