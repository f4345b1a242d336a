//! List command handler

use super::fetch_roadmap;
use roadmap_browser::config::Config;
use roadmap_browser::core::render::icon_for;

/// Run the list command: print every specialization with its courses
pub async fn run(config: &Config, verbose: bool) {
    let roadmap = match fetch_roadmap(config).await {
        Ok(roadmap) => roadmap,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if roadmap.specializations.is_empty() {
        println!("No specializations found");
        return;
    }

    for specialization in &roadmap.specializations {
        println!(
            "[{}] {} ({} courses)",
            icon_for(&specialization.name),
            specialization.name,
            specialization.courses.len()
        );
        if verbose && !specialization.description.is_empty() {
            println!("    {}", specialization.description);
        }
        for course in &specialization.courses {
            let marker = if course.has_video() { " ▶" } else { "" };
            println!("  - {}{marker}", course.name);
        }
    }

    println!(
        "\n{} specializations, {} courses",
        roadmap.specializations.len(),
        roadmap.course_count()
    );
}
