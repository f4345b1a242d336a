//! Show command handler

use super::fetch_roadmap;
use roadmap_browser::config::Config;
use roadmap_browser::core::modal::CourseDetail;
use roadmap_browser::core::models::Roadmap;
use std::fmt::Write;

/// Run the show command: print one course's detail view as text
pub async fn run(config: &Config, course_name: &str) {
    match fetch_roadmap(config)
        .await
        .and_then(|roadmap| describe(&roadmap, course_name))
    {
        Ok(text) => print!("{text}"),
        Err(e) => eprintln!("{e}"),
    }
}

/// Text rendering of a course's detail view
fn describe(roadmap: &Roadmap, course_name: &str) -> Result<String, String> {
    let (id, course) = roadmap
        .find_course(course_name)
        .ok_or_else(|| format!("✗ No course named '{course_name}'"))?;
    let detail = CourseDetail::from(course);
    let specialization = &roadmap.specializations[id.specialization].name;

    let mut text = format!("{} ({specialization})\n\n{}\n", detail.title, detail.description);
    if let Some(url) = &detail.video_url {
        let _ = writeln!(text, "\nCourse Video: {url}");
    }
    if !detail.lectures.is_empty() {
        text.push_str("\nLectures:\n");
        for lecture in &detail.lectures {
            let _ = writeln!(text, "  - {lecture}");
        }
    }
    Ok(text)
}
