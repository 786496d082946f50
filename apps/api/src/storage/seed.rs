//! Demo catalog, seeded lazily when the scholarship table is empty.

use tracing::info;

use crate::models::scholarship::{NewScholarship, ScholarshipFilter, ScholarshipType};

use super::{Storage, StorageResult};

/// Seeds the demo catalog if no active scholarship exists yet. Called from
/// the catalog listing and match generation paths so a fresh deployment
/// always has something to score.
pub async fn ensure_seeded(storage: &dyn Storage) -> StorageResult<()> {
    let existing = storage
        .list_scholarships(&ScholarshipFilter::default())
        .await?;
    if !existing.is_empty() {
        return Ok(());
    }

    let catalog = demo_catalog();
    let count = catalog.len();
    for scholarship in catalog {
        storage.create_scholarship(scholarship).await?;
    }
    info!("Seeded {count} demo scholarships");
    Ok(())
}

fn entry(
    title: &str,
    organization: &str,
    amount: &str,
    deadline: &str,
    description: &str,
    requirements: &str,
    tags: &[&str],
    scholarship_type: ScholarshipType,
    eligibility_gpa: Option<&str>,
    eligible_fields: Option<&[&str]>,
    eligible_levels: Option<&[&str]>,
) -> NewScholarship {
    NewScholarship {
        title: title.to_string(),
        organization: organization.to_string(),
        amount: amount.to_string(),
        deadline: deadline.to_string(),
        description: description.to_string(),
        requirements: requirements.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        scholarship_type,
        eligibility_gpa: eligibility_gpa.map(String::from),
        eligible_fields: eligible_fields.map(|f| f.iter().map(|s| s.to_string()).collect()),
        eligible_levels: eligible_levels.map(|l| l.iter().map(|s| s.to_string()).collect()),
    }
}

pub fn demo_catalog() -> Vec<NewScholarship> {
    vec![
        entry(
            "Google Computer Science Scholarship",
            "Google Inc.",
            "$10,000",
            "2025-03-15",
            "Supporting underrepresented students in computer science and technology fields.",
            "3.5+ GPA, demonstrated leadership, passion for computer science",
            &["technology", "computer-science", "diversity", "leadership"],
            ScholarshipType::MeritBased,
            Some("3.5"),
            Some(&["Computer Science", "Software Engineering", "Information Technology"]),
            Some(&["undergraduate-sophomore", "undergraduate-junior", "undergraduate-senior"]),
        ),
        entry(
            "Society of Women Engineers Scholarship",
            "Society of Women Engineers",
            "$15,000",
            "2025-02-15",
            "Empowering women in engineering and technology fields.",
            "Female student, 3.5+ GPA, engineering major",
            &["engineering", "women", "stem", "leadership"],
            ScholarshipType::MeritBased,
            Some("3.5"),
            Some(&[
                "Mechanical Engineering",
                "Electrical Engineering",
                "Civil Engineering",
                "Chemical Engineering",
            ]),
            Some(&["undergraduate-sophomore", "undergraduate-junior", "undergraduate-senior"]),
        ),
        entry(
            "IEEE Foundation Scholarship",
            "Institute of Electrical and Electronics Engineers",
            "$8,000",
            "2025-03-30",
            "Supporting students pursuing electrical engineering and computer science.",
            "IEEE student membership, strong academic performance",
            &["engineering", "electrical", "ieee", "technology"],
            ScholarshipType::MeritBased,
            Some("3.2"),
            Some(&["Electrical Engineering", "Computer Engineering", "Computer Science"]),
            Some(&["undergraduate-sophomore", "undergraduate-junior", "undergraduate-senior"]),
        ),
        entry(
            "Goldman Sachs Scholarship Program",
            "Goldman Sachs Group",
            "$20,000",
            "2025-03-01",
            "Comprehensive scholarship program for future finance leaders.",
            "Finance or economics major, exceptional academic record, internship experience",
            &["finance", "investment", "leadership", "economics"],
            ScholarshipType::MeritBased,
            Some("3.7"),
            Some(&["Finance", "Economics", "Business Administration"]),
            Some(&["undergraduate-senior", "graduate-masters"]),
        ),
        entry(
            "American Medical Association Scholarship",
            "American Medical Association",
            "$35,000",
            "2025-05-01",
            "Supporting future healthcare professionals and medical researchers.",
            "Pre-med or medical student, 3.8+ GPA, healthcare volunteer experience",
            &["medical", "healthcare", "research", "volunteer"],
            ScholarshipType::MeritBased,
            Some("3.8"),
            Some(&["Pre-Medicine", "Biology", "Chemistry", "Health Sciences"]),
            Some(&["undergraduate-junior", "undergraduate-senior", "graduate-masters"]),
        ),
        entry(
            "National Science Foundation STEM Scholarship",
            "National Science Foundation",
            "$22,000",
            "2025-02-28",
            "Advancing STEM education and research across all scientific disciplines.",
            "STEM major, 3.6+ GPA, research experience",
            &["stem", "research", "science", "mathematics"],
            ScholarshipType::MeritBased,
            Some("3.6"),
            Some(&["Physics", "Chemistry", "Biology", "Mathematics", "Computer Science"]),
            Some(&["undergraduate-junior", "undergraduate-senior", "graduate-masters"]),
        ),
        entry(
            "First Generation College Student Scholarship",
            "Educational Foundation",
            "$8,000",
            "2025-07-01",
            "Supporting first-generation college students pursuing higher education.",
            "First-generation college student, demonstrated financial need",
            &["first-generation", "financial-need", "education", "support"],
            ScholarshipType::NeedBased,
            Some("2.8"),
            None,
            Some(&[
                "undergraduate-freshman",
                "undergraduate-sophomore",
                "undergraduate-junior",
                "undergraduate-senior",
            ]),
        ),
        entry(
            "Minority Student Success Fund",
            "Diversity Education Alliance",
            "$12,000",
            "2025-08-15",
            "Promoting educational equity for underrepresented minority students.",
            "Underrepresented minority status, financial need, 3.0+ GPA",
            &["diversity", "minority", "equity", "financial-aid"],
            ScholarshipType::NeedBased,
            Some("3.0"),
            None,
            Some(&[
                "undergraduate-freshman",
                "undergraduate-sophomore",
                "undergraduate-junior",
                "undergraduate-senior",
            ]),
        ),
        entry(
            "NASA Summer Internship Program",
            "National Aeronautics and Space Administration",
            "$7,500",
            "2025-01-31",
            "Hands-on internship experience in aerospace engineering and space science.",
            "STEM major, 3.0+ GPA, US citizenship",
            &["internship", "aerospace", "engineering", "space"],
            ScholarshipType::Internship,
            Some("3.0"),
            Some(&[
                "Aerospace Engineering",
                "Mechanical Engineering",
                "Physics",
                "Computer Science",
            ]),
            Some(&["undergraduate-sophomore", "undergraduate-junior", "undergraduate-senior"]),
        ),
        entry(
            "Meta Software Engineering Internship",
            "Meta Platforms Inc.",
            "$12,000",
            "2025-02-10",
            "Full-time summer internship building next-generation social technology.",
            "Computer science major, strong programming skills, previous internship experience",
            &["internship", "software", "social-media", "technology"],
            ScholarshipType::Internship,
            Some("3.2"),
            Some(&["Computer Science", "Software Engineering"]),
            Some(&["undergraduate-junior", "undergraduate-senior"]),
        ),
    ]
}
