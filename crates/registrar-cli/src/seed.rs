// Startup seed data

use registrar_config::{AppConfig, SeedConfig};
use registrar_core::{NewCourse, Registry};
use tracing::info;

use crate::error::CliResult;

/// How many records seeding added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub courses: usize,
    pub students: usize,
}

/// Load the configured courses and students into `registry`, in order.
///
/// Goes through the ordinary registry entry points, so a seed that collides
/// with existing records fails the same way a user command would.
pub fn seed_registry(registry: &mut Registry, seed: &SeedConfig) -> CliResult<SeedSummary> {
    if !seed.enabled {
        return Ok(SeedSummary::default());
    }

    for course in &seed.courses {
        registry.add_course(NewCourse::new(
            course.id.clone(),
            course.name.clone(),
            course.credits,
            course.capacity,
        ))?;
    }
    for student in &seed.students {
        registry.add_student(student.id, student.name.clone())?;
    }

    let summary = SeedSummary {
        courses: seed.courses.len(),
        students: seed.students.len(),
    };
    info!(courses = summary.courses, students = summary.students, "registry seeded");
    Ok(summary)
}

/// A fresh registry, seeded unless `no_seed` is set
pub fn build_registry(config: &AppConfig, no_seed: bool) -> CliResult<Registry> {
    let mut registry = Registry::new();
    if !no_seed {
        seed_registry(&mut registry, &config.seed)?;
    }
    Ok(registry)
}
