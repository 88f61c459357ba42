use async_trait::async_trait;

use crate::application::ports::{CatalogError, CourseCatalog};
use crate::domain::{Course, CourseModule};

/// Fixed course catalog, standing in for a real content source.
pub struct StaticCourseCatalog {
    courses: Vec<Course>,
}

impl StaticCourseCatalog {
    pub fn new() -> Self {
        let courses = vec![
            course(
                "cs101",
                "Introduction to Computer Science",
                &[
                    "Programming Basics",
                    "Data Structures",
                    "Algorithms Introduction",
                    "Object-Oriented Programming",
                    "Database Concepts",
                    "Web Development Basics",
                ],
            ),
            course(
                "math201",
                "Calculus II",
                &[
                    "Limits and Continuity",
                    "Derivatives",
                    "Integration Techniques",
                    "Applications of Integration",
                    "Sequences and Series",
                    "Differential Equations",
                ],
            ),
            course(
                "phys101",
                "Physics Fundamentals",
                &[
                    "Mechanics",
                    "Thermodynamics",
                    "Waves and Sound",
                    "Electricity and Magnetism",
                    "Optics",
                    "Modern Physics",
                ],
            ),
            course(
                "eng102",
                "Technical Writing",
                &[
                    "Writing Process",
                    "Research Methods",
                    "Documentation Standards",
                    "Technical Reports",
                    "Presentations",
                    "Professional Communication",
                ],
            ),
            course(
                "bus301",
                "Business Analytics",
                &[
                    "Data Analysis Fundamentals",
                    "Statistical Methods",
                    "Business Intelligence",
                    "Predictive Analytics",
                    "Dashboard Design",
                    "Decision Making",
                ],
            ),
        ];

        Self { courses }
    }
}

impl Default for StaticCourseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn course(id: &str, name: &str, module_names: &[&str]) -> Course {
    let modules = module_names
        .iter()
        .enumerate()
        .map(|(i, module_name)| CourseModule::new(format!("{}-m{}", id, i + 1), *module_name))
        .collect();
    Course::new(id, name, modules)
}

#[async_trait]
impl CourseCatalog for StaticCourseCatalog {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.courses.clone())
    }

    async fn get_course(&self, course_id: &str) -> Result<Option<Course>, CatalogError> {
        Ok(self.courses.iter().find(|c| c.id == course_id).cloned())
    }
}
