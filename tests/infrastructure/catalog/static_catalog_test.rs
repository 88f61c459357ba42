use formative::application::ports::CourseCatalog;
use formative::infrastructure::catalog::StaticCourseCatalog;

#[tokio::test]
async fn given_catalog_when_listing_then_returns_five_courses_of_six_modules() {
    let catalog = StaticCourseCatalog::new();

    let courses = catalog.list_courses().await.unwrap();

    assert_eq!(courses.len(), 5);
    for course in &courses {
        assert_eq!(course.modules.len(), 6);
    }
}

#[tokio::test]
async fn given_known_id_when_fetching_course_then_returns_it_with_module_ids() {
    let catalog = StaticCourseCatalog::new();

    let course = catalog.get_course("cs101").await.unwrap().unwrap();

    assert_eq!(course.name, "Introduction to Computer Science");
    assert_eq!(course.module("cs101-m1").unwrap().name, "Programming Basics");
    assert_eq!(
        course.module("cs101-m6").unwrap().name,
        "Web Development Basics"
    );
}

#[tokio::test]
async fn given_unknown_id_when_fetching_course_then_returns_none() {
    let catalog = StaticCourseCatalog::new();

    let course = catalog.get_course("art999").await.unwrap();

    assert!(course.is_none());
}

#[tokio::test]
async fn given_course_when_looking_up_foreign_module_then_returns_none() {
    let catalog = StaticCourseCatalog::new();

    let course = catalog.get_course("math201").await.unwrap().unwrap();

    assert!(course.module("cs101-m1").is_none());
}
