//! 讲师页面

mod analytics;
mod announcements;
mod assignments;
mod courses;
mod create_assignment;
mod create_course;
mod create_material;
mod dashboard;
mod grading;
mod materials;

pub use analytics::CourseAnalyticsPage;
pub use announcements::CreateAnnouncementPage;
pub use assignments::InstructorAssignmentsPage;
pub use courses::InstructorCoursesPage;
pub use create_assignment::CreateAssignmentPage;
pub use create_course::CreateCoursePage;
pub use create_material::CreateMaterialPage;
pub use dashboard::InstructorDashboardPage;
pub use grading::GradeSubmissionsPage;
pub use materials::CourseMaterialsPage;
