//! 学生页面

mod assignments;
mod dashboard;
mod my_courses;
mod submit;

pub use assignments::StudentAssignmentsPage;
pub use dashboard::StudentDashboardPage;
pub use my_courses::MyCoursesPage;
pub use submit::SubmitAssignmentPage;
