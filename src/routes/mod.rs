pub mod admin;

pub mod announcements;

pub mod assignments;

pub mod auth;

pub mod class_students;

pub mod classes;

pub mod materials;

pub mod schedules;

pub mod student;

pub mod submissions;

pub mod users;

pub use admin::configure_admin_routes;
pub use announcements::configure_announcement_routes;
pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use class_students::configure_class_student_routes;
pub use classes::configure_classes_routes;
pub use materials::configure_material_routes;
pub use schedules::configure_schedule_routes;
pub use student::configure_student_routes;
pub use submissions::configure_submission_routes;
pub use users::configure_user_routes;
