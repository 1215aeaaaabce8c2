//! 预导入模块，方便使用

pub use super::assignment_submissions::{
    ActiveModel as SubmissionActiveModel, Entity as AssignmentSubmissions,
    Model as SubmissionModel,
};
pub use super::class_announcements::{
    ActiveModel as AnnouncementActiveModel, Entity as ClassAnnouncements,
    Model as AnnouncementModel,
};
pub use super::class_assignments::{
    ActiveModel as AssignmentActiveModel, Entity as ClassAssignments, Model as AssignmentModel,
};
pub use super::class_materials::{
    ActiveModel as MaterialActiveModel, Entity as ClassMaterials, Model as MaterialModel,
};
pub use super::class_schedules::{
    ActiveModel as ScheduleActiveModel, Entity as ClassSchedules, Model as ScheduleModel,
};
pub use super::class_students::{
    ActiveModel as EnrollmentActiveModel, Entity as ClassStudents, Model as EnrollmentModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::session_attendance::{
    ActiveModel as AttendanceActiveModel, Entity as SessionAttendance, Model as AttendanceModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
