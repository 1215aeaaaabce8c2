pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAnnouncementIdI64, SafeAssignmentIdI64, SafeClassIdI64, SafeInviteCode, SafeMaterialIdI64,
    SafeScheduleIdI64, SafeStudentIdI64, SafeSubmissionIdI64, SafeUserIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
