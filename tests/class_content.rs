//! 班级内容资源的存储层测试：资料、公告、考勤、提交评分

mod common;

use common::{create_class, create_user, test_storage};
use vstep_classroom_next::errors::ClassroomError;
use vstep_classroom_next::models::announcements::requests::CreateAnnouncementRequest;
use vstep_classroom_next::models::assignments::entities::AssignmentStatus;
use vstep_classroom_next::models::assignments::requests::CreateAssignmentRequest;
use vstep_classroom_next::models::assignments::entities::AssignmentSkill;
use vstep_classroom_next::models::materials::requests::{CreateMaterialRequest, MaterialListQuery};
use vstep_classroom_next::models::schedules::entities::AttendanceStatus;
use vstep_classroom_next::models::schedules::requests::{
    AttendanceItem, CreateScheduleRequest, MarkAttendanceRequest, ScheduleListQuery,
};
use vstep_classroom_next::models::submissions::entities::SubmissionStatus;
use vstep_classroom_next::models::submissions::requests::{
    GradeSubmissionRequest, SubmitAssignmentRequest,
};
use vstep_classroom_next::models::users::entities::UserRole;
use vstep_classroom_next::storage::Storage;

fn material_request(title: &str, visible: bool) -> CreateMaterialRequest {
    CreateMaterialRequest {
        title: title.to_string(),
        description: None,
        material_type: None,
        file_url: Some(format!("https://files.example.com/{title}.pdf")),
        file_name: Some(format!("{title}.pdf")),
        file_size: Some(1024),
        mime_type: Some("application/pdf".to_string()),
        is_visible: Some(visible),
    }
}

#[tokio::test]
async fn material_download_counter_increments() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_mat", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    let material = storage
        .create_material(class.id, teacher.id, material_request("reading-b1", true))
        .await
        .unwrap();
    assert_eq!(material.download_count, 0);

    storage
        .record_material_download(class.id, material.id)
        .await
        .unwrap();
    let updated = storage
        .record_material_download(class.id, material.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.download_count, 2);
}

#[tokio::test]
async fn material_listing_honors_visibility_filter() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_vis", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    storage
        .create_material(class.id, teacher.id, material_request("visible-doc", true))
        .await
        .unwrap();
    storage
        .create_material(class.id, teacher.id, material_request("hidden-doc", false))
        .await
        .unwrap();

    let all = storage
        .list_materials(
            class.id,
            MaterialListQuery {
                page: 1,
                limit: 10,
                visible_only: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(all.pagination.total, 2);

    let visible = storage
        .list_materials(
            class.id,
            MaterialListQuery {
                page: 1,
                limit: 10,
                visible_only: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(visible.pagination.total, 1);
    assert_eq!(visible.items[0].title, "visible-doc");
}

#[tokio::test]
async fn pinned_announcements_sort_first() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_ann", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    storage
        .create_announcement(
            class.id,
            teacher.id,
            CreateAnnouncementRequest {
                title: "Ordinary notice".to_string(),
                content: "Lesson plan for next week".to_string(),
                is_pinned: false,
            },
        )
        .await
        .unwrap();
    let pinned = storage
        .create_announcement(
            class.id,
            teacher.id,
            CreateAnnouncementRequest {
                title: "Exam date".to_string(),
                content: "Mock exam on Saturday".to_string(),
                is_pinned: true,
            },
        )
        .await
        .unwrap();

    let listing = storage.list_announcements(class.id, 1, 10).await.unwrap();
    assert_eq!(listing.items.len(), 2);
    assert_eq!(listing.items[0].id, pinned.id);
    assert!(listing.items[0].is_pinned);
}

#[tokio::test]
async fn attendance_marking_upserts_per_student_and_date() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_att", UserRole::Teacher).await;
    let student = create_user(&storage, "student_att", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    storage.enroll_student(class.id, student.id).await.unwrap();

    let mark = |status: AttendanceStatus| MarkAttendanceRequest {
        session_date: "2026-03-02".to_string(),
        records: vec![AttendanceItem {
            student_id: student.id,
            status,
            note: None,
        }],
    };

    storage
        .mark_attendance(class.id, teacher.id, mark(AttendanceStatus::Absent))
        .await
        .unwrap();
    // 同一天重复点名覆盖旧状态，不产生重复行
    storage
        .mark_attendance(class.id, teacher.id, mark(AttendanceStatus::Late))
        .await
        .unwrap();

    let listing = storage
        .list_attendance(
            class.id,
            ScheduleListQuery {
                page: 1,
                limit: 10,
                month: Some("2026-03".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(listing.pagination.total, 1);
    assert_eq!(listing.items[0].status, AttendanceStatus::Late);
}

#[tokio::test]
async fn schedule_month_filter_limits_results() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_sch", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    for (date, title) in [("2026-03-07", "March session"), ("2026-04-04", "April session")] {
        storage
            .create_schedule(
                class.id,
                CreateScheduleRequest {
                    title: title.to_string(),
                    description: None,
                    date: date.to_string(),
                    start_time: "19:00".to_string(),
                    end_time: "21:00".to_string(),
                    location: None,
                    zoom_link: Some("https://zoom.example.com/vstep".to_string()),
                    notes: None,
                },
            )
            .await
            .unwrap();
    }

    let march = storage
        .list_schedules(
            class.id,
            ScheduleListQuery {
                page: 1,
                limit: 10,
                month: Some("2026-03".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(march.pagination.total, 1);
    assert_eq!(march.items[0].title, "March session");
}

#[tokio::test]
async fn submission_grading_lifecycle() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_sub", UserRole::Teacher).await;
    let student = create_user(&storage, "student_sub", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;
    storage.enroll_student(class.id, student.id).await.unwrap();

    let assignment = storage
        .create_assignment(
            class.id,
            teacher.id,
            CreateAssignmentRequest {
                title: "Writing task 1".to_string(),
                description: Some("Describe the chart".to_string()),
                skill: AssignmentSkill::Writing,
                due_date: None,
                total_points: Some(10.0),
                status: Some(AssignmentStatus::Published),
            },
        )
        .await
        .unwrap();

    let submission = storage
        .submit_assignment(
            assignment.id,
            student.id,
            SubmitAssignmentRequest {
                content: "The chart shows...".to_string(),
                word_count: Some(182),
            },
        )
        .await
        .unwrap();
    assert_eq!(submission.status, SubmissionStatus::Pending);

    // 未评分可以覆盖重交，记录 ID 不变
    let resubmitted = storage
        .submit_assignment(
            assignment.id,
            student.id,
            SubmitAssignmentRequest {
                content: "The chart illustrates...".to_string(),
                word_count: Some(195),
            },
        )
        .await
        .unwrap();
    assert_eq!(resubmitted.id, submission.id);

    let graded = storage
        .grade_submission(
            submission.id,
            teacher.id,
            GradeSubmissionRequest {
                score: 7.5,
                feedback: Some("Good structure, work on linking words".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(graded.status, SubmissionStatus::Graded);
    assert_eq!(graded.score, Some(7.5));
    assert_eq!(graded.graded_by, Some(teacher.id));

    // 已评分拒绝再次评分与重交
    let err = storage
        .grade_submission(
            submission.id,
            teacher.id,
            GradeSubmissionRequest {
                score: 8.0,
                feedback: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));

    let err = storage
        .submit_assignment(
            assignment.id,
            student.id,
            SubmitAssignmentRequest {
                content: "Third attempt".to_string(),
                word_count: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
}

#[tokio::test]
async fn overview_report_counts_by_status_and_level() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_rep", UserRole::Teacher).await;
    let student = create_user(&storage, "student_rep", UserRole::Student).await;

    let _draft = create_class(&storage, teacher.id, 30).await;
    let active = create_class(&storage, teacher.id, 30).await;
    storage.activate_class(active.id).await.unwrap();
    storage.enroll_student(active.id, student.id).await.unwrap();

    let report = storage.overview_report().await.unwrap();
    assert_eq!(report.total_classes, 2);
    assert_eq!(report.draft_classes, 1);
    assert_eq!(report.active_classes, 1);
    assert_eq!(report.total_enrollments, 1);
    // 测试数据默认 B1
    assert_eq!(report.level_distribution.len(), 1);
    assert_eq!(report.level_distribution[0].level, "B1");
    assert_eq!(report.level_distribution[0].count, 2);
}
