//! 报名管理的存储层测试：容量、唯一性、重新激活、批量报名

mod common;

use common::{create_class, create_user, test_storage};
use vstep_classroom_next::errors::ClassroomError;
use vstep_classroom_next::models::class_students::entities::EnrollmentStatus;
use vstep_classroom_next::models::class_students::requests::UpdateEnrollmentRequest;
use vstep_classroom_next::models::users::entities::UserRole;
use vstep_classroom_next::storage::Storage;

#[tokio::test]
async fn capacity_limit_rejects_enrollment_when_full() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_cap", UserRole::Teacher).await;
    let a = create_user(&storage, "student_cap_a", UserRole::Student).await;
    let b = create_user(&storage, "student_cap_b", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 1).await;

    let enrollment = storage.enroll_student(class.id, a.id).await.unwrap();
    assert_eq!(enrollment.status, EnrollmentStatus::Active);

    let err = storage.enroll_student(class.id, b.id).await.unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
    assert_eq!(err.message(), "Class is full");
}

#[tokio::test]
async fn inactive_enrollments_count_against_capacity() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_ina", UserRole::Teacher).await;
    let a = create_user(&storage, "student_ina_a", UserRole::Student).await;
    let b = create_user(&storage, "student_ina_b", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 1).await;

    storage.enroll_student(class.id, a.id).await.unwrap();
    storage
        .update_enrollment(
            class.id,
            a.id,
            UpdateEnrollmentRequest {
                status: Some(EnrollmentStatus::Inactive),
                progress: None,
            },
        )
        .await
        .unwrap();

    // inactive 仍占名额
    let err = storage.enroll_student(class.id, b.id).await.unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
}

#[tokio::test]
async fn dropped_enrollments_free_capacity() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_free", UserRole::Teacher).await;
    let a = create_user(&storage, "student_free_a", UserRole::Student).await;
    let b = create_user(&storage, "student_free_b", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 1).await;

    storage.enroll_student(class.id, a.id).await.unwrap();
    storage.drop_enrollment(class.id, a.id, None).await.unwrap();

    // dropped 不占名额
    let enrollment = storage.enroll_student(class.id, b.id).await.unwrap();
    assert_eq!(enrollment.status, EnrollmentStatus::Active);
}

#[tokio::test]
async fn duplicate_enrollment_is_rejected() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_dup", UserRole::Teacher).await;
    let student = create_user(&storage, "student_dup", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    storage.enroll_student(class.id, student.id).await.unwrap();

    let err = storage
        .enroll_student(class.id, student.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
    assert_eq!(err.message(), "Student is already enrolled in this class");
}

#[tokio::test]
async fn reenrollment_reactivates_same_record() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_re", UserRole::Teacher).await;
    let student = create_user(&storage, "student_re", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    let original = storage.enroll_student(class.id, student.id).await.unwrap();
    let dropped = storage
        .drop_enrollment(class.id, student.id, Some(teacher.id))
        .await
        .unwrap();
    assert_eq!(dropped.id, original.id);
    assert_eq!(dropped.status, EnrollmentStatus::Dropped);
    assert!(dropped.removed_at.is_some());
    assert_eq!(dropped.removed_by, Some(teacher.id));

    // 重新报名复用原记录并清除退课痕迹
    let reenrolled = storage.enroll_student(class.id, student.id).await.unwrap();
    assert_eq!(reenrolled.id, original.id);
    assert_eq!(reenrolled.status, EnrollmentStatus::Active);
    assert!(reenrolled.removed_at.is_none());
    assert!(reenrolled.removed_by.is_none());
}

#[tokio::test]
async fn enrollment_requires_existing_student() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_ghost", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    let err = storage.enroll_student(class.id, 424242).await.unwrap_err();
    assert!(matches!(err, ClassroomError::NotFound(_)));
}

#[tokio::test]
async fn enrollment_rejected_for_completed_class() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_done", UserRole::Teacher).await;
    let student = create_user(&storage, "student_done", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    storage.activate_class(class.id).await.unwrap();
    storage.complete_class(class.id).await.unwrap();

    let err = storage
        .enroll_student(class.id, student.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
}

#[tokio::test]
async fn join_by_code_requires_active_class() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_join", UserRole::Teacher).await;
    let student = create_user(&storage, "student_join", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    // draft 班级的邀请码无效
    let err = storage
        .join_class_by_code(student.id, &class.invite_code)
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::NotFound(_)));

    storage.activate_class(class.id).await.unwrap();
    let enrollment = storage
        .join_class_by_code(student.id, &class.invite_code)
        .await
        .unwrap();
    assert_eq!(enrollment.class_id, class.id);
    assert_eq!(enrollment.status, EnrollmentStatus::Active);
}

#[tokio::test]
async fn join_by_code_respects_capacity() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_jcap", UserRole::Teacher).await;
    let a = create_user(&storage, "student_jcap_a", UserRole::Student).await;
    let b = create_user(&storage, "student_jcap_b", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 1).await;
    storage.activate_class(class.id).await.unwrap();

    storage
        .join_class_by_code(a.id, &class.invite_code)
        .await
        .unwrap();

    let err = storage
        .join_class_by_code(b.id, &class.invite_code)
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
}

#[tokio::test]
async fn bulk_enroll_collects_per_item_failures() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_bulk", UserRole::Teacher).await;
    let mut ids = Vec::new();
    for i in 0..5 {
        let student =
            create_user(&storage, &format!("student_bulk_{i}"), UserRole::Student).await;
        ids.push(student.id);
    }
    let class = create_class(&storage, teacher.id, 30).await;

    // 预先报名其中一个，批量时应作为失败项出现
    storage.enroll_student(class.id, ids[2]).await.unwrap();

    let result = storage.bulk_enroll(class.id, &ids).await.unwrap();
    assert_eq!(result.success.len(), 4);
    assert_eq!(result.failed.len(), 1);
    assert_eq!(result.failed[0].student_id, ids[2]);
    assert!(
        result.failed[0].reason.contains("already enrolled"),
        "unexpected failure reason: {}",
        result.failed[0].reason
    );
}

#[tokio::test]
async fn drop_missing_enrollment_is_not_found() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_miss", UserRole::Teacher).await;
    let student = create_user(&storage, "student_miss", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    let err = storage
        .drop_enrollment(class.id, student.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::NotFound(_)));
}

#[tokio::test]
async fn student_class_listing_only_returns_active_enrollments() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_list", UserRole::Teacher).await;
    let student = create_user(&storage, "student_list", UserRole::Student).await;
    let class_a = create_class(&storage, teacher.id, 30).await;
    let class_b = create_class(&storage, teacher.id, 30).await;

    storage.enroll_student(class_a.id, student.id).await.unwrap();
    storage.enroll_student(class_b.id, student.id).await.unwrap();
    storage
        .drop_enrollment(class_b.id, student.id, None)
        .await
        .unwrap();

    let listing = storage.list_student_classes(student.id, 1, 10).await.unwrap();
    assert_eq!(listing.pagination.total, 1);
    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0].class.id, class_a.id);
}
