//! 班级生命周期与邀请码的存储层测试

mod common;

use std::collections::HashSet;

use common::{create_class, create_user, test_storage};
use vstep_classroom_next::errors::ClassroomError;
use vstep_classroom_next::models::class_students::entities::EnrollmentStatus;
use vstep_classroom_next::models::classes::entities::ClassStatus;
use vstep_classroom_next::models::classes::requests::UpdateClassRequest;
use vstep_classroom_next::models::users::entities::UserRole;
use vstep_classroom_next::storage::Storage;

fn no_status_update() -> UpdateClassRequest {
    UpdateClassRequest {
        name: None,
        description: None,
        level: None,
        start_date: None,
        end_date: None,
        max_students: None,
        status: None,
    }
}

#[tokio::test]
async fn invite_codes_are_unique_and_well_formed() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_codes", UserRole::Teacher).await;

    let mut codes = HashSet::new();
    for _ in 0..20 {
        let class = create_class(&storage, teacher.id, 30).await;
        assert_eq!(class.invite_code.len(), 8);
        assert!(
            class
                .invite_code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() && !"IO01".contains(c)),
            "invite code uses the unambiguous alphabet: {}",
            class.invite_code
        );
        assert!(
            codes.insert(class.invite_code.clone()),
            "duplicate invite code issued: {}",
            class.invite_code
        );
    }
}

#[tokio::test]
async fn new_classes_start_as_draft() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_draft", UserRole::Teacher).await;

    let class = create_class(&storage, teacher.id, 30).await;
    assert_eq!(class.status, ClassStatus::Draft);
}

#[tokio::test]
async fn activate_requires_draft_status() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_act", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    let activated = storage.activate_class(class.id).await.unwrap();
    assert_eq!(activated.status, ClassStatus::Active);

    // 二次激活失败
    let err = storage.activate_class(class.id).await.unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
}

#[tokio::test]
async fn complete_requires_active_status() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_cmp", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    // draft 直接 complete 被拒
    let err = storage.complete_class(class.id).await.unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));

    storage.activate_class(class.id).await.unwrap();
    let completed = storage.complete_class(class.id).await.unwrap();
    assert_eq!(completed.status, ClassStatus::Completed);
}

#[tokio::test]
async fn complete_cascades_active_enrollments() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_csc", UserRole::Teacher).await;
    let a = create_user(&storage, "student_csc_a", UserRole::Student).await;
    let b = create_user(&storage, "student_csc_b", UserRole::Student).await;
    let c = create_user(&storage, "student_csc_c", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    storage.enroll_student(class.id, a.id).await.unwrap();
    storage.enroll_student(class.id, b.id).await.unwrap();
    storage.enroll_student(class.id, c.id).await.unwrap();
    // c 退课，级联不应触碰 dropped 记录
    storage.drop_enrollment(class.id, c.id, None).await.unwrap();

    storage.activate_class(class.id).await.unwrap();
    storage.complete_class(class.id).await.unwrap();

    for student in [&a, &b] {
        let enrollment = storage
            .get_enrollment(class.id, student.id)
            .await
            .unwrap()
            .expect("enrollment should exist");
        assert_eq!(enrollment.status, EnrollmentStatus::Completed);
    }
    let dropped = storage.get_enrollment(class.id, c.id).await.unwrap().unwrap();
    assert_eq!(dropped.status, EnrollmentStatus::Dropped);
}

#[tokio::test]
async fn delete_refused_while_active_enrollments_exist() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_del", UserRole::Teacher).await;
    let student = create_user(&storage, "student_del", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    storage.enroll_student(class.id, student.id).await.unwrap();

    let err = storage.delete_class(class.id).await.unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));

    // 退课后可以删除
    storage
        .drop_enrollment(class.id, student.id, Some(teacher.id))
        .await
        .unwrap();
    assert!(storage.delete_class(class.id).await.unwrap());
    assert!(storage.get_class_by_id(class.id).await.unwrap().is_none());
}

#[tokio::test]
async fn update_rejects_illegal_status_edges() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_upd", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    // draft → completed 不是合法迁移
    let err = storage
        .update_class(
            class.id,
            UpdateClassRequest {
                status: Some(ClassStatus::Completed),
                ..no_status_update()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));

    // draft → archived 是合法的归档支路
    let archived = storage
        .update_class(
            class.id,
            UpdateClassRequest {
                status: Some(ClassStatus::Archived),
                ..no_status_update()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(archived.status, ClassStatus::Archived);

    // archived 是终态
    let err = storage
        .update_class(
            class.id,
            UpdateClassRequest {
                status: Some(ClassStatus::Active),
                ..no_status_update()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
}

#[tokio::test]
async fn invite_code_lookup_only_matches_active_classes() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_look", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;

    // draft 班级不可通过邀请码访问
    assert!(
        storage
            .get_active_class_by_code(&class.invite_code)
            .await
            .unwrap()
            .is_none()
    );

    storage.activate_class(class.id).await.unwrap();
    let found = storage
        .get_active_class_by_code(&class.invite_code)
        .await
        .unwrap()
        .expect("active class should be visible by code");
    assert_eq!(found.id, class.id);
}

#[tokio::test]
async fn regenerate_invite_code_replaces_old_code() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_regen", UserRole::Teacher).await;
    let class = create_class(&storage, teacher.id, 30).await;
    storage.activate_class(class.id).await.unwrap();

    let new_code = storage.regenerate_invite_code(class.id).await.unwrap();
    assert_ne!(new_code, class.invite_code);

    // 旧码失效，新码可用
    assert!(
        storage
            .get_active_class_by_code(&class.invite_code)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        storage
            .get_active_class_by_code(&new_code)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn class_stats_average_progress_rounds_to_one_decimal() {
    let storage = test_storage().await;
    let teacher = create_user(&storage, "teacher_stat", UserRole::Teacher).await;
    let a = create_user(&storage, "student_stat_a", UserRole::Student).await;
    let b = create_user(&storage, "student_stat_b", UserRole::Student).await;
    let c = create_user(&storage, "student_stat_c", UserRole::Student).await;
    let class = create_class(&storage, teacher.id, 30).await;

    for (student, progress) in [(&a, 10.0), (&b, 20.0), (&c, 25.0)] {
        storage.enroll_student(class.id, student.id).await.unwrap();
        storage
            .update_enrollment(
                class.id,
                student.id,
                vstep_classroom_next::models::class_students::requests::UpdateEnrollmentRequest {
                    status: None,
                    progress: Some(progress),
                },
            )
            .await
            .unwrap();
    }

    let stats = storage.class_stats(class.id).await.unwrap().unwrap();
    // (10 + 20 + 25) / 3 = 18.333... → 18.3
    assert_eq!(stats.average_progress, 18.3);
    assert_eq!(stats.completion_rate, stats.average_progress);
    assert_eq!(stats.students.active, 3);
    assert_eq!(stats.students.total, 3);
}
