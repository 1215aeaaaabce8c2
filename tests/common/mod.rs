//! 集成测试公共辅助：内存 SQLite 上的存储实例与种子数据

use vstep_classroom_next::models::classes::entities::Class;
use vstep_classroom_next::models::classes::requests::CreateClassRequest;
use vstep_classroom_next::models::users::entities::{User, UserProfile, UserRole};
use vstep_classroom_next::models::users::requests::CreateUserRequest;
use vstep_classroom_next::storage::Storage;
use vstep_classroom_next::storage::sea_orm_storage::SeaOrmStorage;

pub async fn test_storage() -> SeaOrmStorage {
    SeaOrmStorage::new_with_url("sqlite::memory:")
        .await
        .expect("in-memory storage should initialize")
}

pub async fn create_user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            // 测试不经过登录流程，密码哈希占位即可
            password: "argon2-hash-placeholder".to_string(),
            role,
            profile: UserProfile {
                profile_name: username.to_string(),
                avatar_url: None,
            },
        })
        .await
        .expect("user creation should succeed")
}

pub async fn create_class(storage: &SeaOrmStorage, teacher_id: i64, max_students: i32) -> Class {
    storage
        .create_class(CreateClassRequest {
            teacher_id: Some(teacher_id),
            name: format!("VSTEP B1 luyện thi {teacher_id}"),
            description: None,
            level: None,
            start_date: Some("2026-03-01".to_string()),
            end_date: Some("2026-06-30".to_string()),
            max_students: Some(max_students),
        })
        .await
        .expect("class creation should succeed")
}
