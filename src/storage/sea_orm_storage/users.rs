//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建用户（password 字段为已哈希的密码）
    pub async fn create_user_impl(&self, user: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password),
            role: Set(user.role.to_string()),
            status: Set("active".to_string()),
            profile_name: Set(Some(user.profile.profile_name)),
            avatar_url: Set(user.profile.avatar_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名或邮箱获取用户（登录用）
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.max(1) as u64;

        let mut select = Users::find();

        if let Some(role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            use sea_orm::ExprTrait;
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Column::Username
                    .contains(&escaped)
                    .or(Column::Email.contains(&escaped))
                    .or(Column::ProfileName.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户页数失败: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: limit as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(_) = self.get_user_by_id_impl(id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(password_hash) = update.password {
            // 服务层已完成哈希
            model.password_hash = Set(password_hash);
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(profile) = update.profile {
            model.profile_name = Set(Some(profile.profile_name));
            model.avatar_url = Set(profile.avatar_url);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新用户失败: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let model = ActiveModel {
            id: Set(id),
            last_login: Set(Some(chrono::Utc::now().timestamp())),
            ..Default::default()
        };

        match model.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(sea_orm::DbErr::RecordNotFound(_)) => Ok(false),
            Err(e) => Err(ClassroomError::database_operation(format!(
                "更新登录时间失败: {e}"
            ))),
        }
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<i64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count as i64)
    }
}
