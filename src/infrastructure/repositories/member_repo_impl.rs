// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::application::dto::member_team_dto::MemberTeamDto;
use crate::domain::models::member::Member;
use crate::domain::repositories::member_repository::{MemberRepository, MemberSearchCondition};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::{member as member_entity, team as team_entity};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 成员仓库实现
///
/// 基于SeaORM实现的成员数据访问层
#[derive(Clone)]
pub struct MemberRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl MemberRepositoryImpl {
    /// 创建新的成员仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的成员仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<member_entity::Model> for Member {
    fn from(model: member_entity::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            age: model.age,
            team_id: model.team_id,
        }
    }
}

impl From<Member> for member_entity::ActiveModel {
    fn from(member: Member) -> Self {
        Self {
            id: Set(member.id),
            username: Set(member.username.clone()),
            age: Set(member.age),
            team_id: Set(member.team_id),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        }
    }
}

/// 按单个条件构建等值/范围谓词
///
/// 条件未设置时返回 `None`，表示"无谓词"。这些函数只负责
/// 单个条件；空缺条件的吞并交由 `search_filters` 处理。
fn username_eq(condition: &MemberSearchCondition) -> Option<SimpleExpr> {
    condition
        .username
        .as_deref()
        .map(|username| member_entity::Column::Username.eq(username))
}

fn team_name_eq(condition: &MemberSearchCondition) -> Option<SimpleExpr> {
    condition
        .team_name
        .as_deref()
        .map(|name| team_entity::Column::Name.eq(name))
}

fn age_goe(condition: &MemberSearchCondition) -> Option<SimpleExpr> {
    condition.age_goe.map(|age| member_entity::Column::Age.gte(age))
}

fn age_loe(condition: &MemberSearchCondition) -> Option<SimpleExpr> {
    condition.age_loe.map(|age| member_entity::Column::Age.lte(age))
}

/// 将搜索条件组合为合取过滤器
///
/// `add_option` 会忽略 `None`，因此空缺条件不会让组合失败；
/// 所有条件均空缺时得到合法的空过滤器（匹配全部行），
/// 之后仍可继续 `add` 其他谓词。
pub fn search_filters(condition: &MemberSearchCondition) -> Condition {
    Condition::all()
        .add_option(username_eq(condition))
        .add_option(team_name_eq(condition))
        .add_option(age_goe(condition))
        .add_option(age_loe(condition))
}

/// 构建搜索查询的公共部分：左联接团队并扁平化投影
fn search_select(
    condition: &MemberSearchCondition,
) -> sea_orm::Select<member_entity::Entity> {
    member_entity::Entity::find()
        .select_only()
        .column_as(member_entity::Column::Id, "member_id")
        .column(member_entity::Column::Username)
        .column(member_entity::Column::Age)
        .column_as(team_entity::Column::Id, "team_id")
        .column_as(team_entity::Column::Name, "team_name")
        .join(JoinType::LeftJoin, member_entity::Relation::Team.def())
        .filter(search_filters(condition))
}

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn create(&self, member: &Member) -> Result<Member, RepositoryError> {
        let model: member_entity::ActiveModel = member.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(member.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, RepositoryError> {
        let model = member_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, RepositoryError> {
        let models = member_entity::Entity::find()
            .filter(member_entity::Column::Username.eq(username))
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Member::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<Member>, RepositoryError> {
        let models = member_entity::Entity::find().all(self.db.as_ref()).await?;

        Ok(models.into_iter().map(Member::from).collect())
    }

    async fn update(&self, member: &Member) -> Result<Member, RepositoryError> {
        // created_at stays NotSet so the original insert timestamp is kept
        let model = member_entity::ActiveModel {
            id: Set(member.id),
            username: Set(member.username.clone()),
            age: Set(member.age),
            team_id: Set(member.team_id),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let updated = model.update(self.db.as_ref()).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepositoryError::NotFound,
            other => RepositoryError::Database(other),
        })?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = member_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = member_entity::Entity::find().count(self.db.as_ref()).await?;
        Ok(count)
    }

    async fn assign_team(
        &self,
        member_id: Uuid,
        team_id: Option<Uuid>,
    ) -> Result<(), RepositoryError> {
        // Single UPDATE on the owning side; the inverse collection is
        // derived from the foreign key, so both sides stay consistent.
        let result = member_entity::Entity::update_many()
            .col_expr(member_entity::Column::TeamId, Expr::value(team_id))
            .col_expr(
                member_entity::Column::UpdatedAt,
                Expr::value(chrono::DateTime::<chrono::FixedOffset>::from(Utc::now())),
            )
            .filter(member_entity::Column::Id.eq(member_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamDto>, RepositoryError> {
        let rows = search_select(condition)
            .into_model::<MemberTeamDto>()
            .all(self.db.as_ref())
            .await?;

        tracing::debug!(rows = rows.len(), "member search finished");
        Ok(rows)
    }

    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<MemberTeamDto>, u64), RepositoryError> {
        let paginator = search_select(condition)
            .into_model::<MemberTeamDto>()
            .paginate(self.db.as_ref(), page_size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((rows, total))
    }
}
