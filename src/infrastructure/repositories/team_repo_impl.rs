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

use crate::domain::models::member::Member;
use crate::domain::models::team::Team;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::{member as member_entity, team as team_entity};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

/// 团队仓库实现
///
/// 基于SeaORM实现的团队数据访问层。领域侧的 `member_ids`
/// 反向集合在读取时由成员表的外键推导得出。
#[derive(Clone)]
pub struct TeamRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TeamRepositoryImpl {
    /// 创建新的团队仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的团队仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: team_entity::Model, members: Vec<member_entity::Model>) -> Team {
    Team {
        id: model.id,
        name: model.name,
        member_ids: members.into_iter().map(|m| m.id).collect(),
    }
}

impl From<Team> for team_entity::ActiveModel {
    fn from(team: Team) -> Self {
        Self {
            id: Set(team.id),
            name: Set(team.name.clone()),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        }
    }
}

#[async_trait]
impl TeamRepository for TeamRepositoryImpl {
    async fn create(&self, team: &Team) -> Result<Team, RepositoryError> {
        let model: team_entity::ActiveModel = team.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(team.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let Some(model) = team_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let members = model
            .find_related(member_entity::Entity)
            .all(self.db.as_ref())
            .await?;

        Ok(Some(to_domain(model, members)))
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        // One joined query loads every team together with its members
        let rows = team_entity::Entity::find()
            .find_with_related(member_entity::Entity)
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(team, members)| to_domain(team, members))
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = team_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_members(&self, team_id: Uuid) -> Result<Vec<Member>, RepositoryError> {
        let team = team_entity::Entity::find_by_id(team_id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let members = team
            .find_related(member_entity::Entity)
            .all(self.db.as_ref())
            .await?;

        Ok(members.into_iter().map(Member::from).collect())
    }
}
