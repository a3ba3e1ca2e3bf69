// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::member::Member;
use crate::domain::models::team::Team;
use async_trait::async_trait;
use uuid::Uuid;

/// 团队仓库特质
///
/// 定义团队数据访问接口
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// 创建新团队
    async fn create(&self, team: &Team) -> Result<Team, RepositoryError>;
    /// 根据ID查找团队
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError>;
    /// 查找所有团队
    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError>;
    /// 根据ID删除团队
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 查找团队的所有成员（关联的反向侧）
    async fn find_members(&self, team_id: Uuid) -> Result<Vec<Member>, RepositoryError>;
}
