// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::application::dto::member_team_dto::MemberTeamDto;
use crate::domain::models::member::Member;
use async_trait::async_trait;
use uuid::Uuid;

/// 成员搜索条件
///
/// 所有字段均为可选；未设置的字段不施加任何过滤约束。
#[derive(Debug, Default, Clone)]
pub struct MemberSearchCondition {
    /// 用户名等值过滤
    pub username: Option<String>,
    /// 所属团队名称等值过滤
    pub team_name: Option<String>,
    /// 年龄下界（大于等于）
    pub age_goe: Option<i32>,
    /// 年龄上界（小于等于）
    pub age_loe: Option<i32>,
}

/// 成员仓库特质
///
/// 定义成员数据访问接口
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 创建新成员
    async fn create(&self, member: &Member) -> Result<Member, RepositoryError>;
    /// 根据ID查找成员
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, RepositoryError>;
    /// 根据用户名查找成员
    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, RepositoryError>;
    /// 查找所有成员
    async fn find_all(&self) -> Result<Vec<Member>, RepositoryError>;
    /// 更新成员
    async fn update(&self, member: &Member) -> Result<Member, RepositoryError>;
    /// 根据ID删除成员
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 统计成员总数
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// 变更成员所属团队（传入None表示移出团队）
    async fn assign_team(
        &self,
        member_id: Uuid,
        team_id: Option<Uuid>,
    ) -> Result<(), RepositoryError>;
    /// 按条件搜索，返回成员与团队的扁平化投影
    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamDto>, RepositoryError>;
    /// 按条件分页搜索，返回当前页数据与总行数
    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<MemberTeamDto>, u64), RepositoryError>;
}
