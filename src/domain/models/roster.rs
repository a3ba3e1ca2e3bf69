// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::member::{DomainError, Member};
use super::team::Team;
use std::collections::HashMap;
use uuid::Uuid;

/// 花名册
///
/// 以ID为键存放成员与团队记录，是双向关联的唯一修改入口。
/// 成员与团队互相通过ID引用而非对象指针，因此不存在引用环；
/// 所有变更操作同时更新关联的两侧，保证以下不变式始终成立：
/// `member.team_id == Some(t)` 当且仅当 `t.member_ids` 包含该成员。
#[derive(Debug, Default, Clone)]
pub struct Roster {
    members: HashMap<Uuid, Member>,
    teams: HashMap<Uuid, Team>,
}

impl Roster {
    /// 创建一个空的花名册
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个团队
    ///
    /// # 返回值
    ///
    /// 返回该团队的ID
    pub fn add_team(&mut self, team: Team) -> Uuid {
        let id = team.id;
        self.teams.insert(id, team);
        id
    }

    /// 登记一个成员，并可选地立即加入某团队
    ///
    /// # 参数
    ///
    /// * `member` - 成员记录
    /// * `team_id` - 可选的初始团队
    ///
    /// # 返回值
    ///
    /// * `Ok(Uuid)` - 成员ID
    /// * `Err(DomainError)` - 指定的团队不存在
    pub fn add_member(
        &mut self,
        member: Member,
        team_id: Option<Uuid>,
    ) -> Result<Uuid, DomainError> {
        let id = member.id;
        self.members.insert(id, member);
        if let Some(team_id) = team_id {
            self.assign_team(id, team_id)?;
        }
        Ok(id)
    }

    /// 变更成员所属团队
    ///
    /// 一次调用内完成三步：从原团队的成员集合移除、加入新团队
    /// 的成员集合、更新成员侧外键。任何一步失败都不会留下只改了
    /// 一侧的状态。
    ///
    /// # 参数
    ///
    /// * `member_id` - 成员ID
    /// * `team_id` - 目标团队ID
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 关联两侧均已更新
    /// * `Err(DomainError)` - 成员或团队不存在
    pub fn assign_team(&mut self, member_id: Uuid, team_id: Uuid) -> Result<(), DomainError> {
        if !self.members.contains_key(&member_id) {
            return Err(DomainError::UnknownMember(member_id));
        }
        if !self.teams.contains_key(&team_id) {
            return Err(DomainError::UnknownTeam(team_id));
        }

        self.unlink(member_id);

        // Both lookups were validated above; the two sides change together.
        if let Some(member) = self.members.get_mut(&member_id) {
            member.team_id = Some(team_id);
        }
        if let Some(team) = self.teams.get_mut(&team_id) {
            team.member_ids.push(member_id);
        }

        Ok(())
    }

    /// 将成员移出当前团队
    ///
    /// # 参数
    ///
    /// * `member_id` - 成员ID
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 成员已脱离团队（原本无团队也视为成功）
    /// * `Err(DomainError)` - 成员不存在
    pub fn detach_team(&mut self, member_id: Uuid) -> Result<(), DomainError> {
        if !self.members.contains_key(&member_id) {
            return Err(DomainError::UnknownMember(member_id));
        }
        self.unlink(member_id);
        Ok(())
    }

    /// 查找成员
    pub fn member(&self, member_id: Uuid) -> Option<&Member> {
        self.members.get(&member_id)
    }

    /// 查找团队
    pub fn team(&self, team_id: Uuid) -> Option<&Team> {
        self.teams.get(&team_id)
    }

    /// 成员当前所属的团队
    pub fn team_of(&self, member_id: Uuid) -> Option<&Team> {
        let team_id = self.members.get(&member_id)?.team_id?;
        self.teams.get(&team_id)
    }

    /// 团队的成员ID集合
    pub fn members_of(&self, team_id: Uuid) -> &[Uuid] {
        self.teams
            .get(&team_id)
            .map(|t| t.member_ids.as_slice())
            .unwrap_or(&[])
    }

    // 清除两侧的现有关联
    fn unlink(&mut self, member_id: Uuid) {
        let Some(member) = self.members.get_mut(&member_id) else {
            return;
        };
        if let Some(old_team_id) = member.team_id.take() {
            if let Some(old_team) = self.teams.get_mut(&old_team_id) {
                old_team.member_ids.retain(|id| *id != member_id);
            }
        }
    }
}
