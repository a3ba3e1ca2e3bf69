// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 成员与团队的联接扁平化投影
///
/// 搜索接口的返回行。成员未归属团队时，团队字段为 `None`。
/// 该结构只是一种读取形状，不反向引用任何源实体。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct MemberTeamDto {
    /// 成员ID
    pub member_id: Uuid,
    /// 用户名
    pub username: Option<String>,
    /// 年龄
    pub age: i32,
    /// 团队ID（无团队时为空）
    pub team_id: Option<Uuid>,
    /// 团队名称（无团队时为空）
    pub team_name: Option<String>,
}
