// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 团队实体
///
/// 表示一个团队。`member_ids` 是关联的反向集合，由成员侧的
/// `team_id` 外键映射而来，仅通过花名册（Roster）的操作维护。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// 团队唯一标识符
    pub id: Uuid,
    /// 团队名称
    pub name: String,
    /// 团队成员ID集合（反向侧）
    pub member_ids: Vec<Uuid>,
}

impl Team {
    /// 创建一个新的团队
    ///
    /// # 参数
    ///
    /// * `name` - 团队名称
    ///
    /// # 返回值
    ///
    /// 返回新创建的团队实例，成员集合为空
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            member_ids: Vec::new(),
        }
    }
}
