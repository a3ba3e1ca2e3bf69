// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 成员实体
///
/// 表示花名册中的一个成员。成员通过 `team_id` 指向其所属团队
/// （拥有方外键），而不是直接持有团队对象，避免对象间循环引用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// 成员唯一标识符
    pub id: Uuid,
    /// 用户名（可为空）
    pub username: Option<String>,
    /// 年龄
    pub age: i32,
    /// 所属团队ID（可选外键，拥有方）
    pub team_id: Option<Uuid>,
}

/// 领域错误类型
///
/// 表示在领域层可能发生的错误情况
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// 引用了花名册中不存在的成员
    #[error("Unknown member: {0}")]
    UnknownMember(Uuid),

    /// 引用了花名册中不存在的团队
    #[error("Unknown team: {0}")]
    UnknownTeam(Uuid),
}

impl Member {
    /// 创建一个新的成员
    ///
    /// # 参数
    ///
    /// * `username` - 用户名，可为空
    /// * `age` - 年龄
    ///
    /// # 返回值
    ///
    /// 返回新创建的成员实例，尚未归属任何团队
    pub fn new(username: Option<String>, age: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            age,
            team_id: None,
        }
    }
}
