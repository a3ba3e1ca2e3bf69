// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DerivePartialModel, FromQueryResult};
use serde::{Deserialize, Serialize};

/// 成员投影
///
/// 只读的扁平化读取结构，不携带任何实体关联。
/// 同时声明为成员实体的部分模型（partial model），
/// 可在查询时直接以类型安全的方式选取所需列。
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, DerivePartialModel,
)]
#[sea_orm(entity = "crate::infrastructure::database::entities::member::Entity")]
pub struct MemberDto {
    /// 用户名
    pub username: Option<String>,
    /// 年龄
    pub age: i32,
}
