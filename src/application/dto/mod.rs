// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// DTO模块
///
/// 定义查询结果的扁平化读取结构：
/// - 成员投影（member_dto）
/// - 成员与团队的联接扁平化投影（member_team_dto）
pub mod member_dto;
pub mod member_team_dto;
