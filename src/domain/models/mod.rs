// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 成员（member）：属于至多一个团队的个人记录
/// - 团队（team）：持有成员集合的分组记录
/// - 花名册（roster）：以ID为键的记录仓，负责维护成员与团队
///   之间双向关联的一致性
pub mod member;
pub mod roster;
pub mod team;
